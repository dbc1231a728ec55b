// The league database.
use sqlx::{Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};

use crate::types::Db;

pub async fn setup() -> Db {
    Sqlite::create_database("sqlite::memory:").await.unwrap();

    // Every connection to an in-memory database gets its own copy, so the
    // pool must stay on a single one.
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:").await.unwrap();
    sqlx::migrate!("./sql/migrations").run(&db).await.unwrap();

    return db;
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use ::time::{macros::date, Weekday};

    use crate::{
        fixture::{self, Fixture},
        schedule::{self, ScheduleConfig},
        standings::Standing,
        team::{Category, Group, Team},
        time::db_string_to_date
    };
    use super::setup;

    #[tokio::test]
    async fn teams_are_filtered_by_category_and_group() {
        let db = setup().await;
        Team::build_and_save(&db, "Halcones", Category::Maxima, None).await;
        Team::build_and_save(&db, "Pumas A", Category::Primera, Some(Group::A)).await;
        Team::build_and_save(&db, "Pumas B", Category::Primera, Some(Group::B)).await;
        Team::build_and_save(&db, "Linces", Category::Primera, Some(Group::A)).await;

        let maxima = Team::fetch_by_category(&db, Category::Maxima, None).await;
        assert_eq!(maxima.len(), 1);
        assert_eq!(maxima[0].name, "Halcones");

        let primera_a = Team::fetch_by_category(&db, Category::Primera, Some(Group::A)).await;
        assert_eq!(primera_a.len(), 2);
        assert!(primera_a.iter().all(|team| team.group == Some(Group::A)));

        let all = Team::fetch_all(&db).await;
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, 1);
    }

    #[tokio::test]
    async fn standings_come_back_best_first() {
        let db = setup().await;
        Standing::build(2, 5, 30, 4).save(&db).await;
        Standing::build(1, 3, 35, 12).save(&db).await;

        let standings = Standing::fetch_all(&db).await;
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[0].team_id, 3);
        assert_eq!(standings[1].goal_difference, 4);
    }

    #[tokio::test]
    async fn fixtures_round_trip_and_bulk_replace() {
        let db = setup().await;
        for name in ["Aguilas", "Tigres", "Osos", "Zorros"] {
            Team::build_and_save(&db, name, Category::Maxima, None).await;
        }

        let config = ScheduleConfig::build(
            date!(2026-01-03),
            vec![Weekday::Saturday],
            &["08:00", "10:00"],
            2,
            4,
        ).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let fixtures = schedule::regenerate_league(&db, &config, &mut rng).await;
        assert_eq!(fixtures.len(), 12);

        // Every field survives the store, kick-off timestamps included.
        let loaded = Fixture::fetch_all(&db).await;
        assert_eq!(loaded, fixtures);

        // The screen package groups the schedule by match day.
        let package = fixture::schedule_package(&loaded);
        let days = package.as_array().unwrap();
        assert!(!days.is_empty());
        let first_day = db_string_to_date(days[0]["date"].as_str().unwrap());
        assert_eq!(first_day, date!(2026-01-03));

        // Saving a new batch replaces the old one completely.
        let replacement = vec![fixtures[0].clone()];
        Fixture::save_all(&db, &replacement).await;
        assert_eq!(Fixture::fetch_all(&db).await, replacement);
    }

    #[tokio::test]
    async fn finals_are_stored_after_the_league_fixtures() {
        let db = setup().await;
        for name in ["Aguilas", "Tigres", "Osos", "Zorros"] {
            Team::build_and_save(&db, name, Category::Maxima, None).await;
        }
        Standing::build(1, 2, 28, 9).save(&db).await;
        Standing::build(2, 4, 25, 6).save(&db).await;
        Standing::build(3, 1, 20, -2).save(&db).await;
        Standing::build(4, 3, 11, -13).save(&db).await;

        let config = ScheduleConfig::build(
            date!(2026-01-03),
            vec![Weekday::Saturday],
            &["08:00", "10:00"],
            2,
            4,
        ).unwrap();

        let mut rng = StdRng::seed_from_u64(17);
        let league = schedule::regenerate_league(&db, &config, &mut rng).await;
        let finals = schedule::regenerate_finals(&db, &config, &mut rng).await;

        // One undivided category: a single final between ranks 1 and 2.
        assert_eq!(finals.len(), 1);
        assert_eq!((finals[0].home_id, finals[0].away_id), (2, 4));
        assert_eq!(finals[0].id, league.last().unwrap().id + 1);

        let stored = Fixture::fetch_all(&db).await;
        assert_eq!(stored.len(), league.len() + 1);
        assert_eq!(stored.last(), finals.last());
    }
}
