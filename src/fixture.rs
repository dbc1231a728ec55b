// Generated matches and their schedule slots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use ::time::{Date, PrimitiveDateTime};

use crate::{
    team::{Category, Group},
    time::date_to_db_string,
    types::{convert, Db, FixtureId, TeamId}
};

// Which stage of the competition a fixture belongs to.
#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq, Eq, Hash)]
#[derive(Clone, Copy)]
#[derive(sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    Ida,
    Vuelta,
    Semifinal,
    Final,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq)]
#[derive(Clone)]
#[derive(FromRow)]
pub struct Fixture {
    pub id: FixtureId,
    pub home_id: TeamId,
    pub away_id: TeamId,
    pub category: Category,
    #[sqlx(rename = "team_group")]
    pub group: Option<Group>,
    pub leg: Leg,

    // Round within the double round robin. Finals fixtures have none.
    pub round: Option<u8>,

    // Filled in by the slot allocator.
    pub kickoff: Option<PrimitiveDateTime>,
    #[sqlx(rename = "kickoff_time")]
    pub time: Option<String>,
    pub field: Option<u8>,
    pub home_dressing_room: Option<u8>,
    pub away_dressing_room: Option<u8>,
    pub vocal_id: Option<TeamId>,

    // Reschedule bookkeeping. original_kickoff is set on the first move only.
    pub original_kickoff: Option<PrimitiveDateTime>,
    pub rescheduled: bool,
}

// Basics.
impl Fixture {
    // Build an element.
    pub fn build(home_id: TeamId, away_id: TeamId, category: Category, group: Option<Group>, leg: Leg, round: Option<u8>) -> Self {
        Self {
            id: 0,
            home_id: home_id,
            away_id: away_id,
            category: category,
            group: group,
            leg: leg,
            round: round,
            kickoff: None,
            time: None,
            field: None,
            home_dressing_room: None,
            away_dressing_room: None,
            vocal_id: None,
            original_kickoff: None,
            rescheduled: false,
        }
    }

    // Create an ID.
    pub fn create_id(&mut self, id: usize) {
        self.id = convert::int(id);
    }

    // Replace the whole stored schedule with the given batch.
    pub async fn save_all(db: &Db, fixtures: &[Self]) {
        sqlx::query("DELETE FROM Fixture").execute(db).await.unwrap();

        for fixture in fixtures {
            fixture.save(db).await;
        }
    }

    // Save the Fixture to database.
    async fn save(&self, db: &Db) {
        sqlx::query(
            "INSERT INTO Fixture
            (id, home_id, away_id, category, team_group, leg, round, kickoff, kickoff_time, field, home_dressing_room, away_dressing_room, vocal_id, original_kickoff, rescheduled)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)"
        ).bind(self.id)
        .bind(self.home_id)
        .bind(self.away_id)
        .bind(self.category)
        .bind(self.group)
        .bind(self.leg)
        .bind(self.round)
        .bind(self.kickoff)
        .bind(self.time.as_deref())
        .bind(self.field)
        .bind(self.home_dressing_room)
        .bind(self.away_dressing_room)
        .bind(self.vocal_id)
        .bind(self.original_kickoff)
        .bind(self.rescheduled)
        .execute(db).await.unwrap();
    }

    // Fetch ALL fixtures from the database.
    pub async fn fetch_all(db: &Db) -> Vec<Self> {
        sqlx::query_as(
            "SELECT * FROM Fixture
            ORDER BY id ASC"
        ).fetch_all(db).await.unwrap()
    }
}

// Get some nice JSON for the schedule screen, grouped by match day.
pub fn schedule_package(fixtures: &[Fixture]) -> serde_json::Value {
    let mut days: BTreeMap<Date, Vec<&Fixture>> = BTreeMap::new();
    for fixture in fixtures {
        if let Some(kickoff) = fixture.kickoff {
            days.entry(kickoff.date()).or_default().push(fixture);
        }
    }

    let mut packaged_days = Vec::new();
    for (date, day_fixtures) in days {
        let mut matches = Vec::new();
        for fixture in day_fixtures {
            matches.push(json!({
                "id": fixture.id,
                "home_id": fixture.home_id,
                "away_id": fixture.away_id,
                "category": fixture.category,
                "leg": fixture.leg,
                "time": fixture.time,
                "field": fixture.field,
                "vocal_id": fixture.vocal_id,
                "rescheduled": fixture.rescheduled,
            }));
        }

        packaged_days.push(json!({
            "date": date_to_db_string(&date),
            "matches": matches,
        }));
    }

    json!(packaged_days)
}
