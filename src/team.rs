// Data for teams.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{Db, TeamId};

// The tiers a team can be registered in.
#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq, Eq, Hash)]
#[derive(Clone, Copy)]
#[derive(sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Maxima,
    Primera,
    Segunda,
}

// Every category, in ranking order.
pub const CATEGORIES: [Category; 3] = [Category::Maxima, Category::Primera, Category::Segunda];

// Pool label for categories that are split into two parallel groups.
#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq, Eq, Hash)]
#[derive(Clone, Copy)]
#[derive(sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Group {
    A,
    B,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq)]
#[derive(Clone)]
#[derive(FromRow)]
pub struct Team {
    pub id: TeamId,
    #[sqlx(rename = "team_name")]
    pub name: String,
    pub category: Category,
    #[sqlx(rename = "team_group")]
    pub group: Option<Group>,
}

// Basics.
impl Team {
    // Build an element.
    pub fn build(name: &str, category: Category, group: Option<Group>) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            category: category,
            group: group,
        }
    }

    // Build a team and save it to the database.
    pub async fn build_and_save(db: &Db, name: &str, category: Category, group: Option<Group>) -> Self {
        let mut team = Self::build(name, category, group);
        team.id = Self::next_id(db).await;
        team.save(db).await;

        return team;
    }

    // Get the next ID to use.
    async fn next_id(db: &Db) -> TeamId {
        let max: Option<TeamId> = sqlx::query_scalar("SELECT max(id) FROM Team").fetch_one(db).await.unwrap();
        match max {
            Some(n) => n + 1,
            _ => 1,
        }
    }

    // Save the Team to database.
    pub async fn save(&self, db: &Db) {
        sqlx::query(
            "INSERT INTO Team (id, team_name, category, team_group)
            VALUES ($1, $2, $3, $4)"
        ).bind(self.id)
        .bind(self.name.as_str())
        .bind(self.category)
        .bind(self.group)
        .execute(db).await.unwrap();
    }

    // Fetch ALL teams from the database.
    pub async fn fetch_all(db: &Db) -> Vec<Self> {
        sqlx::query_as(
            "SELECT * FROM Team
            ORDER BY id ASC"
        ).fetch_all(db).await.unwrap()
    }

    // Get all teams of one category, optionally narrowed down to one group.
    pub async fn fetch_by_category(db: &Db, category: Category, group: Option<Group>) -> Vec<Self> {
        match group {
            Some(group) => sqlx::query_as(
                "SELECT * FROM Team
                WHERE category = $1 AND team_group = $2
                ORDER BY id ASC"
            ).bind(category)
            .bind(group)
            .fetch_all(db).await.unwrap(),

            None => sqlx::query_as(
                "SELECT * FROM Team
                WHERE category = $1
                ORDER BY id ASC"
            ).bind(category)
            .fetch_all(db).await.unwrap(),
        }
    }
}
