// Final league standings, as computed by the external results tracker.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{Db, TeamId};

#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq)]
#[derive(Clone)]
#[derive(FromRow)]
pub struct Standing {
    // The lower the value, the better the placement. 1 is the scope winner.
    pub rank: u8,
    pub team_id: TeamId,
    pub points: u16,
    pub goal_difference: i16,
}

// Basics.
impl Standing {
    // Build an element.
    pub fn build(rank: u8, team_id: TeamId, points: u16, goal_difference: i16) -> Self {
        Self {
            rank: rank,
            team_id: team_id,
            points: points,
            goal_difference: goal_difference,
        }
    }

    // Save the Standing to database.
    pub async fn save(&self, db: &Db) {
        sqlx::query(
            "INSERT INTO Standing (rank, team_id, points, goal_difference)
            VALUES ($1, $2, $3, $4)"
        ).bind(self.rank)
        .bind(self.team_id)
        .bind(self.points)
        .bind(self.goal_difference)
        .execute(db).await.unwrap();
    }

    // Fetch ALL standings from the database, best placements first.
    pub async fn fetch_all(db: &Db) -> Vec<Self> {
        sqlx::query_as(
            "SELECT * FROM Standing
            ORDER BY rank ASC"
        ).fetch_all(db).await.unwrap()
    }
}
