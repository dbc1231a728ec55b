// Picking the officiating vocal team for each fixture.

use std::collections::BTreeSet;

use log::warn;
use rand::{seq::IndexedRandom, Rng};

use crate::{fixture::Fixture, types::TeamId};

// Assign a vocal team to every fixture in the batch.
// Candidates are all teams playing anywhere in the batch, minus the two
// that are on the pitch.
pub fn assign_vocals<R: Rng>(fixtures: &mut [Fixture], known_teams: &[TeamId], rng: &mut R) {
    let batch: Vec<TeamId> = fixtures.iter()
        .flat_map(|fixture| [fixture.home_id, fixture.away_id])
        .collect::<BTreeSet<TeamId>>()
        .into_iter()
        .collect();

    for fixture in fixtures.iter_mut() {
        let pool: Vec<TeamId> = batch.iter()
            .copied()
            .filter(|id| *id != fixture.home_id && *id != fixture.away_id)
            .collect();

        fixture.vocal_id = match pool.choose(rng) {
            Some(id) => Some(*id),

            // With only two teams around, someone has to pull double duty.
            None => {
                warn!("no third team available for vocal duty in fixture {}", fixture.id);
                known_teams.choose(rng).copied()
            }
        };
    }
}
