// Circle-method generation of the double round robin.

use crate::{
    fixture::{Fixture, Leg},
    team::{Category, Group},
    types::{convert, TeamId}
};

// Generate the full Ida/Vuelta fixture list for one category or group.
// Every pair of teams meets twice, once at home and once away.
pub fn generate(team_ids: &[TeamId], category: Category, group: Option<Group>) -> Vec<Fixture> {
    // A lonely team has nobody to play against.
    if team_ids.len() < 2 {
        return Vec::new();
    }

    // An empty position acts as the bye: whoever is paired with it rests.
    let mut positions: Vec<Option<TeamId>> = team_ids.iter().copied().map(Some).collect();
    if positions.len() % 2 != 0 {
        positions.push(None);
    }

    let n = positions.len();
    let rounds = n - 1;

    let mut fixtures = Vec::new();
    for round in 0..rounds {
        for i in 0..n / 2 {
            // The top half hosts during the Ida.
            if let (Some(home), Some(away)) = (positions[i], positions[n - 1 - i]) {
                fixtures.push(Fixture::build(
                    home, away, category, group,
                    Leg::Ida, Some(convert::int::<usize, u8>(round + 1)),
                ));
            }
        }

        // Position 0 stays put, the last team slides in right behind it.
        let last = positions.pop().unwrap();
        positions.insert(1, last);
    }

    // The Vuelta mirrors the Ida with hosting reversed.
    let round_count = convert::int::<usize, u8>(rounds);
    let mut vuelta = Vec::new();
    for fixture in fixtures.iter() {
        vuelta.push(Fixture::build(
            fixture.away_id, fixture.home_id, category, group,
            Leg::Vuelta, fixture.round.map(|round| round + round_count),
        ));
    }

    fixtures.append(&mut vuelta);
    return fixtures;
}
