// Schedule generation for the league: round robin fixtures, slot
// allocation, vocal duty, finals and rescheduling.

pub mod allocator;
pub mod finals;
pub mod reschedule;
pub mod round_robin;
pub mod vocal;


use std::collections::BTreeSet;

use log::debug;
use rand::Rng;
use thiserror::Error;
use ::time::{Date, Time, Weekday};

use crate::{
    fixture::Fixture,
    standings::Standing,
    team::{Category, Group, Team},
    time::parse_time_slot,
    types::{Db, FixtureId, TeamId}
};

pub use reschedule::{occupied_times, reschedule_fixture, RescheduleError};

// Settings-form input that cannot be scheduled against is rejected here,
// before any allocation starts.
#[derive(Debug, Error)]
#[derive(PartialEq, Eq)]
pub enum ConfigError {
    #[error("no playing weekdays were selected")]
    NoWeekdays,

    #[error("no kick-off times were provided")]
    NoTimeSlots,

    #[error("field count must be at least 1")]
    NoFields,

    #[error("at least 4 dressing rooms are needed, got {0}")]
    TooFewDressingRooms(u8),

    #[error("invalid kick-off time {0:?}")]
    BadTimeSlot(String),
}

// Scheduling parameters coming from the settings form.
// A built config is always valid, so the allocator never has to re-check it.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    start_date: Date,
    allowed_weekdays: Vec<Weekday>,
    time_slots: Vec<Time>,
    field_count: u8,
    dressing_room_count: u8,
}

impl ScheduleConfig {
    // Build the element, validating every form input.
    pub fn build(
        start_date: Date,
        allowed_weekdays: Vec<Weekday>,
        time_slots: &[impl AsRef<str>],
        field_count: u8,
        dressing_room_count: u8,
    ) -> Result<Self, ConfigError> {
        if allowed_weekdays.is_empty() {
            return Err(ConfigError::NoWeekdays);
        }
        if time_slots.is_empty() {
            return Err(ConfigError::NoTimeSlots);
        }
        if field_count == 0 {
            return Err(ConfigError::NoFields);
        }

        // Two rooms apart per match; four is the minimum that keeps
        // home and away apart on every wrap.
        if dressing_room_count < 4 {
            return Err(ConfigError::TooFewDressingRooms(dressing_room_count));
        }

        let mut parsed_slots = Vec::new();
        for slot in time_slots {
            match parse_time_slot(slot.as_ref()) {
                Ok(time) => parsed_slots.push(time),
                Err(_) => return Err(ConfigError::BadTimeSlot(slot.as_ref().to_string())),
            }
        }

        Ok(Self {
            start_date: start_date,
            allowed_weekdays: allowed_weekdays,
            time_slots: parsed_slots,
            field_count: field_count,
            dressing_room_count: dressing_room_count,
        })
    }
}

// Generate the complete double round robin for every category and group,
// place every fixture into a concrete slot and hand out vocal duty.
pub fn generate_league_schedule<R: Rng>(teams: &[Team], config: &ScheduleConfig, rng: &mut R) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for (category, group) in scopes(teams) {
        let ids: Vec<TeamId> = teams.iter()
            .filter(|team| team.category == category && team.group == group)
            .map(|team| team.id)
            .collect();

        fixtures.append(&mut round_robin::generate(&ids, category, group));
    }

    assign_ids(&mut fixtures, 1);
    allocator::allocate(&mut fixtures, config, rng);

    let known: Vec<TeamId> = teams.iter().map(|team| team.id).collect();
    vocal::assign_vocals(&mut fixtures, &known, rng);

    debug!("generated {} fixtures for {} teams", fixtures.len(), teams.len());
    return fixtures;
}

// Derive the finals fixtures from the standings and schedule them with
// finals-specific parameters. Vocal duty stays within the finalists.
pub fn generate_finals_schedule<R: Rng>(
    teams: &[Team],
    standings: &[Standing],
    config: &ScheduleConfig,
    first_id: FixtureId,
    rng: &mut R,
) -> Vec<Fixture> {
    let mut fixtures = finals::generate(teams, standings);

    assign_ids(&mut fixtures, first_id as usize);
    allocator::allocate(&mut fixtures, config, rng);

    let finalists: Vec<TeamId> = fixtures.iter()
        .flat_map(|fixture| [fixture.home_id, fixture.away_id])
        .collect::<BTreeSet<TeamId>>()
        .into_iter()
        .collect();
    vocal::assign_vocals(&mut fixtures, &finalists, rng);

    return fixtures;
}

// Regenerate the league schedule and replace whatever was stored.
pub async fn regenerate_league<R: Rng>(db: &Db, config: &ScheduleConfig, rng: &mut R) -> Vec<Fixture> {
    let teams = Team::fetch_all(db).await;

    let fixtures = generate_league_schedule(&teams, config, rng);
    Fixture::save_all(db, &fixtures).await;

    return fixtures;
}

// Generate the finals once the round robin is decided and store them
// alongside the league fixtures.
pub async fn regenerate_finals<R: Rng>(db: &Db, config: &ScheduleConfig, rng: &mut R) -> Vec<Fixture> {
    let teams = Team::fetch_all(db).await;
    let standings = Standing::fetch_all(db).await;
    let mut stored = Fixture::fetch_all(db).await;

    // Finals IDs continue where the stored batch ends.
    let next_id = match stored.last() {
        Some(fixture) => fixture.id + 1,
        None => 1,
    };

    let fixtures = generate_finals_schedule(&teams, &standings, config, next_id, rng);

    stored.extend(fixtures.iter().cloned());
    Fixture::save_all(db, &stored).await;

    return fixtures;
}

// Distinct (category, group) scopes, in team-list order.
fn scopes(teams: &[Team]) -> Vec<(Category, Option<Group>)> {
    let mut scopes = Vec::new();
    for team in teams {
        let scope = (team.category, team.group);
        if !scopes.contains(&scope) {
            scopes.push(scope);
        }
    }

    return scopes;
}

// Stamp every fixture in the batch with its own ID.
fn assign_ids(fixtures: &mut [Fixture], first: usize) {
    for (i, fixture) in fixtures.iter_mut().enumerate() {
        fixture.create_id(first + i);
    }
}
