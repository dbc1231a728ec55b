// Moving a single fixture to a new date and time after the schedule is out.

use thiserror::Error;
use ::time::{Date, PrimitiveDateTime};

use crate::{
    fixture::Fixture,
    time::{format_time_slot, parse_time_slot},
    types::FixtureId
};

#[derive(Debug, Error)]
#[derive(PartialEq, Eq)]
pub enum RescheduleError {
    #[error("fixture {0} is not in the current schedule")]
    NotFound(FixtureId),

    #[error("invalid kick-off time {0:?}")]
    BadTime(String),
}

// Move one fixture to a new slot. Field, dressing rooms and vocal team
// stay as they were.
pub fn reschedule_fixture(fixtures: &mut [Fixture], id: FixtureId, new_date: Date, new_time: &str) -> Result<(), RescheduleError> {
    let time = match parse_time_slot(new_time) {
        Ok(time) => time,
        Err(_) => return Err(RescheduleError::BadTime(new_time.to_string())),
    };

    let fixture = match fixtures.iter_mut().find(|fixture| fixture.id == id) {
        Some(fixture) => fixture,
        None => return Err(RescheduleError::NotFound(id)),
    };

    // Only the first move records where the fixture originally was.
    if fixture.original_kickoff.is_none() {
        fixture.original_kickoff = fixture.kickoff;
    }

    fixture.kickoff = Some(PrimitiveDateTime::new(new_date, time));
    fixture.time = Some(format_time_slot(&time));
    fixture.rescheduled = true;

    return Ok(());
}

// Kick-off times already taken on the given day, one entry per occupied
// slot. Shown to the operator before confirming a move; an occupied slot
// is a warning, not a veto.
pub fn occupied_times(fixtures: &[Fixture], date: Date) -> Vec<String> {
    let mut times: Vec<String> = fixtures.iter()
        .filter(|fixture| fixture.kickoff.is_some_and(|kickoff| kickoff.date() == date))
        .filter_map(|fixture| fixture.time.clone())
        .collect();

    times.sort();
    return times;
}
