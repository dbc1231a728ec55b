// Packing fixtures into concrete day, time, field and dressing-room slots.

use std::collections::BTreeMap;

use rand::{seq::SliceRandom, Rng};
use ::time::{Date, PrimitiveDateTime, Weekday};

use crate::{
    fixture::Fixture,
    time::format_time_slot,
    types::convert
};

use super::ScheduleConfig;

// Give every fixture in the batch a kick-off slot.
//
// Rounds are processed in ascending order and share one date cursor, so
// same-numbered rounds from different categories are packed onto the same
// match days. Fixtures without a round number (the finals) form a single
// block of their own.
pub fn allocate<R: Rng>(fixtures: &mut [Fixture], config: &ScheduleConfig, rng: &mut R) {
    let mut rounds: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
    for (i, fixture) in fixtures.iter().enumerate() {
        rounds.entry(fixture.round.unwrap_or(0)).or_default().push(i);
    }

    let slots_per_day = config.time_slots.len() * config.field_count as usize;
    let rooms = config.dressing_room_count as u16;
    let mut cursor = next_allowed_day(config.start_date, &config.allowed_weekdays);

    for (_, mut indices) in rounds {
        // Mix the round up so the same matchups do not always open the day.
        indices.shuffle(rng);

        let mut dressing_cursor: u16 = 0;
        let mut slot = 0;
        for &index in indices.iter() {
            if slot == slots_per_day {
                slot = 0;
                cursor = next_allowed_day(cursor.next_day().unwrap(), &config.allowed_weekdays);
            }

            // All fields kick off together before the next time slot starts.
            let time = config.time_slots[slot / config.field_count as usize];
            let field = convert::int::<usize, u8>(slot % config.field_count as usize) + 1;

            let fixture = &mut fixtures[index];
            fixture.kickoff = Some(PrimitiveDateTime::new(cursor, time));
            fixture.time = Some(format_time_slot(&time));
            fixture.field = Some(field);

            // Keeping the pair two rooms apart means they never share one.
            fixture.home_dressing_room = Some(convert::int::<u16, u8>(dressing_cursor % rooms + 1));
            fixture.away_dressing_room = Some(convert::int::<u16, u8>((dressing_cursor + 2) % rooms + 1));
            dressing_cursor = (dressing_cursor + 1) % rooms;

            slot += 1;
        }

        // A rest day between rounds.
        cursor = next_allowed_day(cursor.next_day().unwrap(), &config.allowed_weekdays);
    }
}

// Move the date forward to the next day the league plays on.
// The allowed set is never empty once the config is built, so this scans
// at most a week.
fn next_allowed_day(mut date: Date, allowed: &[Weekday]) -> Date {
    while !allowed.contains(&date.weekday()) {
        date = date.next_day().unwrap();
    }

    return date;
}
