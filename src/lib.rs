pub mod database;
pub mod fixture;
pub mod schedule;
pub mod standings;
pub mod team;
pub mod time;
pub mod types;
