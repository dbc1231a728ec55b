// Custom types that are widely used are defined here.

use sqlx::SqlitePool;

pub type Db = SqlitePool;

// Database ID types.
pub type TeamId = u16;
pub type FixtureId = u16;

// Type conversions.
pub mod convert {
    use std::fmt::Display;

    // Convert between integers.
    pub fn int<N1: Display + Copy, N2: TryFrom<N1>>(num: N1) -> N2 {
        match num.try_into() {
            Ok(n) => n,
            Err(_) => panic!("num: {num}")
        }
    }
}
