use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_YEAR};

/// Reasons a day/month/year triple is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month is outside `1..=MAX_MONTH`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(i32),

    /// Day is zero, negative, or past the end of the month.
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { day: i32, month: u8, year: i32 },

    /// Calendar date is real but outside the accepted year range.
    #[error("Year out of range: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),
}
