mod consts;
mod error;
mod prelude;
mod types;

pub use consts::*;
pub use error::DateError;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::convert::TryFrom;

/// An immutable day/month/year triple.
///
/// Construction never fails; any combination of integers can be held.
/// Whether the triple is a real date in the accepted year range is only
/// decided when asked, through [`DateValue::validate`] or
/// [`DateValue::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{day:02}/{month:02}/{year:04}")]
pub struct DateValue {
    day: i32,
    month: i32,
    year: i32,
}

/// A date known to be calendrically valid and within `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct CalendarDate {
    day: Day,
    month: Month,
    year: Year,
}

impl DateValue {
    /// Creates a date value without validating it
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns `true` if this is a real Gregorian date with a year in
    /// `MIN_YEAR..=MAX_YEAR`.
    ///
    /// Never panics, for any combination of components.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Checks the calendar first (month, then day for that month and year),
    /// then the accepted year range.
    ///
    /// # Errors
    /// Returns the first failed rule as a `DateError`.
    pub fn check(&self) -> Result<CalendarDate, DateError> {
        let month = Month::new(self.month)?;
        let day = Day::new(self.day, self.year, month)?;
        let year = Year::new(self.year)?;
        Ok(CalendarDate { day, month, year })
    }
}

impl CalendarDate {
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the checked components: (year, month, day)
    pub const fn components(&self) -> (Year, Month, Day) {
        (self.year, self.month, self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(i32::from(self.year.get()))
    }
}

impl TryFrom<DateValue> for CalendarDate {
    type Error = DateError;

    fn try_from(value: DateValue) -> Result<Self, Self::Error> {
        value.check()
    }
}

impl From<CalendarDate> for DateValue {
    fn from(date: CalendarDate) -> Self {
        Self::new(
            i32::from(date.day()),
            i32::from(date.month()),
            i32::from(date.year()),
        )
    }
}
