//! Date and time generator.
//!
//! Day, month and year use `0` to mean "pick one at random". Because of that
//! a literal zero can never be requested for those fields; the time fields use
//! `Option` instead and do not have this limitation.

use chrono::{NaiveDate, NaiveTime};
use datagen_core::{GeneratedDate, GeneratorError, Result};
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::trace;

/// Years picked when the request leaves the year unset.
pub const RANDOM_YEARS: RangeInclusive<i32> = 1970..=2050;

/// Days picked when the request leaves the day unset. Every month has them.
pub const RANDOM_DAYS: RangeInclusive<u32> = 1..=28;

/// Requested date fields. Zero day/month/year means random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRequest {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

impl DateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(mut self, second: u32) -> Self {
        self.second = Some(second);
        self
    }

    fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    fn validate(&self) -> Result<()> {
        // February before the generic day bound
        if self.day > 28 && self.month == 2 {
            return Err(invalid("day for February must be between 1 and 28"));
        }
        if self.day > 31 {
            return Err(invalid("day must be between 1 and 31"));
        }
        if self.month > 12 {
            return Err(invalid("month must be between 1 and 12"));
        }
        if self.year != 0 && !(1..=9999).contains(&self.year) {
            return Err(invalid("year must be between 1 and 9999"));
        }
        if self.hour.is_some_and(|h| h > 23) {
            return Err(invalid("hour must be between 0 and 23"));
        }
        if self.minute.is_some_and(|m| m > 59) {
            return Err(invalid("minute must be between 0 and 59"));
        }
        if self.second.is_some_and(|s| s > 59) {
            return Err(invalid("second must be between 0 and 59"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> GeneratorError {
    GeneratorError::DateFieldInvalid(msg.to_string())
}

/// Generate a date, filling unset fields with random values.
///
/// When any of hour, minute or second is given the result carries a time of
/// day, with the missing components set to zero.
pub fn generate_date<R: Rng>(rng: &mut R, request: &DateRequest) -> Result<GeneratedDate> {
    request.validate()?;

    let day = match request.day {
        0 => rng.random_range(RANDOM_DAYS),
        day => day,
    };
    let month = match request.month {
        0 => rng.random_range(1..=12),
        month => month,
    };
    let year = match request.year {
        0 => rng.random_range(RANDOM_YEARS),
        year => year,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        GeneratorError::DateFieldInvalid(format!(
            "{year:04}-{month:02}-{day:02} is not a calendar date"
        ))
    })?;

    let time = if request.has_time() {
        let (hour, minute, second) = (
            request.hour.unwrap_or(0),
            request.minute.unwrap_or(0),
            request.second.unwrap_or(0),
        );
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            GeneratorError::DateFieldInvalid(format!(
                "{hour:02}:{minute:02}:{second:02} is not a time of day"
            ))
        })?;
        Some(time)
    } else {
        None
    };

    trace!(%date, ?time, "Generated date");
    Ok(GeneratedDate::new(date, time))
}
