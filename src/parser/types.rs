//! Typed scalars and events of the day-file grammar.

use std::fmt;

use crate::error::DaycircleError;
use crate::outcome::Outcome;

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Calendar date, `dd-mm-yyyy` in source text.
///
/// No calendar-range validation: day 32 or month 13 decode fine as long as
/// the digit groups are numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl Date {
    #[must_use]
    pub fn decode(input: &str) -> Outcome<Self> {
        let parts: Vec<&str> = input.split('-').collect();

        if let [day, month, year] = parts[..]
            && is_digits(day)
            && is_digits(month)
            && is_digits(year)
            && let (Ok(day), Ok(month), Ok(year)) = (day.parse(), month.parse(), year.parse())
        {
            return Outcome::ok(Self { day, month, year });
        }

        Outcome::err(
            Self::default(),
            DaycircleError::InvalidDate(input.to_string()),
        )
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

/// Six-digit hex colour code, stored as written (case preserved).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colour {
    code: String,
}

impl Colour {
    #[must_use]
    pub fn decode(input: &str) -> Outcome<Self> {
        if input.len() == 6 && input.bytes().all(|b| b.is_ascii_hexdigit()) {
            Outcome::ok(Self {
                code: input.to_string(),
            })
        } else {
            Outcome::err(
                Self::default(),
                DaycircleError::InvalidColour(input.to_string()),
            )
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.code)
    }
}

/// Wall-clock time, `HHMM` in source text.
///
/// Hour and minute are not range-checked against 0-23/0-59; the grammar only
/// requires four digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
}

impl Time {
    #[must_use]
    pub fn decode(input: &str) -> Outcome<Self> {
        if input.len() == 4
            && is_digits(input)
            && let (Ok(hour), Ok(minute)) = (input[..2].parse(), input[2..].parse())
        {
            Outcome::ok(Self { hour, minute })
        } else {
            Outcome::err(
                Self::default(),
                DaycircleError::InvalidTime(input.to_string()),
            )
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

/// A single timed event, in source order within a day file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Instantaneous event (`@name HHMM`).
    Marker { name: String, time: Time },
    /// Duration event (`name HHMM-HHMM`). Start and end are independently
    /// decoded; no ordering is enforced between them.
    Range { name: String, start: Time, end: Time },
}

impl Event {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Marker { name, .. } | Self::Range { name, .. } => name,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
