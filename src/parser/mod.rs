//! Best-effort parser for daycircle plaintext files.
//!
//! Grammar, one record per line; blank and unrecognized lines are ignored:
//!
//! ```text
//! line        = day-line | colour-line | marker-line | range-line
//! day-line    = "day" WS date          ; date = DD-MM-YYYY, digits only
//! colour-line = "#" NAME WS hex6
//! marker-line = "@" NAME WS time       ; time = HHMM, 4 digits
//! range-line  = NAME WS time "-" time
//! ```
//!
//! A line that fails to decode is dropped silently; only a missing `day`
//! record is a file-level error, and even that carries the partial data.

mod line;
mod types;

pub use line::LineKind;
pub use types::{Colour, Date, Event, Time};

use indexmap::IndexMap;

use crate::error::DaycircleError;
use crate::outcome::Outcome;

use line::classify;

/// Everything collected from one day file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayFile {
    /// The day this file describes. Zero-valued for colour-only documents.
    pub day: Date,
    /// Event name to colour assignments, in first-assignment order (the
    /// renderer's legend order). Later assignments for a name overwrite the
    /// colour but keep the original position.
    pub event_colours: IndexMap<String, Colour>,
    /// Events in file order.
    pub events: Vec<Event>,
}

fn decode_time_range(value: &str) -> Option<(Time, Time)> {
    let parts: Vec<&str> = value.split('-').collect();

    if let [start, end] = parts[..] {
        let start = Time::decode(start);
        let end = Time::decode(end);
        if start.is_ok() && end.is_ok() {
            return Some((start.into_value(), end.into_value()));
        }
    }

    None
}

/// Parses a day file, best-effort.
///
/// Malformed lines are dropped without aborting the scan. A document with no
/// `day` record fails with `MissingDay` unless `is_colour_file` is set (for
/// documents read purely for their colour assignments); the failed outcome
/// still carries everything that was collected, so callers may inspect the
/// partial data instead of discarding it.
#[must_use]
pub fn parse(content: &str, filename: Option<&str>, is_colour_file: bool) -> Outcome<DayFile> {
    let mut day: Option<Date> = None;
    let mut event_colours: IndexMap<String, Colour> = IndexMap::new();
    let mut events: Vec<Event> = Vec::new();

    for raw_line in content.lines() {
        let Some((kind, key, value)) = classify(raw_line) else {
            continue;
        };

        match kind {
            LineKind::Day => {
                let decoded = Date::decode(value);
                if decoded.is_ok() {
                    day = Some(decoded.into_value());
                }
            }
            LineKind::Colour => {
                let decoded = Colour::decode(value);
                if decoded.is_ok() {
                    event_colours.insert(key.to_string(), decoded.into_value());
                }
            }
            LineKind::Marker => {
                let decoded = Time::decode(value);
                if decoded.is_ok() {
                    events.push(Event::Marker {
                        name: key.to_string(),
                        time: decoded.into_value(),
                    });
                }
            }
            LineKind::Range => {
                if let Some((start, end)) = decode_time_range(value) {
                    events.push(Event::Range {
                        name: key.to_string(),
                        start,
                        end,
                    });
                }
            }
        }
    }

    let Some(day) = day else {
        let partial = DayFile {
            day: Date::default(),
            event_colours,
            events,
        };
        if is_colour_file {
            return Outcome::ok(partial);
        }
        return Outcome::err(
            partial,
            DaycircleError::MissingDay {
                filename: filename.map(str::to_string),
            },
        );
    };

    Outcome::ok(DayFile {
        day,
        event_colours,
        events,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
