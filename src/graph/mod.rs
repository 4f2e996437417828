//! Render-ready chart data assembled from parsed day files.

mod angle;

pub use angle::time_to_deg;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::DaycircleError;
use crate::outcome::Outcome;
use crate::parser::{Colour, Date, DayFile, Event};

/// Everything the renderer needs for one chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphData {
    pub date: Option<Date>,
    /// End of the charted period. Always `None` until multi-day timelines
    /// are supported.
    pub date_end: Option<Date>,
    pub event_colours: IndexMap<String, Colour>,
    pub events: Vec<Event>,
}

impl GraphData {
    /// Derives the output file path for this chart.
    ///
    /// Without an override the name is `<date><date_end>.<file_type>` in the
    /// current directory (or `graph.<file_type>` when no date is set). An
    /// override that is an existing directory only changes the directory; any
    /// other override path supplies the file name itself, with its parent as
    /// the directory when that parent exists.
    #[must_use]
    pub fn to_filename(&self, name_override: Option<&Path>, file_type: &str) -> PathBuf {
        let mut working_dir = PathBuf::new();
        let mut filename = format!("graph.{file_type}");
        let mut overridden = false;

        if let Some(over) = name_override {
            if over.is_dir() {
                working_dir = over.to_path_buf();
            } else {
                if let Some(parent) = over.parent()
                    && parent.is_dir()
                {
                    working_dir = parent.to_path_buf();
                }
                if let Some(name) = over.file_name() {
                    filename = format!("{}.{file_type}", name.to_string_lossy());
                    overridden = true;
                }
            }
        }

        if !overridden && let Some(date) = self.date {
            let end = self
                .date_end
                .map(|date_end| date_end.to_string())
                .unwrap_or_default();
            filename = format!("{date}{end}.{file_type}");
        }

        working_dir.join(filename)
    }
}

/// Combines parsed day files into a single chart.
///
/// Exactly one input document is supported; an empty input is invalid and
/// more than one is an acknowledged future capability, not a bug to work
/// around.
#[must_use]
pub fn assemble(targets: &[DayFile]) -> Outcome<GraphData> {
    Outcome::capture(GraphData::default(), || match targets {
        [] => Err(DaycircleError::NoTargets),
        [target] => Ok(GraphData {
            date: Some(target.day),
            date_end: None,
            event_colours: target.event_colours.clone(),
            events: target.events.clone(),
        }),
        _ => Err(DaycircleError::MultipleTargets),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
