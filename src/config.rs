//! Optional TOML configuration, merged under CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DaycircleError, Result};
use crate::render::ChartFormat;

/// Contents of `daycircle.toml`. Every field is optional; CLI flags
/// override whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format (`svg` or `html`).
    pub format: Option<ChartFormat>,
    /// Font family for chart text.
    pub font_family: Option<String>,
    /// Output file or directory.
    pub output: Option<PathBuf>,
    /// Colour files read before every chart.
    pub colour_files: Vec<PathBuf>,
}

impl Config {
    pub const DEFAULT_FILE: &'static str = "daycircle.toml";

    /// Loads configuration from `explicit` when given, otherwise from
    /// `daycircle.toml` in the working directory. A missing default file is
    /// not an error; a missing explicit file is.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or is not valid TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let default = Path::new(Self::DEFAULT_FILE);
                if default.is_file() {
                    Self::from_path(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DaycircleError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
