use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaycircleError {
    #[error("invalid date format: {0}")]
    InvalidDate(String),

    #[error("invalid colour code: {0}")]
    InvalidColour(String),

    #[error("invalid time format: {0}")]
    InvalidTime(String),

    #[error("missing day metadata{}", .filename.as_deref().map(|f| format!(" for file '{f}'")).unwrap_or_default())]
    MissingDay { filename: Option<String> },

    #[error("no targets provided")]
    NoTargets,

    #[error("multiple targets not yet supported")]
    MultipleTargets,

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DaycircleError {
    /// Stable kind name, used by `Outcome::describe` for one-line messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDate(_) => "InvalidDate",
            Self::InvalidColour(_) => "InvalidColour",
            Self::InvalidTime(_) => "InvalidTime",
            Self::MissingDay { .. } => "MissingDay",
            Self::NoTargets => "NoTargets",
            Self::MultipleTargets => "MultipleTargets",
            Self::Render(_) => "Render",
            Self::Config(_) => "Config",
            Self::TomlParse(_) => "TomlParse",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "Io",
        }
    }
}

pub type Result<T> = std::result::Result<T, DaycircleError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
