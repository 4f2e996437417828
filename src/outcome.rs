//! Value-with-optional-failure container used by the decoders and the
//! public entry points.

use crate::error::{DaycircleError, Result};

/// Pairs a value with an optional failure.
///
/// On failure the carried value is a caller-supplied fallback. For most
/// failures the fallback is a zero value and only the error matters, but
/// `parse` deliberately attaches usable partial data to a missing-day
/// failure, so the value stays inspectable in both states.
#[derive(Debug)]
pub struct Outcome<T> {
    value: T,
    error: Option<DaycircleError>,
}

impl<T> Outcome<T> {
    /// A successful outcome.
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// A failed outcome carrying `fallback` alongside the error.
    #[must_use]
    pub const fn err(fallback: T, error: DaycircleError) -> Self {
        Self {
            value: fallback,
            error: Some(error),
        }
    }

    /// Runs a fallible computation and converts it into a uniform `Outcome`,
    /// substituting `fallback` as the carried value on failure.
    ///
    /// Applied at the `assemble` and `render` entry points only; the
    /// line-by-line scan in `parse` drops bad lines itself and must not be
    /// blanketed by this adapter.
    pub fn capture(fallback: T, f: impl FnOnce() -> Result<T>) -> Self {
        match f() {
            Ok(value) => Self::ok(value),
            Err(error) => Self::err(fallback, error),
        }
    }

    /// True iff no failure is attached.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The carried value, regardless of success or failure.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the outcome, returning the carried value regardless of state.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// The attached failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&DaycircleError> {
        self.error.as_ref()
    }

    /// Converts into a plain `Result`, propagating the attached failure.
    ///
    /// The fallback value is dropped on failure, never silently substituted.
    ///
    /// # Errors
    /// Returns the attached failure when the outcome is erroneous.
    pub fn into_result(self) -> Result<T> {
        match self.error {
            None => Ok(self.value),
            Some(error) => Err(error),
        }
    }

    /// Human-readable one-line failure message (`"<message> (<kind>)"`),
    /// or an empty string when successful.
    #[must_use]
    pub fn describe(&self) -> String {
        self.error.as_ref().map_or_else(String::new, |error| {
            let message = error.to_string();
            if message.is_empty() {
                error.kind().to_string()
            } else {
                format!("{message} ({})", error.kind())
            }
        })
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
