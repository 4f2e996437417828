//! Classification of raw day-file lines into record kinds.

/// Record kind of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `day DD-MM-YYYY`
    Day,
    /// `#name RRGGBB`
    Colour,
    /// `@name HHMM`
    Marker,
    /// `name HHMM-HHMM` (default for any bare key)
    Range,
}

/// Splits a line into `(kind, key, value)`.
///
/// Returns `None` for lines with no key/value split (blank lines, bare
/// words); such lines contribute nothing and raise no error. The precedence
/// is load-bearing: the `day` keyword is checked before the prefix checks,
/// and anything unprefixed falls through to `Range`.
pub(crate) fn classify(line: &str) -> Option<(LineKind, &str, &str)> {
    let trimmed = line.trim();
    let (key, value) = trimmed.split_once(char::is_whitespace)?;
    let value = value.trim_start();

    if key == "day" {
        return Some((LineKind::Day, key, value));
    }
    if key.starts_with('#') {
        return Some((LineKind::Colour, key.trim_start_matches('#'), value));
    }
    if key.starts_with('@') {
        return Some((LineKind::Marker, key.trim_start_matches('@'), value));
    }

    Some((LineKind::Range, key, value))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
