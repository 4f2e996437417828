//! Output helpers for SVG text and coordinates.

/// Escapes text for safe embedding in SVG/HTML markup.
#[must_use]
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Rounds a coordinate to 3 decimals to keep trig noise out of the markup.
#[must_use]
pub(crate) fn round_coord(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
