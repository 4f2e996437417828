//! Built-in colour tables for the dial and for events without an
//! assigned colour.

/// One dial colour per hour from midnight; the blends follow a Singapore
/// sun cycle (deep night, dawn, daylight, dusk, back to night).
pub const DIAL_PALETTE: [&str; 24] = [
    "#0e0c09", "#0c0a08", "#0b0907", "#0a0806", "#080605", // 0000-0400
    "#4f454b", "#f6b697", "#d5bd9e", // 0500-0700
    "#b2bbaf", "#a4b2ac", "#97a8aa", "#8a9fa7", "#7c96a5", // 0800-1200
    "#7c96a5", "#7c96a5", "#7c96a5", "#7c96a5", "#7c96a5", // 1300-1700
    "#272f42", "#181a24", "#080605", // 1800-2000
    "#080605", "#0b0907", "#0e0c09", // 2100-2300
];

/// Fallback colours for range events, pastel so the dial stays readable
/// underneath the bands.
pub const RANGE_FALLBACKS: [&str; 6] = [
    "#a1c9f4", "#8de5a1", "#ff9f9b", "#d0bbff", "#fffea3", "#b9f2f0",
];

/// Fallback colours for marker events, saturated so thin lines stay visible.
pub const MARKER_FALLBACKS: [&str; 6] = [
    "#f77189", "#bb9832", "#50b131", "#36ada4", "#3ba3ec", "#e866f4",
];

/// Fallback colour for the nth range event without an assignment.
#[must_use]
pub fn range_fallback(index: usize) -> &'static str {
    RANGE_FALLBACKS[index % RANGE_FALLBACKS.len()]
}

/// Fallback colour for the nth marker event without an assignment.
#[must_use]
pub fn marker_fallback(index: usize) -> &'static str {
    MARKER_FALLBACKS[index % MARKER_FALLBACKS.len()]
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
