//! Wall-clock time to dial angle conversion.

use crate::parser::Time;

/// Converts a time to a position in degrees on the dial, where 1200h is
/// 90deg, 0000h is 270deg, and the dial is anchored at 1800h (the day
/// visually starts at evening). Hours advance clockwise in 15deg steps;
/// minutes interpolate linearly backward within the hour's slot.
///
/// Pure and total. The renderer derives every wedge, arc, and marker
/// position from this function, so the arithmetic must stay exactly as
/// written.
#[must_use]
pub fn time_to_deg(time: Time) -> f64 {
    let h = f64::from(time.hour % 24);
    let m = f64::from(time.minute % 60);

    // counterclockwise starting from 1800; hours 18-23 get the +360
    // correction so the anchor lands at 360 rather than going negative
    let dh = (270.0 - h * 15.0) + if time.hour % 24 >= 18 { 360.0 } else { 0.0 };
    let dm = -(15.0 * (m / 60.0));
    dh + dm
}

#[cfg(test)]
#[path = "angle_tests.rs"]
mod tests;
