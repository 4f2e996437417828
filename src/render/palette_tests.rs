use super::*;

fn is_hex_colour(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

#[test]
fn dial_palette_covers_every_hour() {
    assert_eq!(DIAL_PALETTE.len(), 24);
    assert!(DIAL_PALETTE.iter().all(|c| is_hex_colour(c)));
}

#[test]
fn dial_palette_wraps_seamlessly_at_midnight() {
    // 2300 blends back into the colour 0000 starts from.
    assert_eq!(DIAL_PALETTE[23], DIAL_PALETTE[0]);
}

#[test]
fn fallback_palettes_are_valid_hex() {
    assert!(RANGE_FALLBACKS.iter().all(|c| is_hex_colour(c)));
    assert!(MARKER_FALLBACKS.iter().all(|c| is_hex_colour(c)));
}

#[test]
fn fallbacks_cycle_past_the_palette_length() {
    assert_eq!(range_fallback(0), RANGE_FALLBACKS[0]);
    assert_eq!(range_fallback(RANGE_FALLBACKS.len()), RANGE_FALLBACKS[0]);
    assert_eq!(marker_fallback(7), MARKER_FALLBACKS[1]);
}
