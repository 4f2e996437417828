use super::*;

#[test]
fn html_escape_replaces_special_characters() {
    assert_eq!(
        html_escape(r#"<a & "b">'c'"#),
        "&lt;a &amp; &quot;b&quot;&gt;&#39;c&#39;"
    );
}

#[test]
fn html_escape_passes_plain_text_through() {
    assert_eq!(html_escape("sleep 2200-0600"), "sleep 2200-0600");
}

#[test]
fn round_coord_trims_trig_noise() {
    assert_eq!(round_coord(400.000_000_000_000_06), 400.0);
    assert_eq!(round_coord(352.5), 352.5);
    assert_eq!(round_coord(86.249_999_999_9), 86.25);
}
