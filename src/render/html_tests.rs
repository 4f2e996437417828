use super::*;

#[test]
fn wrap_produces_standalone_page() {
    let html = wrap("<svg></svg>", "daycircle: 01-02-2023");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>daycircle: 01-02-2023</title>"));
    assert!(html.contains("<svg></svg>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn wrap_escapes_the_page_title() {
    let html = wrap("<svg></svg>", "a & b");
    assert!(html.contains("<title>a &amp; b</title>"));
}

#[test]
fn wrap_indents_the_embedded_svg() {
    let html = wrap("<svg>\n<path/>\n</svg>", "t");
    assert!(html.contains("    <svg>\n    <path/>\n    </svg>"));
}
