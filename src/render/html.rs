//! Standalone HTML wrapper around the rendered SVG chart.

use std::fmt::Write;

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#;

const HTML_STYLE: &str = r"    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            background: #f8fafc;
            display: flex;
            justify-content: center;
            padding: 2rem;
        }
        svg { max-width: 56rem; width: 100%; height: auto; }
    </style>
</head>
<body>
";

const HTML_FOOTER: &str = "</body>\n</html>\n";

/// Wraps an SVG document in a minimal standalone page.
#[must_use]
pub(crate) fn wrap(svg: &str, title: &str) -> String {
    let mut output = String::new();

    output.push_str(HTML_HEADER);
    let _ = writeln!(output, "    <title>{}</title>", super::svg::html_escape(title));
    output.push_str(HTML_STYLE);
    for line in svg.lines() {
        let _ = writeln!(output, "    {line}");
    }
    output.push_str(HTML_FOOTER);

    output
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
