use super::*;
use crate::graph::assemble;
use crate::parser::parse;

fn sample_data() -> GraphData {
    let day_file = parse(
        "day 01-02-2023\n#sleep 1a2b3c\n@wake 0630\nsleep 2200-0600\n",
        None,
        false,
    )
    .into_value();
    assemble(&[day_file]).into_value()
}

fn render_svg_text(data: &GraphData) -> String {
    let outcome = render(data, &data.event_colours, &ChartStyle::default(), ChartFormat::Svg);
    assert!(outcome.is_ok());
    String::from_utf8(outcome.into_value()).unwrap()
}

#[test]
fn chart_format_parses_and_displays() {
    assert_eq!("svg".parse::<ChartFormat>().unwrap(), ChartFormat::Svg);
    assert_eq!("HTML".parse::<ChartFormat>().unwrap(), ChartFormat::Html);
    assert!("png".parse::<ChartFormat>().is_err());
    assert_eq!(ChartFormat::Svg.to_string(), "svg");
    assert_eq!(ChartFormat::Html.extension(), "html");
}

#[test]
fn svg_contains_a_full_dial() {
    let svg = render_svg_text(&sample_data());

    // 24 wedges plus one arc band
    assert_eq!(svg.matches("<path").count(), 25);
    // hour numerals 0 and 23 are both labelled
    assert!(svg.contains(">0</text>"));
    assert!(svg.contains(">23</text>"));
}

#[test]
fn svg_titles_the_chart_with_its_date() {
    let svg = render_svg_text(&sample_data());
    assert!(svg.contains("<title>daycircle: 01-02-2023</title>"));
}

#[test]
fn svg_uses_assigned_colour_for_ranges() {
    let svg = render_svg_text(&sample_data());
    assert!(svg.contains(r##"stroke="#1a2b3c""##));
    assert!(svg.contains("<title>sleep: 2200-0600</title>"));
}

#[test]
fn svg_falls_back_to_palette_colours_for_unassigned_events() {
    let svg = render_svg_text(&sample_data());
    // "wake" has no assignment; the first marker fallback is used
    assert!(svg.contains(MARKER_FALLBACKS[0]));
    assert!(svg.contains("<title>wake: 0630</title>"));
}

#[test]
fn svg_legend_lists_each_event_name_once() {
    let day_file = parse(
        "day 01-02-2023\n@coffee 0800\n@coffee 1400\nsleep 2200-0600\n",
        None,
        false,
    )
    .into_value();
    let data = assemble(&[day_file]).into_value();
    let svg = render_svg_text(&data);

    assert_eq!(svg.matches(">coffee</text>").count(), 1);
    assert_eq!(svg.matches(">sleep</text>").count(), 1);
}

#[test]
fn svg_marker_angles_come_from_the_angle_mapper() {
    // A marker at 0600 points due west: line endpoint (140, 400).
    let day_file = parse("day 01-02-2023\n@wake 0600\n", None, false).into_value();
    let data = assemble(&[day_file]).into_value();
    let svg = render_svg_text(&data);

    assert!(svg.contains(r#"x2="140" y2="400""#));
}

#[test]
fn svg_applies_the_font_family() {
    let data = sample_data();
    let outcome = render(
        &data,
        &data.event_colours,
        &ChartStyle {
            font_family: Some("Iosevka".to_string()),
        },
        ChartFormat::Svg,
    );
    let svg = String::from_utf8(outcome.into_value()).unwrap();
    assert!(svg.contains(r#"font-family="Iosevka""#));
}

#[test]
fn html_format_wraps_the_svg_in_a_page() {
    let data = sample_data();
    let outcome = render(&data, &data.event_colours, &ChartStyle::default(), ChartFormat::Html);
    assert!(outcome.is_ok());

    let html = String::from_utf8(outcome.into_value()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<svg"));
    assert!(html.contains("<title>daycircle: 01-02-2023</title>"));
}

#[test]
fn render_handles_an_eventless_chart() {
    let day_file = parse("day 01-02-2023\n", None, false).into_value();
    let data = assemble(&[day_file]).into_value();
    let svg = render_svg_text(&data);

    assert_eq!(svg.matches("<path").count(), 24);
    assert!(!svg.contains("<rect"));
}
