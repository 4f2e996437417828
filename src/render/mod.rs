//! Radial chart rendering.
//!
//! The chart is an 800x800 SVG: 24 dial wedges coloured by the built-in day
//! palette, one stroked arc band per range event, one radial tick per marker
//! event, and a legend row. Every angular position comes from
//! [`crate::graph::time_to_deg`].

mod html;
mod palette;
mod svg;

pub use palette::{DIAL_PALETTE, MARKER_FALLBACKS, RANGE_FALLBACKS};

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::graph::{GraphData, time_to_deg};
use crate::outcome::Outcome;
use crate::parser::{Colour, Event, Time};

use svg::{ArcBand, DialLabel, LegendSwatch, MarkerLine, SvgBuilder, Wedge};

const CANVAS_SIZE: f64 = 800.0;
const CENTRE: f64 = 400.0;
const DIAL_RADIUS: f64 = 260.0;
const LABEL_RADIUS: f64 = 278.0;
const ARC_RADIUS: f64 = 150.0;
const ARC_WIDTH: f64 = 56.0;
const MARKER_WIDTH: f64 = 4.0;
const HOUR_SPAN_DEG: f64 = 15.0;
const HOUR_FONT_SIZE: f64 = 14.0;
const LEGEND_FONT_SIZE: f64 = 13.0;
const LEGEND_SWATCH_SIZE: f64 = 12.0;
const LEGEND_X: f64 = 60.0;
const LEGEND_Y: f64 = 764.0;
const LABEL_COLOUR: &str = "#64748b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Svg,
    Html,
}

impl ChartFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Html => "html",
        }
    }
}

impl FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "html" => Ok(Self::Html),
            _ => Err(format!("Unknown chart format: {s}")),
        }
    }
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Appearance knobs that come from configuration rather than the day data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartStyle {
    /// Font family for chart text; resolution is left to the viewer.
    pub font_family: Option<String>,
}

/// Renders a chart into an encoded buffer in the requested format.
#[must_use]
pub fn render(
    data: &GraphData,
    event_colours: &IndexMap<String, Colour>,
    style: &ChartStyle,
    format: ChartFormat,
) -> Outcome<Vec<u8>> {
    Outcome::capture(Vec::new(), || {
        let svg = chart_svg(data, event_colours, style);
        Ok(match format {
            ChartFormat::Svg => svg.into_bytes(),
            ChartFormat::Html => html::wrap(&svg, &chart_title(data)).into_bytes(),
        })
    })
}

fn chart_title(data: &GraphData) -> String {
    data.date.map_or_else(
        || "daycircle".to_string(),
        |date| {
            let end = data
                .date_end
                .map(|date_end| date_end.to_string())
                .unwrap_or_default();
            format!("daycircle: {date}{end}")
        },
    )
}

fn resolve_colour(
    event_colours: &IndexMap<String, Colour>,
    name: &str,
    fallback: &str,
) -> String {
    event_colours
        .get(name)
        .map_or_else(|| fallback.to_string(), Colour::to_string)
}

fn dial(mut builder: SvgBuilder) -> SvgBuilder {
    for (hour, colour) in DIAL_PALETTE.iter().enumerate() {
        let hour_u32 = u32::try_from(hour).unwrap_or_default();
        let mid_deg = time_to_deg(Time {
            hour: hour_u32,
            minute: 0,
        });

        builder = builder
            .push_element(&Wedge {
                cx: CENTRE,
                cy: CENTRE,
                radius: DIAL_RADIUS,
                mid_deg,
                span_deg: HOUR_SPAN_DEG,
                color: (*colour).to_string(),
            })
            .push_element(&DialLabel {
                cx: CENTRE,
                cy: CENTRE,
                radius: LABEL_RADIUS,
                deg: mid_deg,
                text: hour.to_string(),
                font_size: HOUR_FONT_SIZE,
                color: LABEL_COLOUR.to_string(),
            });
    }
    builder
}

fn chart_svg(
    data: &GraphData,
    event_colours: &IndexMap<String, Colour>,
    style: &ChartStyle,
) -> String {
    let mut builder = SvgBuilder::new(CANVAS_SIZE, CANVAS_SIZE)
        .with_title(chart_title(data))
        .with_font_family(style.font_family.clone());

    builder = dial(builder);

    // legend keyed by event name: colour overwritten by later events of the
    // same name, position fixed at first appearance
    let mut legend: IndexMap<&str, String> = IndexMap::new();

    // range arcs first, marker lines on top of them
    let ranges = data.events.iter().filter_map(|event| match event {
        Event::Range { name, start, end } => Some((name.as_str(), *start, *end)),
        Event::Marker { .. } => None,
    });
    for (index, (name, start, end)) in ranges.enumerate() {
        let colour = resolve_colour(event_colours, name, palette::range_fallback(index));
        builder = builder.push_element(&ArcBand {
            cx: CENTRE,
            cy: CENTRE,
            radius: ARC_RADIUS,
            // sweep counterclockwise from the end back to the start; a
            // range whose end precedes its start draws the complement
            from_deg: time_to_deg(end),
            to_deg: time_to_deg(start),
            width: ARC_WIDTH,
            color: colour.clone(),
            label: format!("{name}: {start}-{end}"),
        });
        legend.insert(name, colour);
    }

    let markers = data.events.iter().filter_map(|event| match event {
        Event::Marker { name, time } => Some((name.as_str(), *time)),
        Event::Range { .. } => None,
    });
    for (index, (name, time)) in markers.enumerate() {
        let colour = resolve_colour(event_colours, name, palette::marker_fallback(index));
        builder = builder.push_element(&MarkerLine {
            cx: CENTRE,
            cy: CENTRE,
            length: DIAL_RADIUS,
            deg: time_to_deg(time),
            stroke_width: MARKER_WIDTH,
            color: colour.clone(),
            label: format!("{name}: {time}"),
        });
        legend.insert(name, colour);
    }

    let mut x = LEGEND_X;
    for (name, colour) in &legend {
        builder = builder.push_element(&LegendSwatch {
            x,
            y: LEGEND_Y,
            size: LEGEND_SWATCH_SIZE,
            label: (*name).to_string(),
            color: colour.clone(),
            font_size: LEGEND_FONT_SIZE,
        });
        // swatch, gap, then an approximated text width
        let label_width = name.len() as f64 * LEGEND_FONT_SIZE * 0.6;
        x += LEGEND_SWATCH_SIZE + 6.0 + label_width + 24.0;
    }

    builder.build()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
