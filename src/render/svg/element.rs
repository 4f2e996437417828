//! Radial chart SVG primitives: dial wedges, arc bands, marker lines,
//! labels, and legend entries.

use std::fmt::Write;

use super::format::{html_escape, round_coord};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Converts a dial angle to a point on a circle around `(cx, cy)`.
///
/// Dial angles are measured counterclockwise from the positive x axis; the
/// y axis is flipped into SVG screen space.
pub(crate) fn polar(cx: f64, cy: f64, radius: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (
        round_coord(radius.mul_add(rad.cos(), cx)),
        round_coord((-radius).mul_add(rad.sin(), cy)),
    )
}

/// One hour slice of the dial, centred on its hour's angle.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub mid_deg: f64,
    pub span_deg: f64,
    pub color: String,
}

impl SvgElement for Wedge {
    fn render(&self) -> String {
        let half = self.span_deg / 2.0;
        // leading edge first, then sweep clockwise on screen across the slot
        let (x1, y1) = polar(self.cx, self.cy, self.radius, self.mid_deg + half);
        let (x2, y2) = polar(self.cx, self.cy, self.radius, self.mid_deg - half);

        format!(
            r#"<path d="M{cx} {cy} L{x1} {y1} A{r} {r} 0 0 1 {x2} {y2} Z" fill="{color}" stroke="none"/>"#,
            cx = self.cx,
            cy = self.cy,
            r = self.radius,
            color = self.color,
        )
    }
}

/// Stroked circular band for a range event, swept counterclockwise from
/// `from_deg` to `to_deg`.
#[derive(Debug, Clone)]
pub struct ArcBand {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub from_deg: f64,
    pub to_deg: f64,
    pub width: f64,
    pub color: String,
    pub label: String,
}

impl SvgElement for ArcBand {
    fn render(&self) -> String {
        let sweep = (self.to_deg - self.from_deg).rem_euclid(360.0);
        let large_arc = u8::from(sweep > 180.0);
        let (x1, y1) = polar(self.cx, self.cy, self.radius, self.from_deg);
        let (x2, y2) = polar(self.cx, self.cy, self.radius, self.to_deg);
        let escaped_label = html_escape(&self.label);

        format!(
            r#"<path d="M{x1} {y1} A{r} {r} 0 {large_arc} 0 {x2} {y2}" fill="none" stroke="{color}" stroke-width="{width}" stroke-linecap="butt">
    <title>{escaped_label}</title>
</path>"#,
            r = self.radius,
            color = self.color,
            width = self.width,
        )
    }
}

/// Radial tick from the dial centre outward, for a marker event.
#[derive(Debug, Clone)]
pub struct MarkerLine {
    pub cx: f64,
    pub cy: f64,
    pub length: f64,
    pub deg: f64,
    pub stroke_width: f64,
    pub color: String,
    pub label: String,
}

impl SvgElement for MarkerLine {
    fn render(&self) -> String {
        let (x2, y2) = polar(self.cx, self.cy, self.length, self.deg);
        let escaped_label = html_escape(&self.label);

        format!(
            r#"<line x1="{cx}" y1="{cy}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="{width}" stroke-linecap="round">
    <title>{escaped_label}</title>
</line>"#,
            cx = self.cx,
            cy = self.cy,
            color = self.color,
            width = self.stroke_width,
        )
    }
}

/// Hour numeral placed just outside the dial.
#[derive(Debug, Clone)]
pub struct DialLabel {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub deg: f64,
    pub text: String,
    pub font_size: f64,
    pub color: String,
}

impl SvgElement for DialLabel {
    fn render(&self) -> String {
        let (x, y) = polar(self.cx, self.cy, self.radius, self.deg);
        let escaped_text = html_escape(&self.text);

        format!(
            r#"<text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" fill="{color}" font-size="{size}">{escaped_text}</text>"#,
            color = self.color,
            size = self.font_size,
        )
    }
}

/// Legend entry: colour swatch plus event name.
#[derive(Debug, Clone)]
pub struct LegendSwatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub label: String,
    pub color: String,
    pub font_size: f64,
}

impl SvgElement for LegendSwatch {
    fn render(&self) -> String {
        let mut output = String::new();
        let escaped_label = html_escape(&self.label);

        let _ = writeln!(
            output,
            r#"<rect x="{x}" y="{y}" width="{size}" height="{size}" rx="2" fill="{color}"/>"#,
            x = self.x,
            y = self.y,
            size = self.size,
            color = self.color,
        );
        let _ = write!(
            output,
            r#"<text x="{x}" y="{y}" dominant-baseline="middle" font-size="{size}">{escaped_label}</text>"#,
            x = self.x + self.size + 6.0,
            y = self.y + self.size / 2.0,
            size = self.font_size,
        );

        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
