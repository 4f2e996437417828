mod builder;
mod element;
mod format;

pub use builder::SvgBuilder;
pub use element::{ArcBand, DialLabel, LegendSwatch, MarkerLine, SvgElement, Wedge};

pub(crate) use format::html_escape;
