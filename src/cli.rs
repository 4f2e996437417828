use std::path::PathBuf;

use clap::Parser;

use crate::render::ChartFormat;

#[derive(Parser, Debug)]
#[command(name = "daycircle")]
#[command(author, version, about = "Chart the timed events of your day on a 24-hour dial")]
#[command(long_about = "Reads daycircle plaintext day files and renders their events \
    on a 24-hour radial chart.\n\n\
    Exit codes:\n  \
    0 - Chart written\n  \
    1 - Chart written, but some targets were skipped\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Day files to chart
    pub targets: Vec<PathBuf>,

    /// Colour files read only for event colour assignments (can be specified
    /// multiple times; later files win)
    #[arg(long = "colours", value_name = "FILE")]
    pub colour_files: Vec<PathBuf>,

    /// Path to configuration file (default: daycircle.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: svg, html]
    #[arg(short, long)]
    pub format: Option<ChartFormat>,

    /// Output file or directory (default: <date>.<format> in the working
    /// directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Font family for chart text
    #[arg(long, value_name = "NAME")]
    pub font_family: Option<String>,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
