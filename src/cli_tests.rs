use std::path::PathBuf;

use super::*;

#[test]
fn cli_parses_targets() {
    let cli = Cli::parse_from(["daycircle", "monday.day", "palette.day"]);
    assert_eq!(
        cli.targets,
        vec![PathBuf::from("monday.day"), PathBuf::from("palette.day")]
    );
}

#[test]
fn cli_defaults() {
    let cli = Cli::parse_from(["daycircle"]);
    assert!(cli.targets.is_empty());
    assert!(cli.colour_files.is_empty());
    assert_eq!(cli.config, None);
    assert!(!cli.no_config);
    assert_eq!(cli.format, None);
    assert_eq!(cli.output, None);
    assert_eq!(cli.font_family, None);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn cli_parses_repeated_colour_files() {
    let cli = Cli::parse_from([
        "daycircle",
        "monday.day",
        "--colours",
        "a.day",
        "--colours",
        "b.day",
    ]);
    assert_eq!(
        cli.colour_files,
        vec![PathBuf::from("a.day"), PathBuf::from("b.day")]
    );
}

#[test]
fn cli_parses_format() {
    let cli = Cli::parse_from(["daycircle", "monday.day", "--format", "html"]);
    assert_eq!(cli.format, Some(ChartFormat::Html));
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["daycircle", "monday.day", "--format", "png"]).is_err());
}

#[test]
fn cli_parses_output_override() {
    let cli = Cli::parse_from(["daycircle", "monday.day", "--output", "charts/"]);
    assert_eq!(cli.output, Some(PathBuf::from("charts/")));
}

#[test]
fn cli_parses_config_flags() {
    let cli = Cli::parse_from(["daycircle", "monday.day", "--config", "custom.toml"]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));

    let cli = Cli::parse_from(["daycircle", "monday.day", "--no-config"]);
    assert!(cli.no_config);
}

#[test]
fn cli_counts_verbosity() {
    let cli = Cli::parse_from(["daycircle", "monday.day", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_parses_font_family() {
    let cli = Cli::parse_from(["daycircle", "monday.day", "--font-family", "Iosevka"]);
    assert_eq!(cli.font_family.as_deref(), Some("Iosevka"));
}
