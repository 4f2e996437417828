use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use indexmap::IndexMap;

use daycircle::cli::Cli;
use daycircle::config::Config;
use daycircle::graph::assemble;
use daycircle::parser::{Colour, DayFile, parse};
use daycircle::render::{ChartFormat, ChartStyle, render};
use daycircle::{DaycircleError, EXIT_ERROR, EXIT_SUCCESS, EXIT_TARGETS_SKIPPED};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Effective settings after merging configuration under CLI flags.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: ChartFormat,
    style: ChartStyle,
    output: Option<PathBuf>,
    colour_files: Vec<PathBuf>,
}

fn merge_settings(config: Config, cli: &Cli) -> Settings {
    let mut colour_files = config.colour_files;
    colour_files.extend(cli.colour_files.iter().cloned());

    Settings {
        format: cli.format.or(config.format).unwrap_or_default(),
        style: ChartStyle {
            font_family: cli.font_family.clone().or(config.font_family),
        },
        output: cli.output.clone().or(config.output),
        colour_files,
    }
}

fn run_impl(cli: &Cli) -> daycircle::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let config = if cli.no_config {
        Config::default()
    } else {
        Config::load(cli.config.as_deref())?
    };
    let settings = merge_settings(config, cli);

    // 2. Read colour files (colour assignments only, no day required)
    let extra_colours = read_colour_files(&settings.colour_files, cli.verbose)?;

    // 3. Parse targets, warning about and skipping unusable ones
    let mut targets: Vec<DayFile> = Vec::new();
    let mut skipped = 0usize;
    for target in &cli.targets {
        match read_target(target, cli.verbose) {
            Some(day_file) => targets.push(day_file),
            None => skipped += 1,
        }
    }

    // 4. Assemble chart data
    let data = assemble(&targets).into_result()?;

    // 5. Resolve event colours: colour files win over the day file's own
    let mut event_colours = data.event_colours.clone();
    event_colours.extend(extra_colours);

    // 6. Render and write the chart
    let rendered = render(&data, &event_colours, &settings.style, settings.format).into_result()?;
    let out_path = data.to_filename(settings.output.as_deref(), settings.format.extension());
    fs::write(&out_path, rendered)?;

    if !cli.quiet {
        println!("wrote {}", out_path.display());
    }

    Ok(if skipped > 0 {
        EXIT_TARGETS_SKIPPED
    } else {
        EXIT_SUCCESS
    })
}

fn read_colour_files(
    paths: &[PathBuf],
    verbose: u8,
) -> daycircle::Result<IndexMap<String, Colour>> {
    let mut colours = IndexMap::new();

    for path in paths {
        let content = fs::read_to_string(path).map_err(|source| DaycircleError::FileRead {
            path: path.clone(),
            source,
        })?;
        // with the colour-file flag set a parse cannot fail
        let day_file = parse(&content, None, true).into_value();
        if verbose > 0 {
            eprintln!(
                "read {} colour assignments from '{}'",
                day_file.event_colours.len(),
                path.display()
            );
        }
        colours.extend(day_file.event_colours);
    }

    Ok(colours)
}

fn read_target(path: &Path, verbose: u8) -> Option<DayFile> {
    if !path.exists() {
        eprintln!("warn: '{}' does not exist, skipping", path.display());
        return None;
    }
    if !path.is_file() {
        eprintln!("warn: '{}' is not a file, skipping", path.display());
        return None;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("warn: could not read '{}': {err}, skipping", path.display());
            return None;
        }
    };

    let filename = path.file_name().map(|name| name.to_string_lossy().into_owned());
    let outcome = parse(&content, filename.as_deref(), false);
    if outcome.is_ok() {
        let day_file = outcome.into_value();
        if verbose > 0 {
            eprintln!(
                "parsed {} events from '{}'",
                day_file.events.len(),
                path.display()
            );
        }
        Some(day_file)
    } else {
        eprintln!("warn: {}", outcome.describe());
        None
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
