use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use linestrip::error::display_error;
use linestrip::{StripReport, Stripper};

use super::load_config;
use crate::cli::StripArgs;

/// Returns the process exit status. Strip failures are reported here and only
/// turn into a non-zero status when strict exit is requested.
pub fn handle(args: &StripArgs, config_path: Option<&Path>) -> Result<i32> {
    let mut strict_exit = args.strict_exit;

    let outcome = load_config(config_path).and_then(|config| {
        strict_exit |= config.data.behavior.strict_exit;
        Stripper::new(args.resolve(&config)).run()
    });

    match outcome {
        Ok(report) => {
            print_report(&report);
            Ok(0)
        }
        Err(err) => {
            tracing::debug!("Strip failed: {:?}", err);
            display_error(&err);
            Ok(i32::from(strict_exit))
        }
    }
}

fn print_report(report: &StripReport) {
    println!("{} Successfully removed style block.", "✓".bright_green());
    println!(
        "  {} lines {} removed from {}, {} of {} kept",
        report.removed_lines.to_string().bright_yellow(),
        report.range,
        report.path.display(),
        report.kept_lines,
        report.original_lines
    );
}
