use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use linestrip::error::display_error;
use linestrip::Stripper;

use super::load_config;
use crate::cli::TargetArgs;

pub fn handle(args: &TargetArgs, config_path: Option<&Path>) -> Result<i32> {
    let preview = match load_config(config_path).and_then(|config| Stripper::new(args.resolve(&config)).preview()) {
        Ok(preview) => preview,
        Err(err) => {
            display_error(&err);
            return Ok(0);
        }
    };
    let report = &preview.report;

    println!("{}", "Linestrip Preview".bright_blue().bold());
    println!("{}", "=================".bright_blue());
    println!("File: {}", report.path.display());
    println!("Range: {}\n", report.range);

    let show = |label: &str, line: &Option<String>| match line {
        Some(text) => println!("  {:<14} {}", label, text),
        None => println!("  {:<14} {}", label, "(none)".bright_black()),
    };

    show("kept before:", &preview.before);
    show("first removed:", &preview.first_removed);
    show("last removed:", &preview.last_removed);
    show("kept after:", &preview.after);

    println!(
        "\n{} of {} lines would be removed, {} kept",
        report.removed_lines.to_string().bright_yellow(),
        report.original_lines,
        report.kept_lines
    );
    println!("Run without {} to apply", "preview".bright_cyan());

    Ok(0)
}
