use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use linestrip::config::Config;

pub fn handle(path: &Path) -> Result<()> {
    let existed = path.join(linestrip::config::CONFIG_FILE_NAME).exists();
    let config = Config::init(path)
        .context("Failed to initialize linestrip in the specified directory")?;

    if existed {
        println!("{} {} already exists", "→".bright_cyan(), config.path.display());
    } else {
        println!("{} Created {}", "✓".bright_green(), config.path.display());
    }

    println!("  target: {}", config.data.target.file.display());
    println!("  range:  {}", config.data.target.range);
    println!("\nEdit it or use {} to change settings", "linestrip config set".bright_cyan());

    Ok(())
}
