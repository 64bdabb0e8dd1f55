use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::load_config;
use crate::cli::ConfigAction;

pub fn handle(action: &ConfigAction, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path).context("Failed to load linestrip configuration")?;

    match action {
        ConfigAction::Set { key, value } => {
            config.set(key, value)?;
            println!("{} Set {} = {}", "✓".bright_green(), key.bright_cyan(), value);
        }
        ConfigAction::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigAction::List => {
            println!("{}", "Linestrip Configuration".bright_blue().bold());
            println!("{}", "=======================".bright_blue());
            println!("Source: {}\n", config.path.display());
            for (key, value) in config.list()? {
                println!("{} = {}", key.bright_cyan(), value);
            }
        }
    }

    Ok(())
}
