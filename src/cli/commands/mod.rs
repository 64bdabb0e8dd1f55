pub mod config;
pub mod init;
pub mod preview;
pub mod strip;

use colored::Colorize;
use std::path::Path;

use linestrip::config::Config;
use linestrip::StripResult;

/// Explicit `--config` must exist; otherwise fall back to `./.linestrip.toml` or defaults.
pub fn load_config(explicit: Option<&Path>) -> StripResult<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::load_or_default("."),
    }
}

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    match err.downcast_ref::<linestrip::StripError>().and_then(|e| e.hint()) {
        Some(hint) => eprintln!("  {} {}", "└".bright_cyan(), hint),
        None => eprintln!(
            "  {} Set {} for more details",
            "└".bright_black(),
            "RUST_LOG=debug".bright_cyan()
        ),
    }
}
