pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use linestrip::config::Config;
use linestrip::{LineRange, RangePolicy, StripOptions, WriteMode};

#[derive(Parser)]
#[command(name = "linestrip")]
#[command(about = "Strip a line range (by default an embedded style block) from a file in place", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub strip: StripArgs,

    #[arg(long, global = true, env = "LINESTRIP_CONFIG", help = "Config file (defaults to ./.linestrip.toml)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Remove the line range from the target file (default)")]
    Strip(StripArgs),

    #[command(about = "Show what would be removed without writing")]
    Preview(TargetArgs),

    #[command(about = "Write a default .linestrip.toml")]
    Init {
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    #[command(about = "Configure linestrip settings")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    #[arg(help = "File to strip (defaults to \"liminal library.html\")")]
    pub file: Option<PathBuf>,
    #[arg(short, long, help = "Inclusive 1-based line range, e.g. 20-732")]
    pub range: Option<LineRange>,
    #[arg(long, help = "Apply the range even if the file is shorter than its end")]
    pub clamp: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StripArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    #[arg(long, help = "Truncate and rewrite the file directly instead of replacing it atomically")]
    pub in_place: bool,
    #[arg(long, help = "Exit with status 1 when stripping fails")]
    pub strict_exit: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        key: String,
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

impl TargetArgs {
    /// Flags win over the config file, which wins over built-in defaults.
    pub fn resolve(&self, config: &Config) -> StripOptions {
        let mut options = StripOptions::from(&config.data);
        if let Some(file) = &self.file {
            options.path = file.clone();
        }
        if let Some(range) = self.range {
            options.range = range;
        }
        if self.clamp {
            options.policy = RangePolicy::Clamp;
        }
        options
    }
}

impl StripArgs {
    pub fn resolve(&self, config: &Config) -> StripOptions {
        let mut options = self.target.resolve(config);
        if self.in_place {
            options.write_mode = WriteMode::InPlace;
        }
        options
    }
}
