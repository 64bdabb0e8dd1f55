pub mod project;

pub use project::{Config, CONFIG_FILE_NAME};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::range::LineRange;
use crate::storage::WriteMode;
use crate::transform::RangePolicy;

pub const DEFAULT_TARGET: &str = "liminal library.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    pub version: String,
    pub target: TargetConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub file: PathBuf,
    pub range: LineRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Apply the range to files shorter than its end instead of refusing
    pub clamp: bool,
    pub atomic: bool,
    /// Exit with a failure status when the strip fails
    pub strict_exit: bool,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            target: TargetConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_TARGET),
            range: LineRange::STYLE_BLOCK,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            clamp: false,
            atomic: true,
            strict_exit: false,
        }
    }
}

impl BehaviorConfig {
    pub fn policy(&self) -> RangePolicy {
        if self.clamp {
            RangePolicy::Clamp
        } else {
            RangePolicy::Strict
        }
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }
}
