pub mod config;
pub mod error;
pub mod range;
pub mod storage;
pub mod transform;

pub use error::{StripError, StripResult};
pub use range::LineRange;
pub use storage::WriteMode;
pub use transform::RangePolicy;

use std::path::{Path, PathBuf};

use config::{ConfigData, DEFAULT_TARGET};
use storage::AtomicFile;

/// Everything needed to strip one file.
#[derive(Debug, Clone, PartialEq)]
pub struct StripOptions {
    pub path: PathBuf,
    pub range: LineRange,
    pub policy: RangePolicy,
    pub write_mode: WriteMode,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TARGET),
            range: LineRange::STYLE_BLOCK,
            policy: RangePolicy::Strict,
            write_mode: WriteMode::Atomic,
        }
    }
}

impl From<&ConfigData> for StripOptions {
    fn from(data: &ConfigData) -> Self {
        Self {
            path: data.target.file.clone(),
            range: data.target.range,
            policy: data.behavior.policy(),
            write_mode: data.behavior.write_mode(),
        }
    }
}

/// What a strip did (or would do) to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripReport {
    pub path: PathBuf,
    pub range: LineRange,
    pub original_lines: usize,
    pub removed_lines: usize,
    pub kept_lines: usize,
}

/// Dry-run result with the lines at each edge of the cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub report: StripReport,
    pub before: Option<String>,
    pub first_removed: Option<String>,
    pub last_removed: Option<String>,
    pub after: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Stripper {
    options: StripOptions,
}

impl Stripper {
    pub fn new(options: StripOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &StripOptions {
        &self.options
    }

    pub fn path(&self) -> &Path {
        &self.options.path
    }

    /// Read the target, cut the range out and write the rest back.
    ///
    /// Nothing is written unless the read and the splice both succeed.
    pub fn run(&self) -> StripResult<StripReport> {
        let file = AtomicFile::new(&self.options.path)?;
        let content = file.read_to_string()?;

        let splice = transform::strip(&content, file.path(), self.options.range, self.options.policy)?;
        let report = self.report(&splice);

        file.write(&splice.render(), self.options.write_mode)?;

        tracing::info!(
            path = %report.path.display(),
            removed = report.removed_lines,
            kept = report.kept_lines,
            "Stripped line range {}",
            report.range
        );

        Ok(report)
    }

    /// Same checks as [`Stripper::run`], without touching the file.
    pub fn preview(&self) -> StripResult<Preview> {
        let file = AtomicFile::new(&self.options.path)?;
        let content = file.read_to_string()?;

        let splice = transform::strip(&content, file.path(), self.options.range, self.options.policy)?;
        let trim = |line: &&str| line.trim_end_matches(['\r', '\n']).to_string();

        Ok(Preview {
            report: self.report(&splice),
            before: splice.prefix().last().map(trim),
            first_removed: splice.removed().first().map(trim),
            last_removed: splice.removed().last().map(trim),
            after: splice.suffix().first().map(trim),
        })
    }

    fn report(&self, splice: &transform::Splice<'_>) -> StripReport {
        StripReport {
            path: self.options.path.clone(),
            range: self.options.range,
            original_lines: splice.original_len(),
            removed_lines: splice.removed().len(),
            kept_lines: splice.kept_len(),
        }
    }
}

/// Strip `options.range` from `options.path`.
pub fn strip_file(options: StripOptions) -> StripResult<StripReport> {
    Stripper::new(options).run()
}
