use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for strip operations
#[derive(Error, Debug)]
pub enum StripError {
    #[error("File not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Permission denied: {path:?}")]
    PermissionDenied { path: PathBuf },

    #[error("File is not valid UTF-8: {path:?} (invalid byte at offset {offset})")]
    Encoding { path: PathBuf, offset: usize },

    #[error("Line range {start}-{end} is out of range ({path:?} has {total} lines)")]
    OutOfRange {
        path: PathBuf,
        start: usize,
        end: usize,
        total: usize,
    },

    #[error("Invalid line range: {0}")]
    InvalidRange(String),

    #[error("Invalid target path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access configuration at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Result type alias for strip operations
pub type StripResult<T> = Result<T, StripError>;

impl StripError {
    /// Classify an I/O failure on `path` into the closed error set.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StripError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => StripError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => StripError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Short hint shown under the error in the CLI
    pub fn hint(&self) -> Option<String> {
        match self {
            StripError::NotFound { .. } => {
                Some("Check that the file path is correct and run from its directory".to_string())
            }
            StripError::PermissionDenied { path } => {
                Some(format!("Check file permissions for {:?}", path))
            }
            StripError::Encoding { .. } => Some("Only UTF-8 text files are supported".to_string()),
            StripError::OutOfRange { .. } => Some(
                "The file may already be stripped; use --clamp to apply the range anyway".to_string(),
            ),
            StripError::InvalidRange(_) => Some("Expected format: START-END, e.g. 20-732".to_string()),
            StripError::Config(_) => Some("Run `linestrip config list` to inspect settings".to_string()),
            StripError::InvalidPath(_) => Some("The target must name a file, not a directory".to_string()),
            StripError::Io { .. } => None,
        }
    }
}

/// Error display helper for CLI
pub fn display_error(error: &StripError) {
    use colored::Colorize;
    use std::error::Error;

    println!("{} {}", "Error:".bright_red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        println!("  {} Caused by: {}", "├".bright_black(), err);
        source = err.source();
    }

    match error.hint() {
        Some(hint) => println!("  {} {}", "└".bright_cyan(), hint),
        None => println!("  {} Set RUST_LOG=debug for more details", "└".bright_black()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let error = StripError::from_io(Path::new("liminal library.html"), io_error);

        assert!(matches!(error, StripError::NotFound { .. }));
        let display = format!("{}", error);
        assert!(display.contains("not found"));
        assert!(display.contains("liminal library.html"));
    }

    #[test]
    fn test_permission_classification() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = StripError::from_io(Path::new("page.html"), io_error);

        assert!(matches!(error, StripError::PermissionDenied { .. }));
        assert!(error.hint().unwrap().contains("page.html"));
    }

    #[test]
    fn test_other_io_keeps_source() {
        use std::error::Error;

        let io_error = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let error = StripError::from_io(Path::new("page.html"), io_error);

        assert!(matches!(error, StripError::Io { .. }));
        assert!(error.source().unwrap().to_string().contains("disk on fire"));
        assert!(error.hint().is_none());
    }

    #[test]
    fn test_out_of_range_display() {
        let error = StripError::OutOfRange {
            path: PathBuf::from("page.html"),
            start: 20,
            end: 732,
            total: 87,
        };

        let display = format!("{}", error);
        assert!(display.contains("20-732"));
        assert!(display.contains("87 lines"));
    }

    #[test]
    fn test_config_error_wraps() {
        let error: StripError = ConfigError::UnknownKey {
            key: "target.nope".to_string(),
        }
        .into();

        let display = format!("{}", error);
        assert!(display.contains("Configuration error"));
        assert!(display.contains("target.nope"));
    }
}
