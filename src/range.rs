use crate::error::{StripError, StripResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s*(?:-|:|\.\.=?)\s*(\d+)\s*$").expect("Failed to compile range pattern")
});

/// Inclusive, 1-based line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Lines 20 through 732 of `liminal library.html` hold the embedded style block.
    pub const STYLE_BLOCK: LineRange = LineRange { start: 20, end: 732 };

    pub fn new(start: usize, end: usize) -> StripResult<Self> {
        if start < 1 {
            return Err(StripError::InvalidRange(format!(
                "{}-{}: line numbers start at 1",
                start, end
            )));
        }
        if start > end {
            return Err(StripError::InvalidRange(format!(
                "{}-{}: start is after end",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of lines covered by the range
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// 0-based, half-open indices of the lines to delete.
    pub fn indices(&self) -> Range<usize> {
        (self.start - 1)..self.end
    }
}

impl Default for LineRange {
    fn default() -> Self {
        Self::STYLE_BLOCK
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for LineRange {
    type Err = StripError;

    fn from_str(spec: &str) -> StripResult<Self> {
        let caps = RANGE_PATTERN.captures(spec).ok_or_else(|| {
            StripError::InvalidRange(format!("{:?} (expected START-END)", spec))
        })?;

        let parse = |s: &str| {
            s.parse::<usize>()
                .map_err(|_| StripError::InvalidRange(format!("line number too large: {}", s)))
        };

        Self::new(parse(&caps[1])?, parse(&caps[2])?)
    }
}

impl Serialize for LineRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LineRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        spec.parse().map_err(serde::de::Error::custom)
    }
}
