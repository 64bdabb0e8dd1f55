use std::ops::Range;
use std::path::Path;

use crate::error::{StripError, StripResult};
use crate::range::LineRange;

/// How to treat a range that runs past the end of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Refuse to touch a file shorter than the range end.
    #[default]
    Strict,
    /// Clamp both bounds to the file length, like slicing `lines[:a] + lines[b:]`.
    Clamp,
}

/// Result of cutting a line range out of a buffer.
#[derive(Debug, Clone)]
pub struct Splice<'a> {
    original: Vec<&'a str>,
    removed: Range<usize>,
}

impl<'a> Splice<'a> {
    pub fn original_len(&self) -> usize {
        self.original.len()
    }

    /// 0-based indices actually removed from the original lines
    pub fn removed_indices(&self) -> Range<usize> {
        self.removed.clone()
    }

    pub fn removed(&self) -> &[&'a str] {
        &self.original[self.removed.clone()]
    }

    pub fn prefix(&self) -> &[&'a str] {
        &self.original[..self.removed.start]
    }

    pub fn suffix(&self) -> &[&'a str] {
        &self.original[self.removed.end..]
    }

    pub fn kept_len(&self) -> usize {
        self.original.len() - self.removed.len()
    }

    pub fn kept(&self) -> impl Iterator<Item = &&'a str> + '_ {
        self.prefix().iter().chain(self.suffix())
    }

    /// Concatenate prefix and suffix back into file content.
    pub fn render(&self) -> String {
        let capacity = self.kept().map(|line| line.len()).sum();
        let mut out = String::with_capacity(capacity);
        for line in self.kept() {
            out.push_str(line);
        }
        out
    }
}

/// Split content into lines, each keeping its terminator.
///
/// A trailing segment without a newline still counts as a line; empty
/// content has no lines. Only `\n` ends a line: a lone `\r` stays inside
/// the line and `\r\n` is written back unchanged, unlike universal-newline
/// text readers that translate both to `\n`.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Remove `range` from `content`.
///
/// `path` is only used to label an out-of-range error.
pub fn splice<'a>(
    content: &'a str,
    range: LineRange,
    policy: RangePolicy,
    path: &Path,
) -> StripResult<Splice<'a>> {
    let original = split_lines(content);
    let total = original.len();

    if policy == RangePolicy::Strict && total < range.end() {
        return Err(StripError::OutOfRange {
            path: path.to_path_buf(),
            start: range.start(),
            end: range.end(),
            total,
        });
    }

    let indices = range.indices();
    let removed = indices.start.min(total)..indices.end.min(total);

    tracing::debug!(
        total,
        removed_start = removed.start,
        removed_end = removed.end,
        "Computed splice"
    );

    Ok(Splice { original, removed })
}
