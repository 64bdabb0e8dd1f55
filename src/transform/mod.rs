pub mod splice;

pub use splice::{split_lines, RangePolicy, Splice};

use std::path::Path;

use crate::error::StripResult;
use crate::range::LineRange;

pub fn strip<'a>(
    content: &'a str,
    file_path: &Path,
    range: LineRange,
    policy: RangePolicy,
) -> StripResult<Splice<'a>> {
    splice::splice(content, range, policy, file_path)
}
