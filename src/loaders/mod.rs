//! Instance loaders.
//!
//! Turn text into [`ProcessingTimeMatrix`](crate::models::ProcessingTimeMatrix)
//! values. The scheduling core never reads files itself; callers open
//! whatever source they have and hand a `BufRead` (or a `&str`) to a loader.
//!
//! | Loader | Format | Output |
//! |--------|--------|--------|
//! | [`tabular`] | CSV with header row and row-label column | one matrix |
//! | [`text`] | Free text with `jobs machines` headers and `(machine, time)` pairs | zero or more matrices |
//!
//! Rows whose length disagrees with the instance width are rejected with
//! [`LoadError::RowLength`](crate::error::LoadError::RowLength), never skipped.

pub mod tabular;
pub mod text;

use crate::error::LoadError;

fn parse_f64(token: &str, line: usize) -> Result<f64, LoadError> {
    token.trim().parse::<f64>().map_err(|e| LoadError::Parse {
        line,
        message: format!("'{}' is not a number: {e}", token.trim()),
    })
}
