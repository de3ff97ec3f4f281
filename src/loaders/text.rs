//! Free-text multi-instance loader.
//!
//! ```text
//! instance ta001
//! 3 2
//! 0 3 1 2
//! 0 1 1 4
//! +++
//! 0 2 1 1
//! ```
//!
//! A block starts at a line holding exactly two unsigned integers,
//! `jobs machines`. The next `jobs` numeric lines are data rows of
//! alternating `machine time` pairs; only the times (tokens at odd
//! indices) are kept. Blank or non-numeric lines are skipped, both inside
//! and between blocks. Parsing runs to end of input.

use std::io::BufRead;

use tracing::debug;

use crate::error::{FlowShopError, LoadError};
use crate::models::ProcessingTimeMatrix;

struct Block {
    header_line: usize,
    num_jobs: usize,
    num_machines: usize,
    rows: Vec<Vec<f64>>,
}

/// Reads every instance in the stream, in order.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Vec<ProcessingTimeMatrix>, LoadError> {
    let mut instances = Vec::new();
    let mut block: Option<Block> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if block.is_none() {
            if let Some((num_jobs, num_machines)) = parse_header(&tokens) {
                if num_jobs == 0 {
                    return Err(FlowShopError::NoJobs.into());
                }
                if num_machines == 0 {
                    return Err(FlowShopError::NoMachines.into());
                }
                block = Some(Block {
                    header_line: line_no,
                    num_jobs,
                    num_machines,
                    rows: Vec::with_capacity(num_jobs),
                });
            }
            continue;
        }

        let (Some(current), Some(values)) = (block.as_mut(), parse_numeric(&tokens)) else {
            continue;
        };
        let times: Vec<f64> = values.into_iter().skip(1).step_by(2).collect();
        if times.len() != current.num_machines {
            return Err(LoadError::RowLength {
                line: line_no,
                expected: current.num_machines,
                found: times.len(),
            });
        }
        current.rows.push(times);

        if current.rows.len() == current.num_jobs {
            if let Some(done) = block.take() {
                let matrix = ProcessingTimeMatrix::new(done.rows)?;
                debug!(
                    index = instances.len(),
                    line = done.header_line,
                    jobs = matrix.num_jobs(),
                    machines = matrix.num_machines(),
                    "Loaded text instance"
                );
                instances.push(matrix);
            }
        }
    }

    if let Some(open) = block {
        return Err(LoadError::Truncated {
            line: open.header_line,
            expected: open.num_jobs,
            found: open.rows.len(),
        });
    }

    Ok(instances)
}

/// Reads every instance in a string.
pub fn parse(input: &str) -> Result<Vec<ProcessingTimeMatrix>, LoadError> {
    from_reader(input.as_bytes())
}

fn parse_header(tokens: &[&str]) -> Option<(usize, usize)> {
    match tokens {
        [jobs, machines] => Some((jobs.parse().ok()?, machines.parse().ok()?)),
        _ => None,
    }
}

/// All tokens as numbers, or `None` for blank/decorative lines.
fn parse_numeric(tokens: &[&str]) -> Option<Vec<f64>> {
    if tokens.is_empty() {
        return None;
    }
    tokens.iter().map(|t| t.parse::<f64>().ok()).collect()
}
