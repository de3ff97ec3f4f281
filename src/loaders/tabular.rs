//! Tabular (CSV) instance loader.
//!
//! ```text
//! ,M1,M2,M3
//! J1,5,9,8
//! J2,9,3,10
//! ```
//!
//! The first non-blank line is a header and is skipped. On every other
//! non-blank line the first field is a row label and is dropped; the
//! remaining fields are that job's machine times.

use std::io::BufRead;

use tracing::debug;

use super::parse_f64;
use crate::error::LoadError;
use crate::models::ProcessingTimeMatrix;

/// Reads one instance from CSV text.
pub fn from_reader<R: BufRead>(reader: R) -> Result<ProcessingTimeMatrix, LoadError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut header_seen = false;
    let mut width: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }

        let row = line
            .split(',')
            .skip(1)
            .map(|field| parse_f64(field, line_no))
            .collect::<Result<Vec<f64>, _>>()?;

        match width {
            None => width = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(LoadError::RowLength {
                    line: line_no,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    let matrix = ProcessingTimeMatrix::new(rows)?;
    debug!(
        jobs = matrix.num_jobs(),
        machines = matrix.num_machines(),
        "Loaded tabular instance"
    );
    Ok(matrix)
}

/// Reads one instance from a CSV string.
pub fn parse(input: &str) -> Result<ProcessingTimeMatrix, LoadError> {
    from_reader(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowShopError;

    #[test]
    fn test_parse_basic() {
        let m = parse(",M1,M2\nJ1,3,2\nJ2,1,4\nJ3,2,1\n").unwrap();
        assert_eq!(
            m.to_rows(),
            vec![vec![3.0, 2.0], vec![1.0, 4.0], vec![2.0, 1.0]]
        );
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let m = parse("\n  \nidx, a, b\n0, 1.5, 2\n\n1, 3 , 0.25\n").unwrap();
        assert_eq!(m.to_rows(), vec![vec![1.5, 2.0], vec![3.0, 0.25]]);
    }

    #[test]
    fn test_row_length_mismatch() {
        let err = parse(",a,b\n0,1,2\n1,3\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::RowLength {
                line: 3,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse(",a\n0,x\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_header_only_has_no_jobs() {
        let err = parse(",M1,M2\n").unwrap_err();
        assert!(matches!(err, LoadError::Matrix(FlowShopError::NoJobs)));
    }

    #[test]
    fn test_label_only_rows_have_no_machines() {
        let err = parse("idx\nJ1\nJ2\n").unwrap_err();
        assert!(matches!(err, LoadError::Matrix(FlowShopError::NoMachines)));
    }

    #[test]
    fn test_negative_time_rejected() {
        let err = parse(",a\n0,-1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Matrix(FlowShopError::InvalidTime { .. })
        ));
    }
}
