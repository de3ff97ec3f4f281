//! Error types.
//!
//! [`FlowShopError`] covers the scheduling core: a malformed
//! processing-time matrix (raised once, at construction) and malformed
//! sequences passed straight to makespan evaluation. [`LoadError`] is
//! raised only by the instance loaders.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by the scheduling core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowShopError {
    #[error("processing-time matrix has no jobs")]
    NoJobs,

    #[error("processing-time matrix has no machines")]
    NoMachines,

    #[error("job {job} has {found} processing times, expected {expected}")]
    RaggedRow {
        job: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid processing time {value} for job {job} on machine {machine}")]
    InvalidTime {
        job: usize,
        machine: usize,
        value: f64,
    },

    #[error("completion matrix of {positions}x{machines} cannot hold {found} times")]
    CompletionShape {
        positions: usize,
        machines: usize,
        found: usize,
    },

    #[error("invalid job sequence: {}", join_messages(.0))]
    InvalidSequence(Vec<ValidationError>),
}

/// Errors raised while loading instances from text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: expected {expected} processing times, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("instance starting at line {line} ended after {found} of {expected} jobs")]
    Truncated {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Matrix(#[from] FlowShopError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
