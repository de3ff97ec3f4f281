//! Makespan evaluation.
//!
//! # Algorithm
//!
//! For position `i` (job `s[i]`) and machine `j`:
//!
//! ```text
//! C[0][0] = p(s[0], 0)
//! C[0][j] = C[0][j-1] + p(s[0], j)
//! C[i][0] = C[i-1][0] + p(s[i], 0)
//! C[i][j] = max(C[i-1][j], C[i][j-1]) + p(s[i], j)
//! ```
//!
//! Makespan = `C[n-1][m-1]`.
//!
//! # Complexity
//! O(n * m) time and space.
//!
//! # Reference
//! Johnson (1954), "Optimal two- and three-stage production schedules";
//! Pinedo (2016), "Scheduling", Ch. 6.1

use crate::error::FlowShopError;
use crate::models::{CompletionTimeMatrix, Evaluation, ProcessingTimeMatrix};
use crate::validation::{is_in_range, validate_sequence, ValidationError, ValidationErrorKind};

/// Computes completion times and makespan for job sequences.
///
/// Owns its processing-time matrix; every evaluation allocates its own
/// completion matrix, so a shared `&MakespanEngine` is safe to use from
/// many threads.
///
/// # Example
/// ```
/// use u_flowshop::models::ProcessingTimeMatrix;
/// use u_flowshop::scheduler::MakespanEngine;
///
/// let matrix = ProcessingTimeMatrix::new(vec![
///     vec![3.0, 2.0],
///     vec![1.0, 4.0],
///     vec![2.0, 1.0],
/// ]).unwrap();
/// let engine = MakespanEngine::new(matrix);
/// assert_eq!(engine.makespan(&[0, 1, 2]).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct MakespanEngine {
    matrix: ProcessingTimeMatrix,
}

impl MakespanEngine {
    /// Creates an engine over `matrix`.
    pub fn new(matrix: ProcessingTimeMatrix) -> Self {
        Self { matrix }
    }

    /// The processing-time matrix.
    pub fn matrix(&self) -> &ProcessingTimeMatrix {
        &self.matrix
    }

    /// Number of jobs in the instance.
    pub fn num_jobs(&self) -> usize {
        self.matrix.num_jobs()
    }

    /// Evaluates `sequence`, returning makespan and completion surface.
    ///
    /// The sequence must have exactly `num_jobs` entries, each a valid job
    /// index. Duplicates are accepted here (the recurrence is well defined
    /// for them); use a [`FeasibilityChecker`](super::FeasibilityChecker)
    /// to test for a true permutation.
    ///
    /// # Errors
    /// [`FlowShopError::InvalidSequence`] on wrong length or out-of-range
    /// entries.
    pub fn evaluate(&self, sequence: &[usize]) -> Result<Evaluation, FlowShopError> {
        self.check_shape(sequence)?;
        let completion = self.completion_times(sequence);
        Ok(Evaluation {
            makespan: completion.makespan(),
            completion,
        })
    }

    /// Makespan of `sequence`. See [`evaluate`](Self::evaluate).
    pub fn makespan(&self, sequence: &[usize]) -> Result<f64, FlowShopError> {
        self.evaluate(sequence).map(|e| e.makespan)
    }

    /// Runs the recurrence. Caller guarantees every entry is in range.
    pub(crate) fn completion_times(&self, sequence: &[usize]) -> CompletionTimeMatrix {
        let m = self.matrix.num_machines();
        let mut c = CompletionTimeMatrix::zeros(sequence.len(), m);

        for (i, &job) in sequence.iter().enumerate() {
            let times = self.matrix.job_times(job);
            for (j, &p) in times.iter().enumerate() {
                let ready = match (i, j) {
                    (0, 0) => 0.0,
                    (0, _) => c.get(0, j - 1),
                    (_, 0) => c.get(i - 1, 0),
                    _ => c.get(i - 1, j).max(c.get(i, j - 1)),
                };
                c.set(i, j, ready + p);
            }
        }

        c
    }

    fn check_shape(&self, sequence: &[usize]) -> Result<(), FlowShopError> {
        let n = self.num_jobs();
        // Duplicates and gaps are legal input to the recurrence.
        if sequence.len() == n && is_in_range(sequence, n) {
            return Ok(());
        }
        let mut errors: Vec<ValidationError> =
            validate_sequence(sequence, n).err().unwrap_or_default();
        errors.retain(|e| {
            matches!(
                e.kind,
                ValidationErrorKind::WrongLength | ValidationErrorKind::OutOfRange
            )
        });
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FlowShopError::InvalidSequence(errors))
        }
    }
}
