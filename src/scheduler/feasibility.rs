//! Feasibility checking.
//!
//! A sequence is feasible iff:
//! 1. it is a permutation of `0..n`, and
//! 2. every completion time respects machine precedence:
//!    `C[i][j] >= C[i-1][j] + p(s[i], j)` for `i >= 1`.
//!
//! Condition 2 holds by construction of the makespan recurrence, so it can
//! only fail through floating-point rounding. It is kept as a sanity check
//! with an epsilon tolerance and never discriminates on its own; condition
//! 1 is the real test.

use super::MakespanEngine;
use crate::validation::{validate_sequence, ValidationResult};

/// Default tolerance for the precedence check.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Tests job sequences for feasibility against one instance.
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityChecker<'a> {
    engine: &'a MakespanEngine,
    epsilon: f64,
}

impl<'a> FeasibilityChecker<'a> {
    /// Creates a checker with [`DEFAULT_EPSILON`].
    pub fn new(engine: &'a MakespanEngine) -> Self {
        Self {
            engine,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Sets the precedence-check tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    /// Whether `sequence` is a permutation of all jobs.
    pub fn is_permutation(&self, sequence: &[usize]) -> bool {
        self.validate(sequence).is_ok()
    }

    /// Every reason `sequence` is not a permutation.
    pub fn validate(&self, sequence: &[usize]) -> ValidationResult {
        validate_sequence(sequence, self.engine.num_jobs())
    }

    /// Full feasibility test: permutation check, then precedence check.
    pub fn is_feasible(&self, sequence: &[usize]) -> bool {
        if !self.is_permutation(sequence) {
            return false;
        }

        let matrix = self.engine.matrix();
        let c = self.engine.completion_times(sequence);
        for (i, &job) in sequence.iter().enumerate().skip(1) {
            for j in 0..matrix.num_machines() {
                let earliest = c.get(i - 1, j) + matrix.time(job, j);
                if c.get(i, j) + self.epsilon < earliest {
                    return false;
                }
            }
        }

        true
    }
}
