//! Constructive heuristics for job sequences.
//!
//! Each heuristic turns a processing-time matrix into a feasible job
//! sequence. They make good seed candidates for the
//! [`FeasibilityPlanner`](crate::scheduler::FeasibilityPlanner).
//!
//! # Usage
//!
//! ```
//! use u_flowshop::heuristics::{self, SequenceHeuristic};
//! use u_flowshop::models::ProcessingTimeMatrix;
//!
//! let matrix = ProcessingTimeMatrix::new(vec![
//!     vec![3.0, 2.0],
//!     vec![1.0, 4.0],
//!     vec![2.0, 1.0],
//! ]).unwrap();
//!
//! assert_eq!(heuristics::Spt.generate(&matrix), vec![2, 0, 1]);
//! assert_eq!(heuristics::greedy(&matrix), vec![2, 0, 1]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6
//! - Smith (1956), "Various optimizers for single-stage production"

mod rules;

pub use rules::{Greedy, RandomOrder, Spt};

use std::fmt::Debug;

use crate::models::{JobSequence, ProcessingTimeMatrix};

/// A strategy that builds a job sequence from an instance.
///
/// Implementations must return a permutation of `0..num_jobs`.
pub trait SequenceHeuristic: Send + Sync + Debug {
    /// Heuristic name (e.g., "SPT").
    fn name(&self) -> &'static str;

    /// Builds a sequence for `matrix`.
    fn generate(&self, matrix: &ProcessingTimeMatrix) -> JobSequence;

    /// Heuristic description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Shortest total processing time first. See [`Spt`].
pub fn spt(matrix: &ProcessingTimeMatrix) -> JobSequence {
    Spt.generate(matrix)
}

/// Repeated lowest-total-time selection. See [`Greedy`].
pub fn greedy(matrix: &ProcessingTimeMatrix) -> JobSequence {
    Greedy.generate(matrix)
}

/// A starter batch of candidates: identity, SPT, Greedy, reversed
/// identity, and one random permutation drawn from `seed`.
pub fn seed_candidates(matrix: &ProcessingTimeMatrix, seed: u64) -> Vec<JobSequence> {
    let identity: JobSequence = (0..matrix.num_jobs()).collect();
    let reversed = identity.iter().rev().copied().collect();
    vec![
        identity,
        spt(matrix),
        greedy(matrix),
        reversed,
        RandomOrder::new(seed).generate(matrix),
    ]
}
