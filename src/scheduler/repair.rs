//! Feasibility repair.
//!
//! # Algorithm
//!
//! 1. A feasible sequence is returned unchanged.
//! 2. Otherwise keep the first occurrence of each in-range job, in input
//!    order, dropping duplicates and out-of-range entries.
//! 3. Append the jobs never seen, in ascending index order.
//! 4. The result is a permutation by construction. Should it still fail
//!    the feasibility check, fall back to SPT.
//!
//! Deterministic: the same input always yields the same repair.
//!
//! # Complexity
//! O(n + len(input)) plus one feasibility check, O(n * m).

use tracing::{debug, warn};

use super::{FeasibilityChecker, MakespanEngine};
use crate::heuristics;
use crate::models::JobSequence;

/// Turns arbitrary job sequences into feasible ones.
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityRepair<'a> {
    engine: &'a MakespanEngine,
    checker: FeasibilityChecker<'a>,
}

impl<'a> FeasibilityRepair<'a> {
    /// Creates a repairer using a default [`FeasibilityChecker`].
    pub fn new(engine: &'a MakespanEngine) -> Self {
        Self::with_checker(engine, FeasibilityChecker::new(engine))
    }

    /// Creates a repairer using `checker` to decide feasibility.
    pub fn with_checker(engine: &'a MakespanEngine, checker: FeasibilityChecker<'a>) -> Self {
        Self { engine, checker }
    }

    /// Returns a feasible sequence, preserving as much of `sequence`'s
    /// relative order as possible.
    ///
    /// Total: any input, including empty or out-of-range entries, yields a
    /// permutation of `0..num_jobs`.
    pub fn repair(&self, sequence: &[usize]) -> JobSequence {
        self.repair_tracked(sequence).0
    }

    /// Like [`repair`](Self::repair), also reporting whether the input had
    /// to change.
    pub fn repair_tracked(&self, sequence: &[usize]) -> (JobSequence, bool) {
        if self.checker.is_feasible(sequence) {
            return (sequence.to_vec(), false);
        }

        let n = self.engine.num_jobs();
        let mut seen = vec![false; n];
        let mut repaired = Vec::with_capacity(n);

        for &job in sequence {
            if job < n && !seen[job] {
                seen[job] = true;
                repaired.push(job);
            }
        }
        let kept = repaired.len();
        repaired.extend((0..n).filter(|&job| !seen[job]));

        debug!(
            input_len = sequence.len(),
            kept,
            appended = n - kept,
            "Repaired infeasible sequence"
        );

        if !self.checker.is_feasible(&repaired) {
            warn!("Repaired sequence failed feasibility check, falling back to SPT");
            return (heuristics::spt(self.engine.matrix()), true);
        }

        (repaired, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessingTimeMatrix;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn sample_engine() -> MakespanEngine {
        MakespanEngine::new(
            ProcessingTimeMatrix::new(vec![vec![3.0, 2.0], vec![1.0, 4.0], vec![2.0, 1.0]])
                .unwrap(),
        )
    }

    fn assert_permutation(seq: &[usize], n: usize) {
        let mut sorted = seq.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicate_repair() {
        let engine = sample_engine();
        let repair = FeasibilityRepair::new(&engine);
        assert_eq!(repair.repair(&[0, 0, 1]), vec![0, 1, 2]);
    }

    #[test]
    fn test_preserves_relative_order() {
        let engine = sample_engine();
        let repair = FeasibilityRepair::new(&engine);
        assert_eq!(repair.repair(&[2, 9, 2, 0]), vec![2, 0, 1]);
        assert_eq!(repair.repair(&[1]), vec![1, 0, 2]);
    }

    #[test]
    fn test_idempotent_on_feasible() {
        let engine = sample_engine();
        let repair = FeasibilityRepair::new(&engine);
        assert_eq!(repair.repair_tracked(&[2, 0, 1]), (vec![2, 0, 1], false));

        let once = repair.repair(&[1, 1, 7, 0]);
        assert_eq!(repair.repair_tracked(&once), (once.clone(), false));
    }

    #[test]
    fn test_empty_and_garbage_inputs() {
        let engine = sample_engine();
        let repair = FeasibilityRepair::new(&engine);
        assert_eq!(repair.repair(&[]), vec![0, 1, 2]);
        assert_eq!(repair.repair(&[5, 6, 7, 8, 9]), vec![0, 1, 2]);
        assert_eq!(repair.repair(&[2, 1, 0, 2, 1, 0]), vec![2, 1, 0]);
    }

    #[test]
    fn test_totality_on_random_inputs() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let jobs = rng.random_range(1..10);
            let rows = (0..jobs).map(|j| vec![j as f64 + 1.0, 2.0]).collect();
            let engine = MakespanEngine::new(ProcessingTimeMatrix::new(rows).unwrap());
            let repair = FeasibilityRepair::new(&engine);

            let len = rng.random_range(0..2 * jobs + 2);
            let input: Vec<usize> = (0..len).map(|_| rng.random_range(0..2 * jobs)).collect();
            let out = repair.repair(&input);
            assert_permutation(&out, jobs);
            assert!(FeasibilityChecker::new(&engine).is_feasible(&out));
        }
    }

    #[test]
    fn test_feasible_permutations_untouched() {
        let mut rng = StdRng::seed_from_u64(23);
        let rows = (0..6).map(|j| vec![j as f64, 1.0, 2.0]).collect();
        let engine = MakespanEngine::new(ProcessingTimeMatrix::new(rows).unwrap());
        let repair = FeasibilityRepair::new(&engine);
        for _ in 0..20 {
            let mut seq: Vec<usize> = (0..6).collect();
            seq.shuffle(&mut rng);
            assert_eq!(repair.repair(&seq), seq);
        }
    }
}
