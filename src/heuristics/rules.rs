//! Built-in sequence heuristics.
//!
//! - **SPT**: single stable sort by total processing time
//! - **Greedy**: repeated minimum selection over the remaining jobs
//! - **Random**: seeded uniform permutation
//!
//! SPT and Greedy currently produce the same ordering because job totals
//! never change. Greedy keeps its own selection loop so that a selection
//! criterion depending on the partial schedule can replace it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::SequenceHeuristic;
use crate::models::{JobSequence, ProcessingTimeMatrix};

/// Shortest Processing Time.
///
/// Orders jobs by ascending total processing time across all machines.
/// Ties keep ascending job index (stable sort).
///
/// # Complexity
/// O(n log n) after O(n * m) totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spt;

impl SequenceHeuristic for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn generate(&self, matrix: &ProcessingTimeMatrix) -> JobSequence {
        let totals = matrix.job_totals();
        let mut jobs: JobSequence = (0..matrix.num_jobs()).collect();
        jobs.sort_by(|&a, &b| totals[a].total_cmp(&totals[b]));
        jobs
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Greedy lowest-total-time selection.
///
/// At each step picks, among the jobs not yet placed, the one with the
/// smallest total processing time (lowest index on ties).
///
/// # Complexity
/// O(n^2) after O(n * m) totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl SequenceHeuristic for Greedy {
    fn name(&self) -> &'static str {
        "GREEDY"
    }

    fn generate(&self, matrix: &ProcessingTimeMatrix) -> JobSequence {
        let totals = matrix.job_totals();
        let mut remaining: Vec<usize> = (0..matrix.num_jobs()).collect();
        let mut sequence = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let mut best = 0;
            for (k, &job) in remaining.iter().enumerate().skip(1) {
                if totals[job].total_cmp(&totals[remaining[best]]).is_lt() {
                    best = k;
                }
            }
            sequence.push(remaining.remove(best));
        }

        sequence
    }

    fn description(&self) -> &'static str {
        "Greedy Lowest Total Time"
    }
}

/// Uniformly random permutation from a fixed seed.
#[derive(Debug, Clone, Copy)]
pub struct RandomOrder {
    /// RNG seed; the same seed always yields the same permutation.
    pub seed: u64,
}

impl RandomOrder {
    /// Creates a random-order heuristic with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SequenceHeuristic for RandomOrder {
    fn name(&self) -> &'static str {
        "RANDOM"
    }

    fn generate(&self, matrix: &ProcessingTimeMatrix) -> JobSequence {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut jobs: JobSequence = (0..matrix.num_jobs()).collect();
        jobs.shuffle(&mut rng);
        jobs
    }

    fn description(&self) -> &'static str {
        "Seeded Random Permutation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn matrix(rows: Vec<Vec<f64>>) -> ProcessingTimeMatrix {
        ProcessingTimeMatrix::new(rows).unwrap()
    }

    #[test]
    fn test_spt_ordering() {
        let m = matrix(vec![
            vec![5.0, 5.0], // 10
            vec![1.0, 1.0], // 2
            vec![3.0, 3.0], // 6
        ]);
        assert_eq!(Spt.generate(&m), vec![1, 2, 0]);
    }

    #[test]
    fn test_spt_ties_keep_index_order() {
        let m = matrix(vec![vec![2.0, 2.0], vec![1.0, 3.0], vec![4.0, 0.0], vec![1.0, 0.0]]);
        assert_eq!(Spt.generate(&m), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_spt_deterministic() {
        let m = matrix(vec![vec![3.0, 2.0], vec![1.0, 4.0], vec![2.0, 1.0]]);
        assert_eq!(Spt.generate(&m), Spt.generate(&m));
    }

    #[test]
    fn test_greedy_matches_spt() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..30 {
            let jobs = rng.random_range(1..20);
            let rows = (0..jobs)
                .map(|_| (0..3).map(|_| rng.random_range(0..5) as f64).collect())
                .collect();
            let m = matrix(rows);
            assert_eq!(Greedy.generate(&m), Spt.generate(&m));
        }
    }

    #[test]
    fn test_greedy_ties_keep_index_order() {
        let m = matrix(vec![vec![1.0], vec![1.0], vec![0.5]]);
        assert_eq!(Greedy.generate(&m), vec![2, 0, 1]);
    }

    #[test]
    fn test_zero_totals_tie_by_index() {
        let m = matrix(vec![vec![-0.0], vec![0.0], vec![-0.0], vec![0.0]]);
        assert_eq!(Spt.generate(&m), vec![0, 1, 2, 3]);
        assert_eq!(Greedy.generate(&m), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_random_is_seeded_permutation() {
        let m = matrix((0..10).map(|j| vec![j as f64]).collect());
        let a = RandomOrder::new(9).generate(&m);
        assert_eq!(a, RandomOrder::new(9).generate(&m));

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_names() {
        assert_eq!(Spt.name(), "SPT");
        assert_eq!(Greedy.description(), "Greedy Lowest Total Time");
        assert_eq!(RandomOrder::new(0).name(), "RANDOM");
    }
}
