//! Batch repair-and-rank planner.
//!
//! # Algorithm
//!
//! 1. Repair every candidate into a feasible sequence.
//! 2. Evaluate the makespan of each repaired sequence.
//! 3. Stable-sort ascending by makespan (ties keep input order).
//!
//! Candidates are independent, so step 1-2 can run on a rayon pool. The
//! parallel path returns exactly what the sequential one does unless a
//! time limit cuts the batch short.
//!
//! A batch can be bounded by a candidate cap and a wall-clock limit.
//! Candidates not started before the deadline are dropped from the result.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::feasibility::DEFAULT_EPSILON;
use super::{FeasibilityChecker, FeasibilityRepair, MakespanEngine};
use crate::models::{ProcessingTimeMatrix, ScheduleResult};

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Evaluate candidates on the rayon thread pool.
    pub parallel: bool,
    /// Tolerance of the precedence sanity check.
    pub epsilon: f64,
    /// Only the first `max_candidates` of a batch are scored.
    pub max_candidates: Option<usize>,
    /// Wall-clock budget of one `plan` call, in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            epsilon: DEFAULT_EPSILON,
            max_candidates: None,
            time_limit_ms: None,
        }
    }
}

impl PlannerConfig {
    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the precedence-check tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Caps the number of candidates scored per batch.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    /// Sets the wall-clock budget of one `plan` call.
    pub fn with_time_limit_ms(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = Some(time_limit_ms);
        self
    }
}

/// Repairs, scores and ranks batches of candidate sequences.
///
/// # Example
/// ```
/// use u_flowshop::models::ProcessingTimeMatrix;
/// use u_flowshop::scheduler::FeasibilityPlanner;
///
/// let matrix = ProcessingTimeMatrix::new(vec![
///     vec![3.0, 2.0],
///     vec![1.0, 4.0],
///     vec![2.0, 1.0],
/// ]).unwrap();
/// let planner = FeasibilityPlanner::new(matrix);
///
/// let ranked = planner.plan(&[vec![0, 1, 2], vec![2, 1, 0]]);
/// assert_eq!(ranked[0].sequence, vec![2, 1, 0]);
/// assert_eq!(ranked[0].makespan, 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct FeasibilityPlanner {
    engine: MakespanEngine,
    config: PlannerConfig,
}

impl FeasibilityPlanner {
    /// Creates a planner with the default configuration.
    pub fn new(matrix: ProcessingTimeMatrix) -> Self {
        Self::with_config(matrix, PlannerConfig::default())
    }

    /// Creates a planner with `config`.
    pub fn with_config(matrix: ProcessingTimeMatrix, config: PlannerConfig) -> Self {
        Self {
            engine: MakespanEngine::new(matrix),
            config,
        }
    }

    /// The underlying makespan engine.
    pub fn engine(&self) -> &MakespanEngine {
        &self.engine
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// A feasibility checker using the configured tolerance.
    pub fn checker(&self) -> FeasibilityChecker<'_> {
        FeasibilityChecker::new(&self.engine).with_epsilon(self.config.epsilon)
    }

    /// A repairer using the configured tolerance.
    pub fn repairer(&self) -> FeasibilityRepair<'_> {
        FeasibilityRepair::with_checker(&self.engine, self.checker())
    }

    /// Repairs and scores every candidate, returning all of them ranked
    /// ascending by makespan.
    ///
    /// Never fails on a bad candidate; each is repaired before scoring.
    /// Without a candidate cap or time limit the result has one entry per
    /// candidate. Otherwise candidates past the cap, and those not started
    /// before the deadline, are left out; `candidate` still indexes the
    /// full input batch.
    #[instrument(
        skip_all,
        fields(
            candidates = candidates.len(),
            parallel = self.config.parallel,
            max_ms = self.config.time_limit_ms
        )
    )]
    pub fn plan(&self, candidates: &[Vec<usize>]) -> Vec<ScheduleResult> {
        let limit = self
            .config
            .max_candidates
            .map_or(candidates.len(), |cap| cap.min(candidates.len()));
        let batch = &candidates[..limit];
        let deadline = self
            .config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));
        let in_budget = || deadline.map_or(true, |d| Instant::now() < d);

        let mut results: Vec<ScheduleResult> = if self.config.parallel {
            batch
                .par_iter()
                .enumerate()
                .filter_map(|(idx, seq)| in_budget().then(|| self.score(idx, seq)))
                .collect()
        } else {
            batch
                .iter()
                .enumerate()
                .filter_map(|(idx, seq)| in_budget().then(|| self.score(idx, seq)))
                .collect()
        };

        if results.len() < candidates.len() {
            warn!(
                scored = results.len(),
                skipped = candidates.len() - results.len(),
                "Candidate batch cut short by planner budget"
            );
        }

        results.sort_by(|a, b| a.makespan.total_cmp(&b.makespan));

        if let Some(best) = results.first() {
            info!(
                best_makespan = best.makespan,
                best_candidate = best.candidate,
                repaired = results.iter().filter(|r| r.repaired).count(),
                "Ranked candidate batch"
            );
        }

        results
    }

    /// The best-ranked candidate, or `None` for an empty batch.
    pub fn best(&self, candidates: &[Vec<usize>]) -> Option<ScheduleResult> {
        self.plan(candidates).into_iter().next()
    }

    fn score(&self, candidate: usize, sequence: &[usize]) -> ScheduleResult {
        let (sequence, repaired) = self.repairer().repair_tracked(sequence);
        // Repaired sequences are permutations, so the recurrence is in bounds.
        let makespan = self.engine.completion_times(&sequence).makespan();
        ScheduleResult {
            sequence,
            makespan,
            candidate,
            repaired,
        }
    }
}
