//! Permutation flow-shop scheduling.
//!
//! Evaluates and ranks job orderings for the permutation flow-shop
//! problem (`F_m | prmu | C_max`): every job visits every machine in the
//! same order, and one job permutation is used on all machines.
//!
//! # Modules
//!
//! - **`models`**: `ProcessingTimeMatrix`, `JobSequence`,
//!   `CompletionTimeMatrix`, `Evaluation`, `ScheduleResult`
//! - **`validation`**: Permutation checks (length, range, duplicates, gaps)
//! - **`scheduler`**: Makespan engine, feasibility check and repair,
//!   batch planner, KPIs
//! - **`heuristics`**: SPT, greedy and seeded-random sequence builders
//! - **`loaders`**: CSV and free-text instance readers
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use u_flowshop::heuristics;
//! use u_flowshop::models::ProcessingTimeMatrix;
//! use u_flowshop::scheduler::FeasibilityPlanner;
//!
//! let matrix = ProcessingTimeMatrix::new(vec![
//!     vec![3.0, 2.0],
//!     vec![1.0, 4.0],
//!     vec![2.0, 1.0],
//! ]).unwrap();
//! let planner = FeasibilityPlanner::new(matrix);
//!
//! let mut batch = heuristics::seed_candidates(planner.engine().matrix(), 7);
//! batch.push(vec![0, 0, 1]); // repaired to [0, 1, 2]
//!
//! let ranked = planner.plan(&batch);
//! assert_eq!(ranked.len(), batch.len());
//! assert!(ranked[0].makespan <= ranked[ranked.len() - 1].makespan);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6
//! - Taillard (1993), "Benchmarks for basic scheduling problems"

pub mod error;
pub mod heuristics;
pub mod loaders;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{FlowShopError, LoadError};
