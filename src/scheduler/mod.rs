//! Flow-shop scheduling engine.
//!
//! Evaluates, checks, repairs and ranks job sequences for a single
//! permutation flow-shop instance.
//!
//! # Components
//!
//! - `MakespanEngine`: completion-time recurrence and makespan
//! - `FeasibilityChecker`: permutation + precedence test
//! - `FeasibilityRepair`: order-preserving repair into a permutation
//! - `FeasibilityPlanner`: repair, score and rank a candidate batch
//! - `FlowShopKpi`: flow time and machine utilization of an evaluation
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod engine;
mod feasibility;
mod kpi;
mod planner;
mod repair;

pub use engine::MakespanEngine;
pub use feasibility::{FeasibilityChecker, DEFAULT_EPSILON};
pub use kpi::FlowShopKpi;
pub use planner::{FeasibilityPlanner, PlannerConfig};
pub use repair::FeasibilityRepair;
