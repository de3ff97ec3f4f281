//! Flow-shop schedule metrics (KPIs).
//!
//! Computes standard performance indicators from an evaluated sequence.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Completion of the last job on the last machine |
//! | Total Flow Time | Sum of each job's completion on the last machine |
//! | Mean Flow Time | Total flow time / number of jobs |
//! | Machine Busy Time | Sum of processing times on the machine |
//! | Machine Idle Time | Makespan - busy time |
//! | Utilization | Busy time / makespan |
//!
//! All jobs are released at t=0, so flow time equals completion time.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::{Evaluation, ProcessingTimeMatrix};

/// Flow-shop performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowShopKpi {
    /// Makespan.
    pub makespan: f64,
    /// Sum of completion times on the last machine.
    pub total_flow_time: f64,
    /// Mean completion time on the last machine.
    pub mean_flow_time: f64,
    /// Busy time per machine.
    pub busy_by_machine: Vec<f64>,
    /// Idle time per machine within `[0, makespan]`.
    pub idle_by_machine: Vec<f64>,
    /// Utilization per machine (0.0..1.0).
    pub utilization_by_machine: Vec<f64>,
    /// Mean machine utilization (0.0..1.0).
    pub avg_utilization: f64,
}

impl FlowShopKpi {
    /// Computes KPIs for an evaluation produced from `matrix`.
    ///
    /// # Arguments
    /// * `matrix` - The instance the evaluation was computed on.
    /// * `evaluation` - Output of [`MakespanEngine::evaluate`](super::MakespanEngine::evaluate).
    pub fn calculate(matrix: &ProcessingTimeMatrix, evaluation: &Evaluation) -> Self {
        let completion = &evaluation.completion;
        let makespan = evaluation.makespan;
        let positions = completion.num_positions();
        let last = completion.num_machines().saturating_sub(1);

        let total_flow_time: f64 = (0..positions).map(|i| completion.get(i, last)).sum();
        let mean_flow_time = if positions == 0 {
            0.0
        } else {
            total_flow_time / positions as f64
        };

        let busy_by_machine: Vec<f64> = (0..matrix.num_machines())
            .map(|j| matrix.machine_load(j))
            .collect();
        let idle_by_machine = busy_by_machine
            .iter()
            .map(|&busy| (makespan - busy).max(0.0))
            .collect();
        let utilization_by_machine: Vec<f64> = busy_by_machine
            .iter()
            .map(|&busy| if makespan > 0.0 { busy / makespan } else { 0.0 })
            .collect();

        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            utilization_by_machine.iter().sum::<f64>() / utilization_by_machine.len() as f64
        };

        Self {
            makespan,
            total_flow_time,
            mean_flow_time,
            busy_by_machine,
            idle_by_machine,
            utilization_by_machine,
            avg_utilization,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_makespan: f64, min_utilization: f64) -> bool {
        self.makespan <= max_makespan && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::MakespanEngine;

    fn sample() -> (MakespanEngine, Evaluation) {
        let engine = MakespanEngine::new(
            ProcessingTimeMatrix::new(vec![vec![3.0, 2.0], vec![1.0, 4.0], vec![2.0, 1.0]])
                .unwrap(),
        );
        let eval = engine.evaluate(&[0, 1, 2]).unwrap();
        (engine, eval)
    }

    #[test]
    fn test_kpi_basic() {
        let (engine, eval) = sample();
        let kpi = FlowShopKpi::calculate(engine.matrix(), &eval);
        assert!((kpi.makespan - 10.0).abs() < 1e-10);
        // 5 + 9 + 10
        assert!((kpi.total_flow_time - 24.0).abs() < 1e-10);
        assert!((kpi.mean_flow_time - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization() {
        let (engine, eval) = sample();
        let kpi = FlowShopKpi::calculate(engine.matrix(), &eval);
        assert_eq!(kpi.busy_by_machine, vec![6.0, 7.0]);
        assert_eq!(kpi.idle_by_machine, vec![4.0, 3.0]);
        assert!((kpi.utilization_by_machine[0] - 0.6).abs() < 1e-10);
        assert!((kpi.utilization_by_machine[1] - 0.7).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.65).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_zero_makespan() {
        let engine =
            MakespanEngine::new(ProcessingTimeMatrix::new(vec![vec![0.0, 0.0]]).unwrap());
        let eval = engine.evaluate(&[0]).unwrap();
        let kpi = FlowShopKpi::calculate(engine.matrix(), &eval);
        assert_eq!(kpi.makespan, 0.0);
        assert_eq!(kpi.utilization_by_machine, vec![0.0, 0.0]);
        assert_eq!(kpi.avg_utilization, 0.0);
    }

    #[test]
    fn test_meets_thresholds() {
        let (engine, eval) = sample();
        let kpi = FlowShopKpi::calculate(engine.matrix(), &eval);
        assert!(kpi.meets_thresholds(10.0, 0.6));
        assert!(!kpi.meets_thresholds(9.5, 0.0));
        assert!(!kpi.meets_thresholds(20.0, 0.7));
    }
}
