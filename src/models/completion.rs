//! Completion-time matrix and evaluation output.

use serde::{Deserialize, Serialize};

use crate::error::FlowShopError;

/// An ordering of job indices. Feasible iff it is a permutation of `0..n`.
pub type JobSequence = Vec<usize>;

/// Finishing times indexed `[position][machine]`.
///
/// `completion(i, j)` is when the job at sequence position `i` leaves
/// machine `j`. Same shape as the processing-time matrix it was derived
/// from. Built fresh by every evaluation.
///
/// Deserialization rejects a `times` buffer whose length is not
/// `num_positions * num_machines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCompletion")]
pub struct CompletionTimeMatrix {
    num_positions: usize,
    num_machines: usize,
    times: Vec<f64>,
}

#[derive(Deserialize)]
struct RawCompletion {
    num_positions: usize,
    num_machines: usize,
    times: Vec<f64>,
}

impl TryFrom<RawCompletion> for CompletionTimeMatrix {
    type Error = FlowShopError;

    fn try_from(raw: RawCompletion) -> Result<Self, Self::Error> {
        let expected = raw.num_positions.checked_mul(raw.num_machines);
        if expected != Some(raw.times.len()) {
            return Err(FlowShopError::CompletionShape {
                positions: raw.num_positions,
                machines: raw.num_machines,
                found: raw.times.len(),
            });
        }
        Ok(Self {
            num_positions: raw.num_positions,
            num_machines: raw.num_machines,
            times: raw.times,
        })
    }
}

impl CompletionTimeMatrix {
    /// Zero-filled matrix.
    pub(crate) fn zeros(num_positions: usize, num_machines: usize) -> Self {
        Self {
            num_positions,
            num_machines,
            times: vec![0.0; num_positions * num_machines],
        }
    }

    pub(crate) fn set(&mut self, position: usize, machine: usize, value: f64) {
        self.times[position * self.num_machines + machine] = value;
    }

    /// Number of sequence positions (rows).
    pub fn num_positions(&self) -> usize {
        self.num_positions
    }

    /// Number of machines (columns).
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Completion time at `position` on `machine`.
    pub fn get(&self, position: usize, machine: usize) -> f64 {
        self.times[position * self.num_machines + machine]
    }

    /// Completion times of the job at `position` on every machine.
    pub fn row(&self, position: usize) -> &[f64] {
        let start = position * self.num_machines;
        &self.times[start..start + self.num_machines]
    }

    /// Completion time of the last position on the last machine.
    ///
    /// `0.0` for an empty matrix.
    pub fn makespan(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Whether completion times are non-decreasing along both axes.
    pub fn is_monotone(&self) -> bool {
        for i in 0..self.num_positions {
            for j in 0..self.num_machines {
                let c = self.get(i, j);
                if i > 0 && c < self.get(i - 1, j) {
                    return false;
                }
                if j > 0 && c < self.get(i, j - 1) {
                    return false;
                }
            }
        }
        true
    }

    /// Row-major copy.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.num_positions)
            .map(|i| self.row(i).to_vec())
            .collect()
    }
}

/// Output of a single makespan evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Completion of the last job on the last machine.
    pub makespan: f64,
    /// Full completion surface.
    pub completion: CompletionTimeMatrix,
}

/// A ranked candidate: the feasible sequence and its makespan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Feasible (possibly repaired) job sequence.
    pub sequence: JobSequence,
    /// Makespan of `sequence`.
    pub makespan: f64,
    /// Position of the originating candidate in the input batch.
    pub candidate: usize,
    /// Whether the candidate had to be repaired.
    pub repaired: bool,
}
