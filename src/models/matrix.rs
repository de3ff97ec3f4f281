//! Processing-time matrix.
//!
//! The immutable input of a permutation flow-shop instance: the time each
//! job spends on each machine. Every job visits machines `0..m` in the
//! same order.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

use serde::{Deserialize, Serialize};

use crate::error::FlowShopError;

/// Processing times indexed `[job][machine]`.
///
/// Dimensions are fixed for the lifetime of the value and all entries are
/// finite and non-negative. Construction is the only place a malformed
/// instance is rejected; nothing downstream re-checks it.
///
/// Stored row-major in a single buffer. (De)serializes as `Vec<Vec<f64>>`
/// and re-validates on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct ProcessingTimeMatrix {
    num_jobs: usize,
    num_machines: usize,
    times: Vec<f64>,
}

impl ProcessingTimeMatrix {
    /// Builds a matrix from one row of machine times per job.
    ///
    /// # Errors
    /// - [`FlowShopError::NoJobs`] if `rows` is empty.
    /// - [`FlowShopError::NoMachines`] if the first row is empty.
    /// - [`FlowShopError::RaggedRow`] if rows differ in length.
    /// - [`FlowShopError::InvalidTime`] for negative, NaN or infinite entries.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, FlowShopError> {
        let num_jobs = rows.len();
        let num_machines = rows.first().ok_or(FlowShopError::NoJobs)?.len();
        if num_machines == 0 {
            return Err(FlowShopError::NoMachines);
        }

        let mut times = Vec::with_capacity(num_jobs * num_machines);
        for (job, row) in rows.into_iter().enumerate() {
            if row.len() != num_machines {
                return Err(FlowShopError::RaggedRow {
                    job,
                    expected: num_machines,
                    found: row.len(),
                });
            }
            for (machine, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(FlowShopError::InvalidTime {
                        job,
                        machine,
                        value,
                    });
                }
            }
            // -0.0 would order before 0.0 under `total_cmp`.
            times.extend(row.into_iter().map(|v| if v == 0.0 { 0.0 } else { v }));
        }

        Ok(Self {
            num_jobs,
            num_machines,
            times,
        })
    }

    /// Number of jobs (rows).
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of machines (columns).
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Processing time of `job` on `machine`.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn time(&self, job: usize, machine: usize) -> f64 {
        assert!(machine < self.num_machines, "machine {machine} out of range");
        self.job_times(job)[machine]
    }

    /// All machine times of `job`.
    ///
    /// # Panics
    /// If `job` is out of range.
    pub fn job_times(&self, job: usize) -> &[f64] {
        assert!(job < self.num_jobs, "job {job} out of range");
        let start = job * self.num_machines;
        &self.times[start..start + self.num_machines]
    }

    /// Total processing time of `job` across all machines.
    ///
    /// # Panics
    /// If `job` is out of range.
    pub fn total_time(&self, job: usize) -> f64 {
        self.job_times(job).iter().sum()
    }

    /// Total processing time of every job, indexed by job.
    pub fn job_totals(&self) -> Vec<f64> {
        (0..self.num_jobs).map(|job| self.total_time(job)).collect()
    }

    /// Total work on `machine` across all jobs.
    pub fn machine_load(&self, machine: usize) -> f64 {
        (0..self.num_jobs).map(|job| self.time(job, machine)).sum()
    }

    /// Row-major copy of the matrix.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.times
            .chunks(self.num_machines)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for ProcessingTimeMatrix {
    type Error = FlowShopError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<ProcessingTimeMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ProcessingTimeMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProcessingTimeMatrix {
        ProcessingTimeMatrix::new(vec![vec![3.0, 2.0], vec![1.0, 4.0], vec![2.0, 1.0]]).unwrap()
    }

    #[test]
    fn test_dimensions_and_access() {
        let m = sample();
        assert_eq!(m.num_jobs(), 3);
        assert_eq!(m.num_machines(), 2);
        assert_eq!(m.time(1, 1), 4.0);
        assert_eq!(m.job_times(2), &[2.0, 1.0]);
    }

    #[test]
    fn test_totals_and_loads() {
        let m = sample();
        assert_eq!(m.job_totals(), vec![5.0, 5.0, 3.0]);
        assert!((m.machine_load(0) - 6.0).abs() < 1e-10);
        assert!((m.machine_load(1) - 7.0).abs() < 1e-10);
    }

    #[test]
    #[should_panic(expected = "job 3 out of range")]
    fn test_job_times_out_of_range_panics() {
        sample().job_times(3);
    }

    #[test]
    #[should_panic(expected = "job 5 out of range")]
    fn test_total_time_out_of_range_panics() {
        sample().total_time(5);
    }

    #[test]
    #[should_panic(expected = "job 3 out of range")]
    fn test_time_out_of_range_job_panics() {
        sample().time(3, 0);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let m = ProcessingTimeMatrix::new(vec![vec![-0.0, 1.0]]).unwrap();
        assert!(m.time(0, 0).is_sign_positive());
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(ProcessingTimeMatrix::new(vec![]), Err(FlowShopError::NoJobs));
        assert_eq!(
            ProcessingTimeMatrix::new(vec![vec![], vec![]]),
            Err(FlowShopError::NoMachines)
        );
    }

    #[test]
    fn test_ragged_is_rejected() {
        let err = ProcessingTimeMatrix::new(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            FlowShopError::RaggedRow {
                job: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_invalid_times_are_rejected() {
        assert!(matches!(
            ProcessingTimeMatrix::new(vec![vec![1.0, -0.5]]),
            Err(FlowShopError::InvalidTime { job: 0, machine: 1, .. })
        ));
        assert!(ProcessingTimeMatrix::new(vec![vec![f64::NAN]]).is_err());
        assert!(ProcessingTimeMatrix::new(vec![vec![f64::INFINITY]]).is_err());
        assert!(ProcessingTimeMatrix::new(vec![vec![0.0]]).is_ok());
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[3.0,2.0],[1.0,4.0],[2.0,1.0]]");
        let back: ProcessingTimeMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        assert!(serde_json::from_str::<ProcessingTimeMatrix>("[[1.0],[1.0,2.0]]").is_err());
        assert!(serde_json::from_str::<ProcessingTimeMatrix>("[]").is_err());
    }
}
