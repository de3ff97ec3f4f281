//! Structural validation of job sequences.
//!
//! A job sequence is valid for an `n`-job instance iff it is a
//! permutation of `0..n`. [`validate_sequence`] reports every violation
//! it finds rather than stopping at the first one:
//! - Wrong length
//! - Out-of-range job indices
//! - Duplicate job indices
//! - Missing jobs

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Sequence length differs from the number of jobs.
    WrongLength,
    /// An entry is not a job index of this instance.
    OutOfRange,
    /// A job appears more than once.
    Duplicate,
    /// A job does not appear at all.
    MissingJob,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates that `sequence` is a permutation of `0..num_jobs`.
///
/// # Returns
/// `Ok(())` if the sequence is a permutation, `Err(errors)` with all detected issues.
pub fn validate_sequence(sequence: &[usize], num_jobs: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if sequence.len() != num_jobs {
        errors.push(ValidationError::new(
            ValidationErrorKind::WrongLength,
            format!(
                "sequence has {} entries, expected {num_jobs}",
                sequence.len()
            ),
        ));
    }

    let mut counts = vec![0usize; num_jobs];
    for (pos, &job) in sequence.iter().enumerate() {
        match counts.get_mut(job) {
            Some(count) => *count += 1,
            None => errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!("entry {job} at position {pos} is not a job index below {num_jobs}"),
            )),
        }
    }

    for (job, &count) in counts.iter().enumerate() {
        match count {
            0 => errors.push(ValidationError::new(
                ValidationErrorKind::MissingJob,
                format!("job {job} is missing"),
            )),
            1 => {}
            n => errors.push(ValidationError::new(
                ValidationErrorKind::Duplicate,
                format!("job {job} appears {n} times"),
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether `sequence` only holds in-range job indices.
///
/// Weaker than a permutation: duplicates and gaps are allowed. This is
/// exactly what the makespan recurrence needs to stay in bounds.
pub fn is_in_range(sequence: &[usize], num_jobs: usize) -> bool {
    sequence.iter().all(|&job| job < num_jobs)
}
