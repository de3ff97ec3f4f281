//! Flow-shop domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessingTimeMatrix` | Input: time of each job on each machine |
//! | `JobSequence` | A candidate job ordering |
//! | `CompletionTimeMatrix` | Derived: finishing time per position and machine |
//! | `Evaluation` | Makespan plus completion surface |
//! | `ScheduleResult` | A ranked, feasible candidate |

mod completion;
mod matrix;

pub use completion::{CompletionTimeMatrix, Evaluation, JobSequence, ScheduleResult};
pub use matrix::ProcessingTimeMatrix;
