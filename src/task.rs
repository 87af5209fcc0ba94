//! Task polling utilities
//!
//! The UI never awaits. Requests run as tokio tasks and each frame checks
//! whether the handle has finished.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Result of polling a task
pub enum PollResult<T> {
    /// Task is still running
    Pending,
    /// Task finished; `Err` means it panicked or was aborted
    Complete(Result<T, JoinError>),
}

/// Check a task handle without blocking.
///
/// Once this returns `Complete` the handle has been consumed and must not be
/// polled again; callers replace it in the same step.
pub fn poll_task<T>(handle: &mut JoinHandle<T>) -> PollResult<T> {
    if !handle.is_finished() {
        return PollResult::Pending;
    }

    match handle.now_or_never() {
        Some(result) => PollResult::Complete(result),
        None => {
            // is_finished() and the join waker can briefly disagree
            tracing::warn!("Task not ready despite is_finished()");
            PollResult::Pending
        }
    }
}
