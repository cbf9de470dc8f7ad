/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Scheduler-related errors with serialization support
///
/// Every variant is a local, recoverable condition. A failed operation
/// leaves the scheduler exactly as it was before the call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("No process available: queue is empty")]
    #[diagnostic(
        code(scheduler::empty_queue),
        help("Create a process or unblock one before dispatching.")
    )]
    EmptyQueue,

    #[error("Process {pid} is not the running process (running: {running:?})")]
    #[diagnostic(
        code(scheduler::not_running),
        help("Only the currently running process can be blocked. Dispatch it first.")
    )]
    NotRunning { pid: Pid, running: Option<Pid> },

    #[error("No blocked process to unblock")]
    #[diagnostic(code(scheduler::nothing_blocked))]
    NothingBlocked,

    #[error("No process is running")]
    #[diagnostic(
        code(scheduler::nothing_running),
        help("Pass an explicit PID or dispatch a process first.")
    )]
    NothingRunning,

    #[error("Process {0} not found")]
    #[diagnostic(
        code(scheduler::unknown_process),
        help("The PID was never issued by this scheduler.")
    )]
    UnknownProcess(Pid),

    #[error("Process {0} is already terminated")]
    #[diagnostic(
        code(scheduler::already_terminated),
        help("Terminated processes stay in the registry for inspection only.")
    )]
    AlreadyTerminated(Pid),

    #[error("Process limit reached: {live} live, limit {limit}")]
    #[diagnostic(
        code(scheduler::limit_reached),
        help("Terminate unused processes or raise PROCSCHED_MAX_PROCESSES.")
    )]
    LimitReached { live: usize, limit: usize },

    #[error("PID space exhausted")]
    #[diagnostic(
        code(scheduler::pid_exhausted),
        help("Start from a lower PROCSCHED_FIRST_PID. PIDs are never reused.")
    )]
    PidExhausted,

    #[error("Scheduler task is not available")]
    #[diagnostic(
        code(scheduler::unavailable),
        help("The scheduler task has shut down or panicked.")
    )]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SchedulerError::UnknownProcess(42).to_string(),
            "Process 42 not found"
        );
        assert_eq!(
            SchedulerError::NotRunning {
                pid: 3,
                running: Some(1)
            }
            .to_string(),
            "Process 3 is not the running process (running: Some(1))"
        );
    }

    #[test]
    fn test_error_serialization_is_tagged() {
        let json = serde_json::to_value(SchedulerError::AlreadyTerminated(7)).unwrap();
        assert_eq!(json["error_type"], "already_terminated");
        assert_eq!(json["details"], 7);

        let json = serde_json::to_value(SchedulerError::EmptyQueue).unwrap();
        assert_eq!(json["error_type"], "empty_queue");
    }

    #[test]
    fn test_diagnostic_code() {
        let err = SchedulerError::NothingBlocked;
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("scheduler::nothing_blocked"));
    }
}
