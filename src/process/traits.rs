/*!
 * Process Traits
 * Process management abstractions
 */

use super::types::ProcessRecord;
use crate::core::errors::SchedulerResult;
use crate::core::types::{Pid, Priority};

/// Process lifecycle management
pub trait ProcessLifecycle: Send + Sync {
    /// Create a new process, returning its PID
    fn create(&self, name: &str, priority: Priority) -> SchedulerResult<Pid>;

    /// Terminate a process by PID
    fn terminate_process(&self, pid: Pid) -> SchedulerResult<()>;

    /// Check if a PID was ever issued (terminated processes included)
    fn exists(&self, pid: Pid) -> bool;

    /// Get process information
    fn get_process(&self, pid: Pid) -> Option<ProcessRecord>;

    /// List all processes
    fn list_processes(&self) -> Vec<ProcessRecord>;
}
