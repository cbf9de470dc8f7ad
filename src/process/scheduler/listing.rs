/*!
 * Scheduler Queries
 * Read-only inspection and listing; none of these reorder or drain a queue
 */

use super::Scheduler;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Pid;
use crate::process::types::{ProcessRecord, SchedulerSnapshot};

impl Scheduler {
    /// Snapshot of one process
    pub fn inspect(&self, pid: Pid) -> SchedulerResult<ProcessRecord> {
        self.registry
            .get(&pid)
            .cloned()
            .ok_or(SchedulerError::UnknownProcess(pid))
    }

    /// Every process ever created, ordered by PID
    pub fn list_all(&self) -> Vec<ProcessRecord> {
        self.registry.values().cloned().collect()
    }

    /// Ready processes in the order `dispatch` would pick them
    pub fn list_ready(&self) -> Vec<ProcessRecord> {
        self.ready
            .ordered()
            .iter()
            .filter_map(|entry| self.registry.get(&entry.pid).cloned())
            .collect()
    }

    /// Blocked processes, longest-blocked first
    pub fn list_blocked(&self) -> Vec<ProcessRecord> {
        self.blocked
            .iter()
            .filter_map(|pid| self.registry.get(&pid).cloned())
            .collect()
    }

    /// The running process, if any
    pub fn running(&self) -> Option<ProcessRecord> {
        self.running
            .and_then(|pid| self.registry.get(&pid))
            .cloned()
    }

    pub fn running_pid(&self) -> Option<Pid> {
        self.running
    }

    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    pub fn blocked_len(&self) -> usize {
        self.blocked.len()
    }

    /// Registry size, terminated processes included
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Nothing ready, blocked, or running
    pub fn is_idle(&self) -> bool {
        self.ready.is_empty() && self.blocked.is_empty() && self.running.is_none()
    }

    /// Consistent view of every queue and the stats
    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot {
            all: self.list_all(),
            ready: self.list_ready(),
            blocked: self.list_blocked(),
            running: self.running(),
            stats: self.stats(),
        }
    }
}
