/*!
 * Process Types
 * Common types for process lifecycle management
 */

use crate::core::serde::{is_zero_u64, is_zero_usize};
use crate::core::types::{Pid, Priority, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Record constructed, not yet admitted
    New,
    /// Waiting in the ready queue
    Ready,
    /// Holding the single running slot
    Running,
    /// Waiting in the blocked queue
    Blocked,
    /// Retired; kept in the registry for inspection only
    Terminated,
}

impl ProcessState {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProcessState::New => "New",
            ProcessState::Ready => "Ready",
            ProcessState::Running => "Running",
            ProcessState::Blocked => "Blocked",
            ProcessState::Terminated => "Terminated",
        }
    }

    /// Anything except `Terminated`
    #[inline(always)]
    #[must_use]
    pub const fn is_live(&self) -> bool {
        !matches!(self, ProcessState::Terminated)
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process record
///
/// Identity (`pid`, `name`, `priority`, `created_at`) is fixed at
/// construction. Lifecycle fields are only changed by the scheduler;
/// callers always receive cloned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub pid: Pid,
    pub name: String,
    pub priority: Priority,
    pub state: ProcessState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    pub created_at: Timestamp,
    /// Microseconds spent in `Running`, settled whenever the process leaves it
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub execution_time_micros: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_dispatched_at: Option<Timestamp>,
}

impl ProcessRecord {
    #[must_use]
    pub(crate) fn new(pid: Pid, name: String, priority: Priority, created_at: Timestamp) -> Self {
        Self {
            pid,
            name,
            priority,
            state: ProcessState::New,
            block_reason: None,
            created_at,
            execution_time_micros: 0,
            last_dispatched_at: None,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ProcessState::Running)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Terminated)
    }

    /// Total time spent running
    #[inline]
    #[must_use]
    pub const fn execution_time(&self) -> Duration {
        Duration::from_micros(self.execution_time_micros)
    }

    pub(crate) fn mark_ready(&mut self) {
        self.state = ProcessState::Ready;
        self.block_reason = None;
    }

    pub(crate) fn mark_running(&mut self, now: Timestamp) {
        self.state = ProcessState::Running;
        self.block_reason = None;
        self.last_dispatched_at = Some(now);
    }

    pub(crate) fn mark_blocked(&mut self, reason: String, now: Timestamp) {
        self.settle_execution(now);
        self.state = ProcessState::Blocked;
        self.block_reason = Some(reason);
    }

    pub(crate) fn mark_terminated(&mut self, now: Timestamp) {
        self.settle_execution(now);
        self.state = ProcessState::Terminated;
        self.block_reason = None;
    }

    fn settle_execution(&mut self, now: Timestamp) {
        if !self.is_running() {
            return;
        }
        if let Some(started) = self.last_dispatched_at {
            self.execution_time_micros += now.saturating_sub(started);
        }
    }
}

impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process[{}, {}, priority={}, state={}]",
            self.pid, self.name, self.priority, self.state
        )
    }
}

/// Scheduler statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub created: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub dispatched: u64,
    /// Running processes retired by a later dispatch
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub displaced: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub blocked: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub unblocked: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub terminated: u64,
    /// Processes not yet terminated
    #[serde(default, skip_serializing_if = "is_zero_usize")]
    pub live_processes: usize,
}

/// Consistent view of the whole scheduler, taken in one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerSnapshot {
    /// Every record ever created, by PID
    pub all: Vec<ProcessRecord>,
    /// Ready processes in dispatch order
    pub ready: Vec<ProcessRecord>,
    /// Blocked processes, oldest first
    pub blocked: Vec<ProcessRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running: Option<ProcessRecord>,
    pub stats: SchedulerStats,
}
