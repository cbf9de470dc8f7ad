/*!
 * Process Scheduler
 * Lifecycle state machine over a priority ready queue, a FIFO blocked
 * queue, a process registry, and a single running slot
 */

use super::config::SchedulerConfig;
use super::types::{ProcessRecord, SchedulerStats};
use crate::core::clock::{Clock, SystemClock};
use crate::core::types::Pid;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::info;

mod blocked;
mod entry;
mod listing;
mod operations;
mod ready;
mod stats;

use blocked::BlockedSet;
use ready::ReadySet;

/// Process scheduler
///
/// Single-owner state machine: every operation takes `&mut self` and either
/// applies completely or returns an error without touching any state.
/// Share it across threads through [`crate::process::ProcessManager`] or
/// the [`crate::process::SchedulerTask`] actor.
///
/// # Invariants
/// - At most one record is `Running`, and it is the one in `running`
/// - A PID lives in at most one of `ready`, `blocked`, `running`
/// - Terminated records stay in `registry` and never re-enter a queue
pub struct Scheduler {
    config: SchedulerConfig,
    clock: Arc<dyn Clock>,

    // Authoritative store, never shrinks
    registry: BTreeMap<Pid, ProcessRecord>,

    ready: ReadySet,
    blocked: BlockedSet,
    running: Option<Pid>,

    // PID counter: seeded from config once, advanced only by create_process
    next_pid: Pid,

    stats: SchedulerStats,
}

impl Scheduler {
    /// Create scheduler with default configuration and the system clock
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default(), Arc::new(SystemClock::new()))
    }

    /// Create scheduler with explicit configuration and clock
    pub fn with_config(config: SchedulerConfig, clock: Arc<dyn Clock>) -> Self {
        info!(
            first_pid = config.first_pid,
            max_processes = ?config.max_processes,
            "Scheduler initialized"
        );

        Self {
            next_pid: config.first_pid,
            config,
            clock,
            registry: BTreeMap::new(),
            ready: ReadySet::new(),
            blocked: BlockedSet::new(),
            running: None,
            stats: SchedulerStats::default(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("processes", &self.registry.len())
            .field("ready", &self.ready.len())
            .field("blocked", &self.blocked.len())
            .field("running", &self.running)
            .field("next_pid", &self.next_pid)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::errors::SchedulerError;
    use crate::process::types::ProcessState;
    use std::time::Duration;

    fn scheduler() -> Scheduler {
        Scheduler::with_config(SchedulerConfig::default(), Arc::new(ManualClock::new(0)))
    }

    #[test]
    fn test_create_admits_immediately() {
        let mut s = scheduler();
        let p = s.create_process("app", 5).unwrap();
        assert_eq!(p.pid, 1);
        assert_eq!(p.state, ProcessState::Ready);
        assert_eq!(s.ready_len(), 1);
    }

    #[test]
    fn test_first_pid_from_config() {
        let config = SchedulerConfig::default().with_first_pid(500);
        let mut s = Scheduler::with_config(config, Arc::new(ManualClock::new(0)));
        assert_eq!(s.create_process("a", 0).unwrap().pid, 500);
        assert_eq!(s.create_process("b", 0).unwrap().pid, 501);
    }

    #[test]
    fn test_dispatch_empty() {
        let mut s = scheduler();
        assert_eq!(s.dispatch(), Err(SchedulerError::EmptyQueue));
        assert_eq!(s.running(), None);
    }

    #[test]
    fn test_block_requires_running() {
        let mut s = scheduler();
        let p = s.create_process("app", 1).unwrap();
        assert_eq!(
            s.block(p.pid, "io"),
            Err(SchedulerError::NotRunning {
                pid: p.pid,
                running: None
            })
        );
        assert_eq!(s.inspect(p.pid).unwrap().state, ProcessState::Ready);
    }

    #[test]
    fn test_terminate_running_without_pid() {
        let mut s = scheduler();
        assert_eq!(s.terminate(None), Err(SchedulerError::NothingRunning));

        let p = s.create_process("app", 1).unwrap();
        s.dispatch().unwrap();
        let done = s.terminate(None).unwrap();
        assert_eq!(done.pid, p.pid);
        assert_eq!(done.state, ProcessState::Terminated);
        assert_eq!(s.running(), None);
    }

    #[test]
    fn test_execution_time_uses_injected_clock() {
        let clock = Arc::new(ManualClock::new(1_000));
        let mut s = Scheduler::with_config(SchedulerConfig::default(), clock.clone());
        let p = s.create_process("app", 1).unwrap();
        assert_eq!(p.created_at, 1_000);

        s.dispatch().unwrap();
        clock.advance(Duration::from_micros(40));
        s.block(p.pid, "io").unwrap();
        clock.advance(Duration::from_micros(1_000));
        s.unblock().unwrap();
        s.dispatch().unwrap();
        clock.advance(Duration::from_micros(2));
        let done = s.terminate(None).unwrap();

        assert_eq!(done.execution_time_micros, 42);
    }

    #[test]
    fn test_debug_summary() {
        let mut s = scheduler();
        s.create_process("a", 1).unwrap();
        let debug = format!("{:?}", s);
        assert!(debug.contains("ready: 1"));
    }
}
