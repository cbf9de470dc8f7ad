/*!
 * Scheduler Core Operations
 * Create, dispatch, block, unblock, and terminate
 */

use super::Scheduler;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, Priority};
use crate::process::types::{ProcessRecord, ProcessState};
use tracing::{debug, info, warn};

impl Scheduler {
    /// Create a process and admit it to the ready queue
    pub fn create_process(
        &mut self,
        name: impl Into<String>,
        priority: Priority,
    ) -> SchedulerResult<ProcessRecord> {
        if let Some(limit) = self.config.max_processes {
            let live = self.stats.live_processes;
            if live >= limit {
                warn!(live, limit, "Process creation rejected: limit reached");
                return Err(SchedulerError::LimitReached { live, limit });
            }
        }

        let pid = self.next_pid;
        let next_pid = pid.checked_add(1).ok_or_else(|| {
            warn!(pid, "Process creation rejected: PID space exhausted");
            SchedulerError::PidExhausted
        })?;
        self.next_pid = next_pid;

        let record = ProcessRecord::new(pid, name.into(), priority, self.clock.now());
        info!(pid, name = %record.name, priority, "Process created");
        self.registry.insert(pid, record);

        self.stats.created += 1;
        self.stats.live_processes += 1;

        self.make_ready(pid)
    }

    /// Create a process with the configured default priority
    pub fn create_process_default(
        &mut self,
        name: impl Into<String>,
    ) -> SchedulerResult<ProcessRecord> {
        let priority = self.config.default_priority;
        self.create_process(name, priority)
    }

    /// Move the highest-priority ready process into the running slot.
    ///
    /// Ties go to the process admitted earliest. A process still running
    /// when the next one is selected has had its turn: it is retired as
    /// terminated and never re-enters the ready queue.
    pub fn dispatch(&mut self) -> SchedulerResult<ProcessRecord> {
        let next = match self.ready.extract_max() {
            Ok(entry) => entry,
            Err(e) => {
                debug!("No process ready for dispatch");
                return Err(e);
            }
        };
        let now = self.clock.now();

        if let Some(previous) = self.running.take() {
            if let Some(record) = self.registry.get_mut(&previous) {
                record.mark_terminated(now);
                self.stats.terminated += 1;
                self.stats.live_processes -= 1;
                info!(
                    pid = previous,
                    execution_us = record.execution_time_micros,
                    "Displaced process retired"
                );
            }
            self.stats.displaced += 1;
        }

        let record = self
            .registry
            .get_mut(&next.pid)
            .ok_or(SchedulerError::UnknownProcess(next.pid))?;
        record.mark_running(now);
        self.running = Some(next.pid);
        self.stats.dispatched += 1;

        info!(
            pid = next.pid,
            name = %record.name,
            priority = next.priority,
            "Process dispatched"
        );
        Ok(record.clone())
    }

    /// Block the running process and append it to the blocked queue
    pub fn block(&mut self, pid: Pid, reason: impl Into<String>) -> SchedulerResult<ProcessRecord> {
        if self.running != Some(pid) {
            warn!(pid, running = ?self.running, "Block rejected: process is not running");
            return Err(SchedulerError::NotRunning {
                pid,
                running: self.running,
            });
        }

        let now = self.clock.now();
        let record = self
            .registry
            .get_mut(&pid)
            .ok_or(SchedulerError::UnknownProcess(pid))?;
        record.mark_blocked(reason.into(), now);
        self.running = None;
        self.blocked.append(pid);
        self.stats.blocked += 1;

        info!(pid, reason = ?record.block_reason, "Process blocked");
        Ok(record.clone())
    }

    /// Block the running process with the configured default reason
    pub fn block_default(&mut self, pid: Pid) -> SchedulerResult<ProcessRecord> {
        let reason = self.config.default_block_reason.clone();
        self.block(pid, reason)
    }

    /// Re-admit the longest-blocked process with its original priority
    pub fn unblock(&mut self) -> SchedulerResult<ProcessRecord> {
        let pid = self.blocked.pop_front().map_err(|_| {
            debug!("No blocked process to unblock");
            SchedulerError::NothingBlocked
        })?;

        self.stats.unblocked += 1;
        info!(pid, "Process unblocked");
        self.make_ready(pid)
    }

    /// Terminate a process.
    ///
    /// `None` targets the running process. An explicit PID is purged from
    /// whichever queue holds it, whatever its state.
    pub fn terminate(&mut self, pid: Option<Pid>) -> SchedulerResult<ProcessRecord> {
        let pid = match pid {
            Some(pid) => pid,
            None => self.running.ok_or_else(|| {
                debug!("Terminate rejected: nothing running");
                SchedulerError::NothingRunning
            })?,
        };

        let state = self
            .registry
            .get(&pid)
            .map(|record| record.state)
            .ok_or(SchedulerError::UnknownProcess(pid))?;

        match state {
            ProcessState::Terminated => {
                warn!(pid, "Process already terminated");
                return Err(SchedulerError::AlreadyTerminated(pid));
            }
            ProcessState::Running => self.running = None,
            ProcessState::Ready => {
                self.ready.remove(pid);
            }
            ProcessState::Blocked => {
                self.blocked.remove(pid);
            }
            ProcessState::New => {}
        }

        let now = self.clock.now();
        let record = self
            .registry
            .get_mut(&pid)
            .ok_or(SchedulerError::UnknownProcess(pid))?;
        record.mark_terminated(now);
        self.stats.terminated += 1;
        self.stats.live_processes -= 1;

        info!(
            pid,
            name = %record.name,
            from = %state,
            execution_us = record.execution_time_micros,
            "Process terminated"
        );
        Ok(record.clone())
    }

    /// Terminate the running process
    pub fn terminate_running(&mut self) -> SchedulerResult<ProcessRecord> {
        self.terminate(None)
    }

    /// Dispatch and terminate ready processes until the ready queue is
    /// empty, returning PIDs in the order they ran
    pub fn run_to_completion(&mut self) -> SchedulerResult<Vec<Pid>> {
        let mut order = Vec::with_capacity(self.ready.len());
        loop {
            let pid = match self.dispatch() {
                Ok(record) => record.pid,
                Err(SchedulerError::EmptyQueue) => break,
                Err(e) => return Err(e),
            };
            self.terminate(Some(pid))?;
            order.push(pid);
        }
        info!(completed = order.len(), "Ready queue drained");
        Ok(order)
    }

    /// Mark a registered process ready and admit it
    fn make_ready(&mut self, pid: Pid) -> SchedulerResult<ProcessRecord> {
        let record = self
            .registry
            .get_mut(&pid)
            .ok_or(SchedulerError::UnknownProcess(pid))?;
        record.mark_ready();
        let seq = self.ready.admit(pid, record.priority);

        debug!(pid, priority = record.priority, seq, "Process admitted to ready queue");
        Ok(record.clone())
    }
}
