/*!
 * Process Management
 * Thread-safe handle serializing every scheduler operation through one lock
 */

use super::manager_builder::ProcessManagerBuilder;
use super::scheduler::Scheduler;
use super::traits::ProcessLifecycle;
use super::types::{ProcessRecord, SchedulerSnapshot, SchedulerStats};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, Priority};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared process manager
///
/// Cloning yields another handle to the same scheduler. Mutations and
/// listings all take the same lock, so readers never see a half-applied
/// transition.
#[derive(Clone)]
pub struct ProcessManager {
    scheduler: Arc<Mutex<Scheduler>>,
}

impl ProcessManager {
    /// Create a ProcessManager with default configuration
    pub fn new() -> Self {
        Self::from_scheduler(Scheduler::new())
    }

    /// Create a builder for constructing a ProcessManager
    pub fn builder() -> ProcessManagerBuilder {
        ProcessManagerBuilder::new()
    }

    pub fn from_scheduler(scheduler: Scheduler) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
        }
    }

    pub fn create_process(
        &self,
        name: impl Into<String>,
        priority: Priority,
    ) -> SchedulerResult<ProcessRecord> {
        self.scheduler.lock().create_process(name, priority)
    }

    pub fn create_process_default(&self, name: impl Into<String>) -> SchedulerResult<ProcessRecord> {
        self.scheduler.lock().create_process_default(name)
    }

    pub fn dispatch(&self) -> SchedulerResult<ProcessRecord> {
        self.scheduler.lock().dispatch()
    }

    pub fn block(&self, pid: Pid, reason: impl Into<String>) -> SchedulerResult<ProcessRecord> {
        self.scheduler.lock().block(pid, reason)
    }

    pub fn block_default(&self, pid: Pid) -> SchedulerResult<ProcessRecord> {
        self.scheduler.lock().block_default(pid)
    }

    pub fn unblock(&self) -> SchedulerResult<ProcessRecord> {
        self.scheduler.lock().unblock()
    }

    pub fn terminate(&self, pid: Option<Pid>) -> SchedulerResult<ProcessRecord> {
        self.scheduler.lock().terminate(pid)
    }

    pub fn run_to_completion(&self) -> SchedulerResult<Vec<Pid>> {
        self.scheduler.lock().run_to_completion()
    }

    pub fn inspect(&self, pid: Pid) -> SchedulerResult<ProcessRecord> {
        self.scheduler.lock().inspect(pid)
    }

    pub fn list_all(&self) -> Vec<ProcessRecord> {
        self.scheduler.lock().list_all()
    }

    pub fn list_ready(&self) -> Vec<ProcessRecord> {
        self.scheduler.lock().list_ready()
    }

    pub fn list_blocked(&self) -> Vec<ProcessRecord> {
        self.scheduler.lock().list_blocked()
    }

    pub fn running(&self) -> Option<ProcessRecord> {
        self.scheduler.lock().running()
    }

    pub fn stats(&self) -> SchedulerStats {
        self.scheduler.lock().stats()
    }

    pub fn snapshot(&self) -> SchedulerSnapshot {
        self.scheduler.lock().snapshot()
    }

    /// Run several operations as one atomic step
    pub fn with_scheduler<R>(&self, f: impl FnOnce(&mut Scheduler) -> R) -> R {
        f(&mut self.scheduler.lock())
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLifecycle for ProcessManager {
    fn create(&self, name: &str, priority: Priority) -> SchedulerResult<Pid> {
        self.create_process(name, priority).map(|record| record.pid)
    }

    fn terminate_process(&self, pid: Pid) -> SchedulerResult<()> {
        self.terminate(Some(pid)).map(|_| ())
    }

    fn exists(&self, pid: Pid) -> bool {
        !matches!(self.inspect(pid), Err(SchedulerError::UnknownProcess(_)))
    }

    fn get_process(&self, pid: Pid) -> Option<ProcessRecord> {
        self.inspect(pid).ok()
    }

    fn list_processes(&self) -> Vec<ProcessRecord> {
        self.list_all()
    }
}
