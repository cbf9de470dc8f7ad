/*!
 * Process Manager Builder
 * Assembles configuration and clock into a scheduler and its front-ends
 */

use super::config::SchedulerConfig;
use super::manager::ProcessManager;
use super::scheduler::Scheduler;
use super::scheduler_task::SchedulerTask;
use crate::core::clock::{Clock, SystemClock};
use std::sync::Arc;
use tracing::info;

/// Builder for ProcessManager
pub struct ProcessManagerBuilder {
    config: SchedulerConfig,
    clock: Option<Arc<dyn Clock>>,
}

impl ProcessManagerBuilder {
    /// Create a new ProcessManager builder
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            clock: None,
        }
    }

    /// Use explicit configuration
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from the environment
    pub fn with_env_config(mut self) -> Self {
        self.config = SchedulerConfig::from_env();
        self
    }

    /// Inject the timestamp source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build a bare scheduler
    pub fn build_scheduler(self) -> Scheduler {
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::new()) as Arc<dyn Clock>);
        Scheduler::with_config(self.config, clock)
    }

    /// Build the lock-serialized ProcessManager
    pub fn build(self) -> ProcessManager {
        let manager = ProcessManager::from_scheduler(self.build_scheduler());
        info!("Process manager initialized");
        manager
    }

    /// Spawn the scheduler as a task on the current tokio runtime
    pub fn spawn_task(self) -> SchedulerTask {
        let capacity = self.config.actor_channel_capacity;
        SchedulerTask::spawn(self.build_scheduler(), capacity)
    }
}

impl Default for ProcessManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
