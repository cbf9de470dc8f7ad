/*!
 * Process Module
 * Process records, scheduling, and the front-ends that serialize access
 */

pub mod config;
pub mod manager;
pub mod manager_builder;
pub mod scheduler;
pub mod scheduler_task;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use config::SchedulerConfig;
pub use manager::ProcessManager;
pub use manager_builder::ProcessManagerBuilder;
pub use scheduler::Scheduler;
pub use scheduler_task::{SchedulerHandle, SchedulerTask};
pub use traits::ProcessLifecycle;
pub use types::{ProcessRecord, ProcessState, SchedulerSnapshot, SchedulerStats};
