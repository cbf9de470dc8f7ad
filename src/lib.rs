/*!
 * Process Scheduler Kernel Library
 * Process lifecycle scheduling exposed as a library
 */

pub mod core;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::{
    Clock, ManualClock, Pid, Priority, SchedulerError, SchedulerResult, SystemClock, Timestamp,
};
pub use monitoring::init_tracing;
pub use process::{
    ProcessLifecycle, ProcessManager, ProcessManagerBuilder, ProcessRecord, ProcessState,
    Scheduler, SchedulerConfig, SchedulerHandle, SchedulerSnapshot, SchedulerStats, SchedulerTask,
};
