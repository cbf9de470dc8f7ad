/*!
 * Core Types
 * Common types used across the scheduler
 */

/// Process ID type
pub type Pid = u32;

/// Priority level (higher is more important, negative values allowed)
pub type Priority = i32;

/// Timestamp in microseconds, as reported by the injected clock
pub type Timestamp = u64;

/// Admission sequence number used to break priority ties in the ready queue
pub type Sequence = u64;
