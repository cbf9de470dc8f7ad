/*!
 * System Limits and Constants
 *
 * Centralized defaults for scheduler configuration.
 */

use crate::core::types::{Pid, Priority};

// =============================================================================
// PROCESS DEFAULTS
// =============================================================================

/// First PID handed out by a freshly constructed scheduler
pub const DEFAULT_FIRST_PID: Pid = 1;

/// Priority used when the caller does not supply one
pub const DEFAULT_PRIORITY: Priority = 0;

/// Block reason used when the caller does not supply one
pub const DEFAULT_BLOCK_REASON: &str = "I/O Operation";

// =============================================================================
// ACTOR LIMITS
// =============================================================================

/// Mailbox capacity of the scheduler task
/// Senders wait once this many requests are queued
pub const DEFAULT_ACTOR_CHANNEL_CAPACITY: usize = 64;

// =============================================================================
// ENVIRONMENT KEYS
// =============================================================================

pub const ENV_FIRST_PID: &str = "PROCSCHED_FIRST_PID";
pub const ENV_DEFAULT_PRIORITY: &str = "PROCSCHED_DEFAULT_PRIORITY";
pub const ENV_BLOCK_REASON: &str = "PROCSCHED_BLOCK_REASON";
pub const ENV_MAX_PROCESSES: &str = "PROCSCHED_MAX_PROCESSES";
pub const ENV_TRACE_JSON: &str = "PROCSCHED_TRACE_JSON";
