/*!
 * Scheduler Configuration
 *
 * Defaults and environment overrides for a scheduler instance.
 */

use crate::core::limits::{
    DEFAULT_ACTOR_CHANNEL_CAPACITY, DEFAULT_BLOCK_REASON, DEFAULT_FIRST_PID, DEFAULT_PRIORITY,
    ENV_BLOCK_REASON, ENV_DEFAULT_PRIORITY, ENV_FIRST_PID, ENV_MAX_PROCESSES,
};
use crate::core::types::{Pid, Priority};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// Configuration for a scheduler instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// First PID handed out (default: 1)
    pub first_pid: Pid,

    /// Priority for `create_process_default` (default: 0)
    pub default_priority: Priority,

    /// Reason for `block_default` (default: "I/O Operation")
    pub default_block_reason: String,

    /// Cap on live (non-terminated) processes (default: unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_processes: Option<usize>,

    /// Mailbox size of the scheduler task (default: 64)
    pub actor_channel_capacity: usize,
}

impl SchedulerConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self {
            first_pid: DEFAULT_FIRST_PID,
            default_priority: DEFAULT_PRIORITY,
            default_block_reason: DEFAULT_BLOCK_REASON.to_string(),
            max_processes: None,
            actor_channel_capacity: DEFAULT_ACTOR_CHANNEL_CAPACITY,
        }
    }

    /// Create configuration from `PROCSCHED_*` environment variables,
    /// falling back to defaults for anything missing or unparsable
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::new();
        Self {
            first_pid: parse_or(&lookup, ENV_FIRST_PID, defaults.first_pid),
            default_priority: parse_or(&lookup, ENV_DEFAULT_PRIORITY, defaults.default_priority),
            default_block_reason: lookup(ENV_BLOCK_REASON)
                .filter(|reason| !reason.trim().is_empty())
                .unwrap_or(defaults.default_block_reason),
            max_processes: lookup(ENV_MAX_PROCESSES).and_then(|raw| match raw.trim().parse() {
                Ok(limit) => Some(limit),
                Err(_) => {
                    warn!(key = ENV_MAX_PROCESSES, value = %raw, "Ignoring unparsable value");
                    None
                }
            }),
            actor_channel_capacity: defaults.actor_channel_capacity,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_first_pid(mut self, first_pid: Pid) -> Self {
        self.first_pid = first_pid;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_default_block_reason(mut self, reason: impl Into<String>) -> Self {
        self.default_block_reason = reason.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_max_processes(mut self, limit: usize) -> Self {
        self.max_processes = Some(limit);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_actor_channel_capacity(mut self, capacity: usize) -> Self {
        self.actor_channel_capacity = capacity.max(1);
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparsable value");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.first_pid, 1);
        assert_eq!(config.default_priority, 0);
        assert_eq!(config.default_block_reason, "I/O Operation");
        assert_eq!(config.max_processes, None);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = SchedulerConfig::from_lookup(lookup_from(&[
            ("PROCSCHED_FIRST_PID", "100"),
            ("PROCSCHED_DEFAULT_PRIORITY", "-3"),
            ("PROCSCHED_BLOCK_REASON", "disk"),
            ("PROCSCHED_MAX_PROCESSES", "8"),
        ]));
        assert_eq!(config.first_pid, 100);
        assert_eq!(config.default_priority, -3);
        assert_eq!(config.default_block_reason, "disk");
        assert_eq!(config.max_processes, Some(8));
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = SchedulerConfig::from_lookup(lookup_from(&[
            ("PROCSCHED_FIRST_PID", "zero"),
            ("PROCSCHED_BLOCK_REASON", "   "),
            ("PROCSCHED_MAX_PROCESSES", "lots"),
        ]));
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let config = SchedulerConfig::from_lookup(lookup_from(&[
            ("PROCSCHED_FIRST_PID", " 10 "),
            ("PROCSCHED_MAX_PROCESSES", " 16\n"),
        ]));
        assert_eq!(config.first_pid, 10);
        assert_eq!(config.max_processes, Some(16));
    }
}
