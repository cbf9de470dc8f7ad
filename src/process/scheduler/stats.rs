/*!
 * Scheduler Statistics
 * Track and report scheduler activity
 */

use super::Scheduler;
use crate::process::types::SchedulerStats;

impl Scheduler {
    /// Get scheduler statistics
    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// Number of processes not yet terminated
    pub fn live_processes(&self) -> usize {
        self.stats.live_processes
    }
}
