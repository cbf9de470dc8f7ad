/*!
 * Blocked Queue
 * FIFO of blocked processes, oldest first
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Pid;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub(crate) struct BlockedSet {
    queue: VecDeque<Pid>,
}

impl BlockedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail - O(1)
    pub fn append(&mut self, pid: Pid) {
        self.queue.push_back(pid);
    }

    /// Remove the head - O(1)
    pub fn pop_front(&mut self) -> SchedulerResult<Pid> {
        self.queue.pop_front().ok_or(SchedulerError::EmptyQueue)
    }

    /// Remove an arbitrary member - O(n)
    pub fn remove(&mut self, pid: Pid) -> bool {
        match self.queue.iter().position(|&queued| queued == pid) {
            Some(pos) => self.queue.remove(pos).is_some(),
            None => false,
        }
    }

    #[cfg(test)]
    pub fn contains(&self, pid: Pid) -> bool {
        self.queue.contains(&pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.queue.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
