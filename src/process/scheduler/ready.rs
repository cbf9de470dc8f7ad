/*!
 * Ready Queue
 * Priority-ordered set of ready processes (max-heap with FIFO tie-break)
 */

use super::entry::{precedence, ReadyEntry};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, Priority, Sequence};
use std::collections::BinaryHeap;

#[derive(Debug, Default)]
pub(crate) struct ReadySet {
    heap: BinaryHeap<ReadyEntry>,
    next_seq: Sequence,
}

impl ReadySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a process - O(log n)
    pub fn admit(&mut self, pid: Pid, priority: Priority) -> Sequence {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(ReadyEntry { pid, priority, seq });
        seq
    }

    /// Remove and return the entry that runs next - O(log n)
    pub fn extract_max(&mut self) -> SchedulerResult<ReadyEntry> {
        self.heap.pop().ok_or(SchedulerError::EmptyQueue)
    }

    /// Remove an arbitrary member - O(n) filter and heap rebuild
    pub fn remove(&mut self, pid: Pid) -> bool {
        let original_len = self.heap.len();
        self.heap.retain(|entry| entry.pid != pid);
        self.heap.len() < original_len
    }

    #[cfg(test)]
    pub fn contains(&self, pid: Pid) -> bool {
        self.heap.iter().any(|entry| entry.pid == pid)
    }

    /// Entries in dispatch order, without draining - O(n log n)
    pub fn ordered(&self) -> Vec<ReadyEntry> {
        let mut entries: Vec<ReadyEntry> = self.heap.iter().copied().collect();
        entries.sort_by(|a, b| precedence(b, a));
        entries
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
