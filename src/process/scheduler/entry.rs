/*!
 * Scheduler Entry Types
 * Ready queue entries and the ordering that decides who runs next
 */

use crate::core::types::{Pid, Priority, Sequence};
use std::cmp::Ordering;

/// Ready queue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReadyEntry {
    pub pid: Pid,
    pub priority: Priority,
    /// Admission order, strictly increasing per ready queue
    pub seq: Sequence,
}

/// Dispatch precedence between two ready entries.
///
/// `Greater` means `lhs` runs first: higher priority wins, and on equal
/// priority the entry admitted earlier (smaller sequence) wins.
#[inline]
pub(crate) fn precedence(lhs: &ReadyEntry, rhs: &ReadyEntry) -> Ordering {
    lhs.priority
        .cmp(&rhs.priority)
        .then_with(|| rhs.seq.cmp(&lhs.seq))
}

// BinaryHeap is a max-heap; route its ordering through `precedence`
impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        precedence(self, other)
    }
}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
