//=========================================================================
// Timer Queue
//=========================================================================
//
// Delayed manager mutations waiting for their due time.
//
// Architecture:
//   dispatch() ─schedule(due, m)─► BTreeMap<(due, seq), PendingMutation>
//   Session::tick(now) ─drain_due(now)─► Vec<PendingMutation> ─► Managers::apply
//
// Entries fire in due-time order; entries due at the same instant fire in
// the order they were scheduled. Nothing is ever cancelled: a newer event
// does not replace an older pending mutation on the same manager.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::managers::PendingMutation;

//=== TimerQueue ==========================================================

/// Pending delayed mutations keyed by due time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: BTreeMap<(u64, u64), PendingMutation>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a mutation to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, mutation: PendingMutation) {
        trace!(target: "events", "Scheduling {:?} at {}ms", mutation, due_ms);
        self.entries.insert((due_ms, self.next_seq), mutation);
        self.next_seq += 1;
    }

    /// Removes and returns every mutation due at or before `now_ms`.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<PendingMutation> {
        // Keys strictly greater than (now, u64::MAX) are still pending.
        let pending = match now_ms.checked_add(1) {
            Some(next) => self.entries.split_off(&(next, 0)),
            None => BTreeMap::new(),
        };
        let due = std::mem::replace(&mut self.entries, pending);
        due.into_values().collect()
    }

    /// Due time of the earliest pending mutation.
    pub fn next_due(&self) -> Option<u64> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
