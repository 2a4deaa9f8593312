//! Working-Set replacement policy.
//!
//! The working set is the set of pages referenced within the last `delta`
//! references. On a full-table fault, any resident page outside the working
//! set may go; the lowest slot holding one is chosen.

use std::collections::VecDeque;

use crate::common::{FrameId, PageRef};
use crate::memory::FrameTable;

/// Trailing reference window of length `delta`.
#[derive(Debug, Clone)]
pub struct WorkingSetPolicy {
    /// Most recent reference at the back. Duplicates are kept.
    window: VecDeque<PageRef>,
    delta: usize,
}

impl WorkingSetPolicy {
    /// Create a policy with window length `delta`.
    pub fn new(delta: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(delta + 1),
            delta,
        }
    }

    /// Slide the window over a new reference.
    ///
    /// Called for every reference, hit or fault, before the hit/fault
    /// decision, so the current reference is part of the working set.
    pub fn observe(&mut self, page: PageRef) {
        self.window.push_back(page);
        while self.window.len() > self.delta {
            self.window.pop_front();
        }
    }

    /// Whether `page` was referenced within the window.
    pub fn in_working_set(&self, page: PageRef) -> bool {
        self.window.contains(&page)
    }

    /// Choose the lowest slot whose page left the working set.
    ///
    /// When every resident page is still in the working set there is no good
    /// choice; slot 0 is evicted.
    pub fn select_victim(&self, table: &FrameTable) -> FrameId {
        table
            .occupants()
            .find(|&(_, page)| !self.in_working_set(page))
            .map_or(FrameId(0), |(frame_id, _)| frame_id)
    }
}
