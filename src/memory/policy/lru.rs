//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use crate::common::FrameId;

/// Recency list of occupied frames.
///
/// The front is the least recently used frame, the back the most recent.
/// Frame tables in this simulator are small, so moving an entry is a linear
/// scan of the list.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    recency: VecDeque<FrameId>,
}

impl LruPolicy {
    /// Create an empty recency list.
    pub fn new() -> Self {
        Self {
            recency: VecDeque::new(),
        }
    }

    /// Record a page loaded into an empty frame.
    pub fn record_arrival(&mut self, frame_id: FrameId) {
        self.recency.push_back(frame_id);
    }

    /// Record a hit: the frame becomes the most recently used.
    pub fn touch(&mut self, frame_id: FrameId) {
        if let Some(pos) = self.recency.iter().position(|&f| f == frame_id) {
            self.recency.remove(pos);
        }
        self.recency.push_back(frame_id);
    }

    /// Pick the least recently used frame as victim.
    ///
    /// The victim moves to the most-recent end for its new occupant.
    pub fn replace(&mut self) -> FrameId {
        // Every slot is on the list once the table is full
        let victim = self.recency.pop_front().unwrap_or(FrameId(0));
        self.recency.push_back(victim);
        victim
    }
}
