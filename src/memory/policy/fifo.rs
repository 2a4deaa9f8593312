//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts the frame whose page arrived first. Hits never reorder the queue.
//! The same queue drives victim selection for PFF, which additionally needs
//! to drop and renumber slots when its table shrinks.

use std::collections::VecDeque;

use crate::common::FrameId;

/// Arrival-ordered queue of occupied frames.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Frame IDs in arrival order (front = oldest).
    queue: VecDeque<FrameId>,
}

impl FifoPolicy {
    /// Create an empty FIFO queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Record that a page arrived in an empty frame.
    pub fn record_arrival(&mut self, frame_id: FrameId) {
        self.queue.push_back(frame_id);
    }

    /// Pick the oldest frame as victim.
    ///
    /// The victim is re-enqueued at the tail, since the page about to be
    /// written into it becomes the newest arrival.
    pub fn replace(&mut self) -> FrameId {
        // The queue holds every slot once the table is full
        let victim = self.queue.pop_front().unwrap_or(FrameId(0));
        self.queue.push_back(victim);
        victim
    }

    /// Remove and return the oldest frame without re-enqueueing it.
    pub fn pop_oldest(&mut self) -> Option<FrameId> {
        self.queue.pop_front()
    }

    /// Forget a slot that was removed from the table.
    ///
    /// Frames above `frame_id` move down one index, matching
    /// [`FrameTable::remove_slot`](crate::memory::FrameTable::remove_slot).
    pub fn forget_slot(&mut self, frame_id: FrameId) {
        self.queue.retain(|&f| f != frame_id);
        for f in self.queue.iter_mut() {
            if f.0 > frame_id.0 {
                f.0 -= 1;
            }
        }
    }
}
