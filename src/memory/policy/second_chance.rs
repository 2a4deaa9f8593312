//! Second-Chance replacement policy (FIFO queue with use bits).
//!
//! Behaves like [`ClockPolicy`](super::ClockPolicy) but keeps an explicit
//! arrival queue: a frame whose bit is set is moved to the tail instead of
//! being passed by a hand.

use std::collections::VecDeque;

use crate::common::FrameId;

/// Arrival queue plus per-slot use bits.
#[derive(Debug, Clone)]
pub struct SecondChancePolicy {
    /// Occupied frames, oldest at the front.
    queue: VecDeque<FrameId>,
    use_bits: Vec<bool>,
}

impl SecondChancePolicy {
    /// Create a policy for `frames` slots, all bits clear.
    pub fn new(frames: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(frames),
            use_bits: vec![false; frames],
        }
    }

    /// Record a page loaded into an empty frame.
    pub fn record_arrival(&mut self, frame_id: FrameId) {
        self.queue.push_back(frame_id);
        self.use_bits[frame_id.0] = true;
    }

    /// Record a hit. The queue is not reordered.
    pub fn mark_used(&mut self, frame_id: FrameId) {
        self.use_bits[frame_id.0] = true;
    }

    /// Pop frames from the head until one with a clear bit turns up.
    ///
    /// Frames with a set bit are cleared and requeued at the tail. The victim
    /// is requeued too, with its bit set for the incoming page.
    pub fn replace(&mut self) -> FrameId {
        while let Some(frame_id) = self.queue.pop_front() {
            self.queue.push_back(frame_id);
            let bit = &mut self.use_bits[frame_id.0];
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return frame_id;
            }
        }
        // Unreachable while the table is full: every slot is queued
        FrameId(0)
    }

    /// Current use bits, by slot.
    pub fn use_bits(&self) -> &[bool] {
        &self.use_bits
    }
}
