//! CLOCK replacement policy (second chance by pointer sweep).
//!
//! Frames sit on a circular dial with one use bit each. The hand sweeps from
//! its current position: a set bit is cleared and skipped, the first clear
//! bit marks the victim.
//!
//! ```text
//!        hand
//!         ↓
//!   [A:1] [B:1] [C:0]     fault on D:
//!                           A 1→0, advance
//!                           B 1→0, advance
//!                           C is 0 → evict, hand moves past C
//! ```

use crate::common::FrameId;

/// Use bits plus the clock hand.
#[derive(Debug, Clone)]
pub struct ClockPolicy {
    use_bits: Vec<bool>,
    hand: FrameId,
}

impl ClockPolicy {
    /// Create a dial of `frames` slots, all bits clear, hand at slot 0.
    pub fn new(frames: usize) -> Self {
        Self {
            use_bits: vec![false; frames],
            hand: FrameId(0),
        }
    }

    /// Set the use bit of `frame_id`. Used for hits and for fills of empty
    /// frames; the hand does not move.
    pub fn mark_used(&mut self, frame_id: FrameId) {
        self.use_bits[frame_id.0] = true;
    }

    /// Sweep for a victim.
    ///
    /// On return the victim's bit is set (for its new occupant) and the hand
    /// points one past it. At most one full revolution of clears happens
    /// before a clear bit is found.
    pub fn replace(&mut self) -> FrameId {
        let len = self.use_bits.len();
        loop {
            let current = self.hand;
            self.hand = current.next_wrapping(len);

            if self.use_bits[current.0] {
                self.use_bits[current.0] = false;
            } else {
                self.use_bits[current.0] = true;
                return current;
            }
        }
    }

    /// Current use bits, by slot.
    pub fn use_bits(&self) -> &[bool] {
        &self.use_bits
    }

    /// Slot the hand points at.
    pub fn hand(&self) -> FrameId {
        self.hand
    }
}
