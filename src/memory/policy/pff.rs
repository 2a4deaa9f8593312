//! PFF (Page-Fault-Frequency) replacement policy.
//!
//! Replacement itself is FIFO. What PFF adds is an adaptive frame count:
//! after every reference the cumulative fault rate `faults / references` is
//! compared with two thresholds.
//!
//! - rate above `upper_threshold`: one empty frame is appended
//! - rate below `lower_threshold`: one frame is removed
//!
//! The count never leaves `[min_frames, max_frames]`.

use tracing::debug;

use crate::common::{FrameId, PageRef, PffConfig};
use crate::memory::FrameTable;

use super::FifoPolicy;

/// Outcome of a frame-count adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    /// Frame count unchanged.
    None,
    /// One empty frame appended.
    Grew,
    /// One frame removed; carries the page it held, if any.
    Shrank(Option<PageRef>),
}

/// FIFO replacement with fault-rate driven resizing.
#[derive(Debug, Clone)]
pub struct PffPolicy {
    config: PffConfig,
    fifo: FifoPolicy,
    references: u64,
    faults: u64,
}

impl PffPolicy {
    /// Create a policy. `config` must already be validated.
    pub fn new(config: PffConfig) -> Self {
        Self {
            config,
            fifo: FifoPolicy::new(),
            references: 0,
            faults: 0,
        }
    }

    /// Record a page loaded into an empty frame.
    pub fn record_arrival(&mut self, frame_id: FrameId) {
        self.fifo.record_arrival(frame_id);
    }

    /// Pick the oldest frame as victim (see [`FifoPolicy::replace`]).
    pub fn replace(&mut self) -> FrameId {
        self.fifo.replace()
    }

    /// Cumulative fault rate so far (0.0 before the first reference).
    fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }

    /// Count one reference and resize `table` if the fault rate calls for it.
    ///
    /// Called after placement/eviction for the reference has been applied.
    /// When shrinking a full table the oldest resident page is discarded
    /// together with its slot; otherwise the highest empty slot goes.
    pub fn adjust(&mut self, table: &mut FrameTable, fault: bool) -> Resize {
        self.references += 1;
        if fault {
            self.faults += 1;
        }

        let rate = self.fault_rate();
        let frames = table.len();

        if rate > self.config.upper_threshold && frames < self.config.max_frames {
            let _ = table.push_slot();
            debug!(rate, frames = frames + 1, "PFF grew frame table");
            return Resize::Grew;
        }

        if rate < self.config.lower_threshold && frames > self.config.min_frames {
            let removed = if table.is_full() {
                self.fifo.pop_oldest()
            } else {
                table.last_empty()
            };
            let Some(frame_id) = removed else {
                return Resize::None;
            };

            let discarded = table.remove_slot(frame_id);
            self.fifo.forget_slot(frame_id);
            debug!(
                rate,
                frames = frames - 1,
                slot = frame_id.0,
                discarded = ?discarded,
                "PFF shrank frame table"
            );
            return Resize::Shrank(discarded);
        }

        Resize::None
    }
}
