//! VMIN replacement policy (windowed lookahead).
//!
//! Like Optimal, but only the next `horizon` references are visible. A page
//! that does not show up in that window is evicted on sight.

use crate::common::{FrameId, PageRef};
use crate::memory::FrameTable;

use super::optimal::next_use;

/// Bounded-lookahead victim selection.
#[derive(Debug, Clone)]
pub struct VminPolicy {
    future: Vec<PageRef>,
    horizon: usize,
}

impl VminPolicy {
    /// Create a policy over the run's reference string.
    ///
    /// `horizon` must already be resolved (non-zero).
    pub fn new(references: &[PageRef], horizon: usize) -> Self {
        Self {
            future: references.to_vec(),
            horizon,
        }
    }

    /// The lookahead window length.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Choose a victim while processing the reference at `position`.
    ///
    /// The window covers `position + 1 ..= position + horizon`. Slots are
    /// scanned in increasing order; the first page absent from the window is
    /// returned at once. Otherwise the farthest next use wins, ties to the
    /// lowest slot.
    pub fn select_victim(&self, table: &FrameTable, position: usize) -> FrameId {
        let from = position + 1;
        let until = from.saturating_add(self.horizon);

        let mut victim = FrameId(0);
        let mut farthest = None;

        for (frame_id, page) in table.occupants() {
            match next_use(&self.future, page, from, until) {
                None => return frame_id,
                Some(distance) => {
                    if farthest.map_or(true, |best| distance > best) {
                        farthest = Some(distance);
                        victim = frame_id;
                    }
                }
            }
        }

        victim
    }
}
