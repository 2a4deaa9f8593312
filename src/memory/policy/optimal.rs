//! Optimal (Belady's MIN) replacement policy.
//!
//! Knows the whole reference string in advance and evicts the resident page
//! whose next use lies farthest in the future. Pages that are never used
//! again count as infinitely far away.

use crate::common::{FrameId, PageRef};
use crate::memory::FrameTable;

/// Index of the first occurrence of `page` in `future[from..until]`.
pub(super) fn next_use(future: &[PageRef], page: PageRef, from: usize, until: usize) -> Option<usize> {
    let until = until.min(future.len());
    if from >= until {
        return None;
    }
    future[from..until]
        .iter()
        .position(|&p| p == page)
        .map(|offset| from + offset)
}

/// Full-lookahead victim selection.
#[derive(Debug, Clone)]
pub struct OptimalPolicy {
    /// The complete reference string of the run.
    future: Vec<PageRef>,
}

impl OptimalPolicy {
    /// Create a policy over the run's complete reference string.
    pub fn new(references: &[PageRef]) -> Self {
        Self {
            future: references.to_vec(),
        }
    }

    /// Choose a victim while processing the reference at `position`.
    ///
    /// Next uses are searched strictly after `position`. The farthest one
    /// wins; equal distances (including "never again") go to the lowest slot.
    pub fn select_victim(&self, table: &FrameTable, position: usize) -> FrameId {
        let mut victim = FrameId(0);
        let mut farthest = None;

        for (frame_id, page) in table.occupants() {
            let distance =
                next_use(&self.future, page, position + 1, usize::MAX).unwrap_or(usize::MAX);
            if farthest.map_or(true, |best| distance > best) {
                farthest = Some(distance);
                victim = frame_id;
            }
        }

        victim
    }
}
