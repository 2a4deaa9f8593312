//! FrameTable - the ordered slots every policy mutates.
//!
//! A [`FrameTable`] is a row of frames, each either empty or holding one
//! page. Policies never keep pointers into it; their side tables (use bits,
//! queues, recency lists) refer to slots by [`FrameId`].

use crate::common::{FrameId, PageRef};

/// The simulated physical memory: an ordered array of optional page slots.
///
/// # Invariant
/// Occupied slots hold pairwise-distinct pages. The engine only writes a page
/// after [`FrameTable::find`] reported it absent, so the invariant holds by
/// construction; debug builds assert it on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<Option<PageRef>>,
}

impl FrameTable {
    /// Create a table of `frames` empty slots.
    pub fn new(frames: usize) -> Self {
        Self {
            slots: vec![None; frames],
        }
    }

    /// Number of slots (the current frame count).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table has no slots at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether every slot holds a page.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Slot currently holding `page`.
    pub fn find(&self, page: PageRef) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    /// Lowest-index empty slot.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Highest-index empty slot.
    pub fn last_empty(&self) -> Option<FrameId> {
        self.slots.iter().rposition(Option::is_none).map(FrameId::new)
    }

    /// Place `page` in `frame`, returning the previous occupant.
    pub fn set(&mut self, frame: FrameId, page: PageRef) -> Option<PageRef> {
        debug_assert!(
            self.find(page).map_or(true, |at| at == frame),
            "page {} already resident",
            page
        );
        self.slots[frame.0].replace(page)
    }

    /// Append an empty slot; its id is the old length.
    pub fn push_slot(&mut self) -> FrameId {
        self.slots.push(None);
        FrameId::new(self.slots.len() - 1)
    }

    /// Remove `frame` entirely. Slots above it shift down by one.
    ///
    /// Returns the page it held.
    pub fn remove_slot(&mut self, frame: FrameId) -> Option<PageRef> {
        self.slots.remove(frame.0)
    }

    /// Iterate `(FrameId, occupant)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, Option<PageRef>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (FrameId::new(i), *slot))
    }

    /// Iterate occupied slots in slot order.
    pub fn occupants(&self) -> impl Iterator<Item = (FrameId, PageRef)> + '_ {
        self.iter().filter_map(|(id, slot)| slot.map(|page| (id, page)))
    }

    /// Copy of the slots, for a trace record.
    pub fn snapshot(&self) -> Vec<Option<PageRef>> {
        self.slots.clone()
    }
}
