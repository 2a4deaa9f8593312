//! Frame identifier type.

use std::fmt;

use serde::Serialize;

/// Identifies a slot in the frame table.
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<Option<PageRef>>`
/// 2. Direct indexing without casting: `slots[frame_id.0]`
/// 3. Policy side tables (use bits, queues) are indexed the same way
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert_eq!(frame_id.0, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The slot after this one on a clock face of `len` slots.
    #[inline]
    pub fn next_wrapping(self, len: usize) -> Self {
        FrameId((self.0 + 1) % len)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
