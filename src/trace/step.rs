//! One row of a simulation trace.

use std::fmt;

use serde::Serialize;

use crate::common::{FrameId, PageRef};

/// Policy-specific annotations attached to a step.
///
/// Only the use-bit policies carry extras; renderers draw the bits next to
/// the frames and, for Clock, the hand position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyExtras {
    Clock {
        use_bits: Vec<bool>,
        /// Hand position after the step.
        pointer: FrameId,
    },
    SecondChance {
        use_bits: Vec<bool>,
    },
}

impl PolicyExtras {
    /// Use bits by slot.
    pub fn use_bits(&self) -> &[bool] {
        match self {
            PolicyExtras::Clock { use_bits, .. } | PolicyExtras::SecondChance { use_bits } => {
                use_bits
            }
        }
    }

    /// Clock hand position, if this is a Clock step.
    pub fn pointer(&self) -> Option<FrameId> {
        match self {
            PolicyExtras::Clock { pointer, .. } => Some(*pointer),
            PolicyExtras::SecondChance { .. } => None,
        }
    }
}

/// The state of the simulation after one reference.
///
/// Record 0 of every trace is the initial, all-empty state: it has no page,
/// is not a fault and changed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 0 for the initial state, `n` for the n-th reference.
    pub index: usize,

    /// The referenced page (`None` only for the initial state).
    pub page: Option<PageRef>,

    /// Whether the page had to be loaded.
    pub fault: bool,

    /// Slot filled or overwritten by a fault, after any resize of the step.
    pub changed: Option<FrameId>,

    /// Page displaced from `changed` to make room, if any.
    pub evicted: Option<PageRef>,

    /// Page dropped together with its slot when PFF shrank the table.
    pub discarded: Option<PageRef>,

    /// Frame contents after the step.
    pub frames: Vec<Option<PageRef>>,

    /// Use bits / clock hand for Clock and Second-Chance.
    pub extras: Option<PolicyExtras>,
}

impl StepRecord {
    /// The initial record for a table of `frames` empty slots.
    pub fn initial(frames: usize, extras: Option<PolicyExtras>) -> Self {
        Self {
            index: 0,
            page: None,
            fault: false,
            changed: None,
            evicted: None,
            discarded: None,
            frames: vec![None; frames],
            extras,
        }
    }

    /// Whether this is the initial-state record.
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.page.is_none()
    }

    /// Whether the reference was a hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.page.is_some() && !self.fault
    }

    /// Frame count after the step.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Caption for the row, e.g. `"Step 4: A (hit)"`.
    pub fn label(&self) -> String {
        match self.page {
            None => "Initial state".to_string(),
            Some(page) => format!(
                "Step {}: {} ({})",
                self.index,
                page,
                if self.fault { "fault" } else { "hit" }
            ),
        }
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), format_frames(&self.frames))
    }
}

/// Render frame contents as `"A | B | -"`.
pub fn format_frames(frames: &[Option<PageRef>]) -> String {
    frames
        .iter()
        .map(|slot| slot.map_or_else(|| "-".to_string(), |page| page.to_string()))
        .collect::<Vec<_>>()
        .join(" | ")
}
