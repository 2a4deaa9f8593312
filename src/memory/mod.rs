//! Simulated memory: the frame table and the policies that manage it.
//!
//! # Components
//! - [`FrameTable`] - Ordered slots, each holding at most one page
//! - [`PolicyEngine`] - A replacement policy bound to its frame table
//! - [`FaultStats`] - Hit/fault counters
//! - [`policy`] - The eight replacement policies

mod frame_table;
pub mod policy;
mod stats;

pub use frame_table::FrameTable;
pub use policy::{Policy, PolicyEngine};
pub use stats::FaultStats;
