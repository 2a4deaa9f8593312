//! pagesim - a page-replacement simulator with replayable traces.
//!
//! Given a reference string and a policy configuration, pagesim computes for
//! every reference whether it hits or faults, which frame changed, which page
//! was evicted, and the full frame table afterwards.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Driver (simulator)                        │   │
//! │  │        Simulation / simulate / simulate_all              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Memory (memory/)                          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Policies: FIFO | LRU | Clock | Second-Chance   │   │   │
//! │  │   │      Optimal | VMIN | Working-Set | PFF         │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │          PolicyEngine + FrameTable + FaultStats          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Trace (trace/)                            │   │
//! │  │     StepRecord → TraceRecorder → SimulationTrace         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageRef, FrameId, Error, config)
//! - [`memory`] - Frame table and replacement policies
//! - [`trace`] - Step records and the finished trace
//! - [`simulator`] - The run driver
//!
//! # Quick Start
//! ```
//! use pagesim::{parse_references, simulate, PolicyConfig};
//!
//! let refs = parse_references("A, B, C, A, B, D, A, B, C, D").unwrap();
//! let trace = simulate(&PolicyConfig::Fifo { frames: 3 }, &refs).unwrap();
//!
//! assert_eq!(trace.total_faults(), 8);
//! assert_eq!(trace.total_hits(), 2);
//! ```

pub mod common;
pub mod memory;
pub mod simulator;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_VMIN_HORIZON;
pub use common::{
    parse_references, Error, FrameId, PageRef, PffConfig, PolicyConfig, PolicyKind, Result,
};

pub use memory::{FaultStats, FrameTable, PolicyEngine};
pub use simulator::{simulate, simulate_all, Simulation};
pub use trace::{PolicyExtras, SimulationTrace, StepRecord, TraceRecorder};
