//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (policy selection and parameters)
//! - Error types
//! - Identifiers (PageRef, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_ref;

pub use config::{PffConfig, PolicyConfig, PolicyKind};
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_ref::{parse_references, PageRef};
