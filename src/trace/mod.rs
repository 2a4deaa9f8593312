//! Simulation traces.
//!
//! A trace is the complete, replayable record of one run: the initial empty
//! state followed by one [`StepRecord`] per reference.
//!
//! # Components
//! - [`StepRecord`] - State after one reference
//! - [`PolicyExtras`] - Use bits / clock hand for the use-bit policies
//! - [`TraceRecorder`] - Builds a trace step by step
//! - [`SimulationTrace`] - The sealed, read-only result

mod recorder;
mod step;

pub use recorder::TraceRecorder;
pub use step::{format_frames, PolicyExtras, StepRecord};

use serde::Serialize;

use crate::common::{PageRef, PolicyKind, Result};
use crate::memory::FaultStats;

/// The finished output of a simulation run.
///
/// Immutable once built. Lookahead data used by Optimal and VMIN is not
/// part of the trace.
///
/// # Example
/// ```
/// use pagesim::{parse_references, simulate, PolicyConfig};
///
/// let refs = parse_references("A B C A").unwrap();
/// let trace = simulate(&PolicyConfig::Fifo { frames: 2 }, &refs).unwrap();
///
/// assert_eq!(trace.records().len(), 5); // initial state + 4 references
/// assert_eq!(trace.total_faults() + trace.total_hits(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationTrace {
    policy: PolicyKind,
    records: Vec<StepRecord>,
    stats: FaultStats,
    final_frame_count: usize,
}

impl SimulationTrace {
    pub(crate) fn new(policy: PolicyKind, records: Vec<StepRecord>, stats: FaultStats) -> Self {
        let final_frame_count = records.last().map_or(0, StepRecord::frame_count);
        Self {
            policy,
            records,
            stats,
            final_frame_count,
        }
    }

    /// Policy that produced the trace.
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Every record, the initial state first.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// The records of the references only (initial state excluded).
    pub fn steps(&self) -> &[StepRecord] {
        self.records.get(1..).unwrap_or(&[])
    }

    /// The initial-state record.
    pub fn initial(&self) -> &StepRecord {
        &self.records[0]
    }

    /// The all-empty frame snapshot before the first reference.
    pub fn initial_snapshot(&self) -> &[Option<PageRef>] {
        &self.initial().frames
    }

    /// Frame contents after the last reference.
    pub fn final_frames(&self) -> &[Option<PageRef>] {
        self.records.last().map_or(&[], |r| r.frames.as_slice())
    }

    /// Number of references that faulted.
    pub fn total_faults(&self) -> usize {
        self.stats.faults as usize
    }

    /// Number of references that hit.
    pub fn total_hits(&self) -> usize {
        self.stats.hits as usize
    }

    /// Frame count after the last reference (varies only under PFF).
    pub fn final_frame_count(&self) -> usize {
        self.final_frame_count
    }

    /// Aggregate counters.
    pub fn stats(&self) -> FaultStats {
        self.stats
    }

    /// CRC32 over a canonical encoding of every record.
    ///
    /// Two runs of the same policy, configuration and references always
    /// produce the same checksum.
    pub fn checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();

        hasher.update(self.policy.to_string().as_bytes());
        for record in &self.records {
            hasher.update(&(record.index as u64).to_le_bytes());
            hasher.update(&encode_page(record.page));
            hasher.update(&[record.fault as u8]);
            hasher.update(&encode_index(record.changed.map(|f| f.0)));
            hasher.update(&encode_page(record.evicted));
            hasher.update(&encode_page(record.discarded));
            hasher.update(&(record.frames.len() as u64).to_le_bytes());
            for &slot in &record.frames {
                hasher.update(&encode_page(slot));
            }
            if let Some(extras) = &record.extras {
                for &bit in extras.use_bits() {
                    hasher.update(&[bit as u8]);
                }
                hasher.update(&encode_index(extras.pointer().map(|f| f.0)));
            }
        }

        hasher.finalize()
    }

    /// Encode the trace as JSON for external renderers.
    ///
    /// # Errors
    /// `Error::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn encode_page(page: Option<PageRef>) -> [u8; 4] {
    page.map_or(u32::MAX, |p| p.symbol() as u32).to_le_bytes()
}

fn encode_index(index: Option<usize>) -> [u8; 8] {
    index.map_or(u64::MAX, |i| i as u64).to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FrameId;

    fn sample() -> SimulationTrace {
        let mut recorder = TraceRecorder::new(PolicyKind::Lru, StepRecord::initial(2, None));
        recorder.record(StepRecord {
            index: 1,
            page: Some(PageRef::new('A')),
            fault: true,
            changed: Some(FrameId::new(0)),
            evicted: None,
            discarded: None,
            frames: vec![Some(PageRef::new('A')), None],
            extras: None,
        });
        recorder.finish()
    }

    #[test]
    fn test_trace_accessors() {
        let trace = sample();

        assert_eq!(trace.policy(), PolicyKind::Lru);
        assert_eq!(trace.records().len(), 2);
        assert_eq!(trace.steps().len(), 1);
        assert_eq!(trace.initial_snapshot(), &[None, None]);
        assert_eq!(trace.final_frames(), &[Some(PageRef::new('A')), None]);
        assert_eq!(trace.total_faults(), 1);
        assert_eq!(trace.total_hits(), 0);
        assert_eq!(trace.final_frame_count(), 2);
    }

    #[test]
    fn test_checksum_stable_and_sensitive() {
        let a = sample();
        let b = sample();
        assert_eq!(a.checksum(), b.checksum());

        let mut recorder = TraceRecorder::new(PolicyKind::Lru, StepRecord::initial(2, None));
        recorder.record(StepRecord {
            index: 1,
            page: Some(PageRef::new('B')),
            fault: true,
            changed: Some(FrameId::new(0)),
            evicted: None,
            discarded: None,
            frames: vec![Some(PageRef::new('B')), None],
            extras: None,
        });
        assert_ne!(a.checksum(), recorder.finish().checksum());
    }

    #[test]
    fn test_to_json() {
        let json = sample().to_json().unwrap();

        assert!(json.contains(r#""policy":"lru""#));
        assert!(json.contains(r#""frames":["A",null]"#));
        assert!(json.contains(r#""final_frame_count":2"#));
    }
}
