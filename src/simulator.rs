//! Simulation driver.
//!
//! Binds a [`PolicyConfig`] to a reference string, feeds the references one
//! by one through a [`PolicyEngine`] and collects the records.
//!
//! ```text
//!  references ──▶ PolicyEngine::consume ──▶ StepRecord ──▶ TraceRecorder
//!                   (FrameTable + Policy)                       │
//!                                                               ▼
//!                                                        SimulationTrace
//! ```

use tracing::debug;

use crate::common::{PageRef, PolicyConfig, Result};
use crate::memory::PolicyEngine;
use crate::trace::{SimulationTrace, StepRecord, TraceRecorder};

/// A run in progress.
///
/// Useful for step-by-step replay; [`simulate`] runs to the end in one call.
///
/// # Example
/// ```
/// use pagesim::{parse_references, PolicyConfig, Simulation};
///
/// let refs = parse_references("A B A").unwrap();
/// let mut sim = Simulation::new(&PolicyConfig::Fifo { frames: 1 }, &refs).unwrap();
///
/// assert!(sim.step().unwrap().fault);
/// assert_eq!(sim.remaining(), 2);
///
/// let trace = sim.finish();
/// assert_eq!(trace.total_faults(), 3);
/// ```
#[derive(Debug)]
pub struct Simulation<'a> {
    references: &'a [PageRef],
    engine: PolicyEngine,
    recorder: TraceRecorder,
}

impl<'a> Simulation<'a> {
    /// Validate `config` and prepare a run over `references`.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `config` fails validation. Nothing is
    /// processed in that case.
    pub fn new(config: &PolicyConfig, references: &'a [PageRef]) -> Result<Self> {
        let engine = PolicyEngine::new(config, references)?;
        let recorder =
            TraceRecorder::with_capacity(engine.kind(), engine.initial_record(), references.len());

        Ok(Self {
            references,
            engine,
            recorder,
        })
    }

    /// Process the next reference and return its record.
    ///
    /// Returns `None` once every reference has been consumed.
    pub fn step(&mut self) -> Option<&StepRecord> {
        let &page = self.references.get(self.engine.position())?;
        let record = self.engine.consume(page);
        self.recorder.record(record);
        Some(self.recorder.last())
    }

    /// References not yet processed.
    pub fn remaining(&self) -> usize {
        self.references.len() - self.engine.position()
    }

    /// Whether every reference has been processed.
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// The engine driving this run.
    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    /// Process any remaining references and seal the trace.
    pub fn finish(mut self) -> SimulationTrace {
        while self.step().is_some() {}

        let trace = self.recorder.finish();
        debug!(
            policy = %trace.policy(),
            faults = trace.total_faults(),
            hits = trace.total_hits(),
            fault_rate = trace.stats().fault_rate(),
            final_frames = trace.final_frame_count(),
            "simulation finished"
        );
        trace
    }
}

/// Run `config` over `references` and return the complete trace.
///
/// # Errors
/// `Error::InvalidConfiguration` if `config` fails validation.
pub fn simulate(config: &PolicyConfig, references: &[PageRef]) -> Result<SimulationTrace> {
    Ok(Simulation::new(config, references)?.finish())
}

/// Run several configurations over the same references, for side-by-side
/// comparison.
///
/// Every configuration is validated before any run starts.
///
/// # Errors
/// The first `Error::InvalidConfiguration` encountered.
pub fn simulate_all(
    configs: &[PolicyConfig],
    references: &[PageRef],
) -> Result<Vec<SimulationTrace>> {
    for config in configs {
        config.validate()?;
    }
    configs
        .iter()
        .map(|config| simulate(config, references))
        .collect()
}
