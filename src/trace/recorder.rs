//! Accumulates step records into a [`SimulationTrace`].

use crate::common::PolicyKind;
use crate::memory::FaultStats;

use super::{SimulationTrace, StepRecord};

/// Appends one record per reference and keeps the hit/fault tally.
#[derive(Debug)]
pub struct TraceRecorder {
    policy: PolicyKind,
    steps: Vec<StepRecord>,
    stats: FaultStats,
}

impl TraceRecorder {
    /// Start a trace with its initial-state record.
    pub fn new(policy: PolicyKind, initial: StepRecord) -> Self {
        Self::with_capacity(policy, initial, 0)
    }

    /// Like [`TraceRecorder::new`], reserving room for `references` steps.
    pub fn with_capacity(policy: PolicyKind, initial: StepRecord, references: usize) -> Self {
        let mut steps = Vec::with_capacity(references + 1);
        steps.push(initial);
        Self {
            policy,
            steps,
            stats: FaultStats::new(),
        }
    }

    /// Append the record of one reference.
    pub fn record(&mut self, step: StepRecord) {
        if step.fault {
            self.stats.record_fault(step.evicted.is_some());
        } else {
            self.stats.record_hit();
        }
        if step.discarded.is_some() {
            self.stats.record_discard();
        }
        self.steps.push(step);
    }

    /// The most recent record.
    pub fn last(&self) -> &StepRecord {
        // The initial record is pushed on construction
        &self.steps[self.steps.len() - 1]
    }

    /// Tally so far.
    pub fn stats(&self) -> FaultStats {
        self.stats
    }

    /// Seal the trace.
    pub fn finish(self) -> SimulationTrace {
        SimulationTrace::new(self.policy, self.steps, self.stats)
    }
}
