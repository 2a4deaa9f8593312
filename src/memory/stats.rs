//! Hit/fault statistics for a simulation run.

use std::fmt;

use serde::Serialize;

/// Counters accumulated while a reference stream is processed.
///
/// A run owns exactly one of these, so plain integers suffice. The trace
/// exposes a copy once the run is finished.
///
/// # Example
/// ```
/// use pagesim::FaultStats;
///
/// let mut stats = FaultStats::new();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FaultStats {
    /// References whose page was already resident.
    pub hits: u64,

    /// References that had to load their page.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,

    /// Pages dropped with their slot by a PFF shrink.
    pub discards: u64,
}

impl FaultStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a hit.
    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Count a fault, and an eviction if a page was displaced.
    #[inline]
    pub fn record_fault(&mut self, evicted: bool) {
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Count a page dropped by a frame-table shrink.
    #[inline]
    pub fn record_discard(&mut self) {
        self.discards += 1;
    }

    /// Total references seen.
    #[inline]
    pub fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.references())
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        ratio(self.faults, self.references())
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, discards: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.discards,
            self.hit_rate() * 100.0
        )
    }
}
