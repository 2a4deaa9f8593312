//! Configuration for simulation runs.
//!
//! This module defines:
//! 1. **Defaults:** constants applied when a parameter is left at zero.
//! 2. **Policy selection:** [`PolicyKind`] names the eight policies.
//! 3. **Parameters:** [`PolicyConfig`] carries each policy's settings and is
//!    validated before any engine is built.
//!
//! Configuration can be built in code or deserialized from JSON:
//! ```
//! use pagesim::common::config::PolicyConfig;
//!
//! let json = r#"{ "policy": "vmin", "frames": 3, "horizon": 4 }"#;
//! let config = PolicyConfig::from_json(json).unwrap();
//! assert_eq!(config.initial_frames(), 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Lookahead horizon used by VMIN when the configured horizon is 0.
pub const DEFAULT_VMIN_HORIZON: usize = 5;

/// The eight page-replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Fifo,
    Lru,
    Clock,
    SecondChance,
    Optimal,
    Vmin,
    WorkingSet,
    Pff,
}

impl PolicyKind {
    /// Every policy, in presentation order.
    pub const ALL: [PolicyKind; 8] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Clock,
        PolicyKind::SecondChance,
        PolicyKind::Optimal,
        PolicyKind::Vmin,
        PolicyKind::WorkingSet,
        PolicyKind::Pff,
    ];

    /// Whether the policy reads future references.
    pub fn uses_lookahead(&self) -> bool {
        matches!(self, PolicyKind::Optimal | PolicyKind::Vmin)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Clock => "Clock",
            PolicyKind::SecondChance => "Second-Chance",
            PolicyKind::Optimal => "Optimal",
            PolicyKind::Vmin => "VMIN",
            PolicyKind::WorkingSet => "Working-Set",
            PolicyKind::Pff => "PFF",
        };
        f.write_str(name)
    }
}

/// Parameters of the Page-Fault-Frequency policy.
///
/// Thresholds are fault-rate fractions in `(0, 1]`, compared against the
/// cumulative `faults / references` ratio after every reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PffConfig {
    /// Frame count at the start of the run.
    pub initial_frames: usize,
    /// The table never shrinks below this.
    pub min_frames: usize,
    /// The table never grows beyond this.
    pub max_frames: usize,
    /// Shrink when the fault rate drops below this.
    pub lower_threshold: f64,
    /// Grow when the fault rate rises above this.
    pub upper_threshold: f64,
}

impl PffConfig {
    /// Check bounds and thresholds.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` describing the first violated rule.
    pub fn validate(&self) -> Result<()> {
        if self.min_frames == 0 || self.max_frames == 0 || self.initial_frames == 0 {
            return Err(Error::config("PFF frame bounds must be > 0"));
        }
        if self.min_frames > self.max_frames {
            return Err(Error::config(format!(
                "PFF min_frames ({}) exceeds max_frames ({})",
                self.min_frames, self.max_frames
            )));
        }
        if !(self.min_frames..=self.max_frames).contains(&self.initial_frames) {
            return Err(Error::config(format!(
                "PFF initial_frames ({}) outside [{}, {}]",
                self.initial_frames, self.min_frames, self.max_frames
            )));
        }
        for (name, value) in [
            ("lower_threshold", self.lower_threshold),
            ("upper_threshold", self.upper_threshold),
        ] {
            // NaN fails both comparisons, so test the accepted range instead
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::config(format!(
                    "PFF {} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.lower_threshold > self.upper_threshold {
            return Err(Error::config(format!(
                "PFF lower_threshold ({}) exceeds upper_threshold ({})",
                self.lower_threshold, self.upper_threshold
            )));
        }
        Ok(())
    }
}

/// A policy selection together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PolicyConfig {
    Fifo { frames: usize },
    Lru { frames: usize },
    Clock { frames: usize },
    SecondChance { frames: usize },
    Optimal { frames: usize },
    /// `horizon == 0` selects [`DEFAULT_VMIN_HORIZON`].
    Vmin {
        frames: usize,
        #[serde(default)]
        horizon: usize,
    },
    /// `delta` is the length of the trailing reference window.
    WorkingSet { frames: usize, delta: usize },
    Pff(PffConfig),
}

impl PolicyConfig {
    /// Parse a configuration from JSON.
    ///
    /// The result is validated before it is returned.
    ///
    /// # Errors
    /// - `Error::Json` if the text is not a valid configuration object
    /// - `Error::InvalidConfiguration` if the values are out of range
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PolicyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Which policy this configuration selects.
    pub fn kind(&self) -> PolicyKind {
        match self {
            PolicyConfig::Fifo { .. } => PolicyKind::Fifo,
            PolicyConfig::Lru { .. } => PolicyKind::Lru,
            PolicyConfig::Clock { .. } => PolicyKind::Clock,
            PolicyConfig::SecondChance { .. } => PolicyKind::SecondChance,
            PolicyConfig::Optimal { .. } => PolicyKind::Optimal,
            PolicyConfig::Vmin { .. } => PolicyKind::Vmin,
            PolicyConfig::WorkingSet { .. } => PolicyKind::WorkingSet,
            PolicyConfig::Pff(_) => PolicyKind::Pff,
        }
    }

    /// Frame count at the start of a run.
    pub fn initial_frames(&self) -> usize {
        match *self {
            PolicyConfig::Fifo { frames }
            | PolicyConfig::Lru { frames }
            | PolicyConfig::Clock { frames }
            | PolicyConfig::SecondChance { frames }
            | PolicyConfig::Optimal { frames }
            | PolicyConfig::Vmin { frames, .. }
            | PolicyConfig::WorkingSet { frames, .. } => frames,
            PolicyConfig::Pff(pff) => pff.initial_frames,
        }
    }

    /// Check every parameter.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` on a zero frame count, a zero working-set
    /// window, or any PFF rule (see [`PffConfig::validate`]).
    pub fn validate(&self) -> Result<()> {
        match *self {
            PolicyConfig::Pff(pff) => pff.validate(),
            PolicyConfig::WorkingSet { frames, delta } => {
                check_frames(self.kind(), frames)?;
                if delta == 0 {
                    return Err(Error::config("working-set delta must be > 0"));
                }
                Ok(())
            }
            _ => check_frames(self.kind(), self.initial_frames()),
        }
    }
}

fn check_frames(kind: PolicyKind, frames: usize) -> Result<()> {
    if frames == 0 {
        return Err(Error::config(format!("{} frame count must be > 0", kind)));
    }
    Ok(())
}

/// Resolve a configured VMIN horizon, applying the default for 0.
#[inline]
pub fn effective_horizon(horizon: usize) -> usize {
    if horizon == 0 {
        DEFAULT_VMIN_HORIZON
    } else {
        horizon
    }
}
