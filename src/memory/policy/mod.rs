//! Page-replacement policy implementations.
//!
//! Implements:
//! - [`FifoPolicy`] - First-In-First-Out
//! - [`LruPolicy`] - Least Recently Used
//! - [`ClockPolicy`] - Second chance by pointer sweep
//! - [`SecondChancePolicy`] - Second chance by FIFO requeue
//! - [`OptimalPolicy`] - Full lookahead (Belady)
//! - [`VminPolicy`] - Windowed lookahead
//! - [`WorkingSetPolicy`] - Recency-window membership
//! - [`PffPolicy`] - FIFO with adaptive frame count
//!
//! The set of policies is closed: [`Policy`] has one case per algorithm and
//! [`PolicyEngine`] drives whichever one was configured through the shared
//! hit/fault rule.

mod clock;
mod fifo;
mod lru;
mod optimal;
mod pff;
mod second_chance;
mod vmin;
mod working_set;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;
pub use pff::{PffPolicy, Resize};
pub use second_chance::SecondChancePolicy;
pub use vmin::VminPolicy;
pub use working_set::WorkingSetPolicy;

use tracing::{debug, trace};

use crate::common::config::effective_horizon;
use crate::common::{FrameId, PageRef, PolicyConfig, PolicyKind, Result};
use crate::memory::FrameTable;
use crate::trace::{PolicyExtras, StepRecord};

/// Per-policy state, one case per algorithm.
#[derive(Debug, Clone)]
pub enum Policy {
    Fifo(FifoPolicy),
    Lru(LruPolicy),
    Clock(ClockPolicy),
    SecondChance(SecondChancePolicy),
    Optimal(OptimalPolicy),
    Vmin(VminPolicy),
    WorkingSet(WorkingSetPolicy),
    Pff(PffPolicy),
}

impl Policy {
    /// Build the state for `config`. Lookahead policies copy `references`.
    fn from_config(config: &PolicyConfig, references: &[PageRef]) -> Self {
        match *config {
            PolicyConfig::Fifo { .. } => Policy::Fifo(FifoPolicy::new()),
            PolicyConfig::Lru { .. } => Policy::Lru(LruPolicy::new()),
            PolicyConfig::Clock { frames } => Policy::Clock(ClockPolicy::new(frames)),
            PolicyConfig::SecondChance { frames } => {
                Policy::SecondChance(SecondChancePolicy::new(frames))
            }
            PolicyConfig::Optimal { .. } => Policy::Optimal(OptimalPolicy::new(references)),
            PolicyConfig::Vmin { horizon, .. } => {
                Policy::Vmin(VminPolicy::new(references, effective_horizon(horizon)))
            }
            PolicyConfig::WorkingSet { delta, .. } => {
                Policy::WorkingSet(WorkingSetPolicy::new(delta))
            }
            PolicyConfig::Pff(pff) => Policy::Pff(PffPolicy::new(pff)),
        }
    }

    /// Which algorithm this is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fifo(_) => PolicyKind::Fifo,
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Clock(_) => PolicyKind::Clock,
            Policy::SecondChance(_) => PolicyKind::SecondChance,
            Policy::Optimal(_) => PolicyKind::Optimal,
            Policy::Vmin(_) => PolicyKind::Vmin,
            Policy::WorkingSet(_) => PolicyKind::WorkingSet,
            Policy::Pff(_) => PolicyKind::Pff,
        }
    }

    // ========================================================================
    // Hooks driven by PolicyEngine::consume
    // ========================================================================

    /// Every reference, before the hit/fault decision.
    fn observe(&mut self, page: PageRef) {
        if let Policy::WorkingSet(ws) = self {
            ws.observe(page);
        }
    }

    /// The page is resident in `frame_id`.
    fn on_hit(&mut self, frame_id: FrameId) {
        match self {
            Policy::Lru(lru) => lru.touch(frame_id),
            Policy::Clock(clock) => clock.mark_used(frame_id),
            Policy::SecondChance(sc) => sc.mark_used(frame_id),
            _ => {}
        }
    }

    /// A fault is about to fill the empty `frame_id`.
    fn on_fill(&mut self, frame_id: FrameId) {
        match self {
            Policy::Fifo(fifo) => fifo.record_arrival(frame_id),
            Policy::Lru(lru) => lru.record_arrival(frame_id),
            Policy::Clock(clock) => clock.mark_used(frame_id),
            Policy::SecondChance(sc) => sc.record_arrival(frame_id),
            Policy::Pff(pff) => pff.record_arrival(frame_id),
            Policy::Optimal(_) | Policy::Vmin(_) | Policy::WorkingSet(_) => {}
        }
    }

    /// The table is full: pick the slot to overwrite.
    ///
    /// Policies update their own bookkeeping for the incoming page here.
    fn select_victim(&mut self, table: &FrameTable, position: usize) -> FrameId {
        match self {
            Policy::Fifo(fifo) => fifo.replace(),
            Policy::Lru(lru) => lru.replace(),
            Policy::Clock(clock) => clock.replace(),
            Policy::SecondChance(sc) => sc.replace(),
            Policy::Optimal(opt) => opt.select_victim(table, position),
            Policy::Vmin(vmin) => vmin.select_victim(table, position),
            Policy::WorkingSet(ws) => ws.select_victim(table),
            Policy::Pff(pff) => pff.replace(),
        }
    }

    /// Every reference, after placement. Only PFF resizes the table.
    fn after_reference(&mut self, table: &mut FrameTable, fault: bool) -> Resize {
        match self {
            Policy::Pff(pff) => pff.adjust(table, fault),
            _ => Resize::None,
        }
    }

    /// Annotations for the current state.
    fn extras(&self) -> Option<PolicyExtras> {
        match self {
            Policy::Clock(clock) => Some(PolicyExtras::Clock {
                use_bits: clock.use_bits().to_vec(),
                pointer: clock.hand(),
            }),
            Policy::SecondChance(sc) => Some(PolicyExtras::SecondChance {
                use_bits: sc.use_bits().to_vec(),
            }),
            _ => None,
        }
    }
}

/// A policy bound to its frame table.
///
/// # Usage
/// ```
/// use pagesim::{PageRef, PolicyConfig, PolicyEngine};
///
/// let refs: Vec<PageRef> = "ABA".chars().map(PageRef::new).collect();
/// let mut engine = PolicyEngine::new(&PolicyConfig::Lru { frames: 2 }, &refs).unwrap();
///
/// assert!(engine.consume(refs[0]).fault);
/// assert!(engine.consume(refs[1]).fault);
/// assert!(!engine.consume(refs[2]).fault);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    table: FrameTable,
    policy: Policy,
    /// References consumed so far; also the index of the next one.
    position: usize,
}

impl PolicyEngine {
    /// Validate `config` and build an engine with an empty table.
    ///
    /// `references` is the run's full reference string. Optimal and VMIN
    /// read their lookahead from it; the other policies ignore it.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `config` fails validation.
    pub fn new(config: &PolicyConfig, references: &[PageRef]) -> Result<Self> {
        config.validate()?;

        let policy = Policy::from_config(config, references);
        debug!(
            policy = %policy.kind(),
            lookahead = policy.kind().uses_lookahead(),
            frames = config.initial_frames(),
            references = references.len(),
            "built policy engine"
        );

        Ok(Self {
            table: FrameTable::new(config.initial_frames()),
            policy,
            position: 0,
        })
    }

    /// Which algorithm drives the engine.
    pub fn kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// The frame table in its current state.
    pub fn table(&self) -> &FrameTable {
        &self.table
    }

    /// The policy state.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Number of references consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Record describing the engine before any reference.
    pub fn initial_record(&self) -> StepRecord {
        StepRecord::initial(self.table.len(), self.policy.extras())
    }

    /// Process the next reference.
    ///
    /// A hit leaves the table alone (apart from "mark used" bookkeeping). A
    /// fault fills the lowest empty slot, or overwrites the policy's victim
    /// when the table is full. A PFF shrink afterwards may drop a page along
    /// with its slot; the record carries it in `discarded`.
    pub fn consume(&mut self, page: PageRef) -> StepRecord {
        let position = self.position;
        self.policy.observe(page);

        let (fault, evicted) = match self.table.find(page) {
            Some(frame_id) => {
                self.policy.on_hit(frame_id);
                (false, None)
            }
            None => {
                let frame_id = match self.table.first_empty() {
                    Some(frame_id) => {
                        self.policy.on_fill(frame_id);
                        frame_id
                    }
                    None => self.policy.select_victim(&self.table, position),
                };
                let evicted = self.table.set(frame_id, page);
                if let Some(victim) = evicted {
                    trace!(
                        policy = %self.policy.kind(),
                        step = position + 1,
                        slot = frame_id.0,
                        %victim,
                        %page,
                        "evicted page"
                    );
                }
                (true, evicted)
            }
        };

        let discarded = match self.policy.after_reference(&mut self.table, fault) {
            Resize::Shrank(discarded) => discarded,
            Resize::None | Resize::Grew => None,
        };
        if let Some(dropped) = discarded {
            trace!(
                policy = %self.policy.kind(),
                step = position + 1,
                %dropped,
                frames = self.table.len(),
                "discarded page on shrink"
            );
        }
        self.position += 1;

        StepRecord {
            index: position + 1,
            page: Some(page),
            fault,
            // Looked up after any resize, which may renumber slots
            changed: if fault { self.table.find(page) } else { None },
            evicted,
            discarded,
            frames: self.table.snapshot(),
            extras: self.policy.extras(),
        }
    }
}
