//! Worked examples for each policy.
//!
//! These follow the classic textbook reference strings, checking faults,
//! victims and final frame contents end to end through `simulate`.

use pagesim::{
    parse_references, simulate, FrameId, PageRef, PffConfig, PolicyConfig, PolicyKind,
    SimulationTrace,
};

fn run(config: PolicyConfig, input: &str) -> SimulationTrace {
    let refs = parse_references(input).unwrap();
    simulate(&config, &refs).unwrap()
}

fn frames(slots: &[Option<PageRef>]) -> String {
    slots.iter().map(|s| s.map_or('-', |p| p.symbol())).collect()
}

fn fault_steps(trace: &SimulationTrace) -> Vec<usize> {
    trace
        .steps()
        .iter()
        .filter(|s| s.fault)
        .map(|s| s.index)
        .collect()
}

const CLASSIC: &str = "A,B,C,A,B,D,A,B,C,D";

// ============================================================================
// FIFO
// ============================================================================

#[test]
fn test_fifo_classic() {
    let trace = run(PolicyConfig::Fifo { frames: 3 }, CLASSIC);

    assert_eq!(fault_steps(&trace), vec![1, 2, 3, 6, 7, 8, 9, 10]);
    assert_eq!(trace.total_faults(), 8);
    assert_eq!(trace.total_hits(), 2);
    assert_eq!(frames(trace.final_frames()), "CDB");
}

#[test]
fn test_fifo_belady_anomaly() {
    let input = "1 2 3 4 1 2 5 1 2 3 4 5";

    let three = run(PolicyConfig::Fifo { frames: 3 }, input);
    let four = run(PolicyConfig::Fifo { frames: 4 }, input);

    // More frames, more faults
    assert_eq!(three.total_faults(), 9);
    assert_eq!(four.total_faults(), 10);
}

// ============================================================================
// LRU
// ============================================================================

#[test]
fn test_lru_classic() {
    let trace = run(PolicyConfig::Lru { frames: 3 }, CLASSIC);
    let d = &trace.steps()[5];

    assert_eq!(d.page, Some(PageRef::new('D')));
    assert_eq!(d.evicted, Some(PageRef::new('C')));
    assert_eq!(fault_steps(&trace), vec![1, 2, 3, 6, 9, 10]);

    let fifo = run(PolicyConfig::Fifo { frames: 3 }, CLASSIC);
    assert!(trace.total_faults() < fifo.total_faults());
}

#[test]
fn test_lru_no_belady_anomaly() {
    let input = "1 2 3 4 1 2 5 1 2 3 4 5";

    let three = run(PolicyConfig::Lru { frames: 3 }, input);
    let four = run(PolicyConfig::Lru { frames: 4 }, input);

    assert!(four.total_faults() <= three.total_faults());
}

// ============================================================================
// Clock
// ============================================================================

#[test]
fn test_clock_sweep() {
    let trace = run(PolicyConfig::Clock { frames: 3 }, "A,B,C,A,B,D");
    let steps = trace.steps();

    // After three fills: all bits set, hand at 0
    let filled = steps[2].extras.as_ref().unwrap();
    assert_eq!(filled.use_bits(), &[true, true, true]);
    assert_eq!(filled.pointer(), Some(FrameId::new(0)));

    // Hits on A and B keep the hand still
    for hit in &steps[3..5] {
        assert!(!hit.fault);
        assert_eq!(hit.extras.as_ref().unwrap().pointer(), Some(FrameId::new(0)));
    }

    // D: A, B, C each lose their bit, the hand comes back to A and takes it
    let d = &steps[5];
    assert_eq!(d.evicted, Some(PageRef::new('A')));
    assert_eq!(d.changed, Some(FrameId::new(0)));
    assert_eq!(frames(&d.frames), "DBC");
    let extras = d.extras.as_ref().unwrap();
    assert_eq!(extras.use_bits(), &[true, false, false]);
    assert_eq!(extras.pointer(), Some(FrameId::new(1)));
}

#[test]
fn test_clock_takes_cleared_frame_first() {
    // After D replaces A, B and C have clear bits; E takes B straight away
    let trace = run(PolicyConfig::Clock { frames: 3 }, "A,B,C,D,E");
    let e = &trace.steps()[4];

    assert_eq!(e.evicted, Some(PageRef::new('B')));
    assert_eq!(e.extras.as_ref().unwrap().pointer(), Some(FrameId::new(2)));
}

#[test]
fn test_clock_initial_record_has_extras() {
    let trace = run(PolicyConfig::Clock { frames: 2 }, "A");
    let initial = trace.initial();

    assert!(initial.is_initial());
    let extras = initial.extras.as_ref().unwrap();
    assert_eq!(extras.use_bits(), &[false, false]);
    assert_eq!(extras.pointer(), Some(FrameId::new(0)));
}

// ============================================================================
// Second-Chance
// ============================================================================

#[test]
fn test_second_chance_matches_clock_victims() {
    // Same decisions as Clock on this string, without a hand in the extras
    let sc = run(PolicyConfig::SecondChance { frames: 3 }, CLASSIC);
    let clock = run(PolicyConfig::Clock { frames: 3 }, CLASSIC);

    for (a, b) in sc.steps().iter().zip(clock.steps()) {
        assert_eq!(a.fault, b.fault);
        assert_eq!(a.frames, b.frames);
        assert_eq!(a.extras.as_ref().unwrap().use_bits(), b.extras.as_ref().unwrap().use_bits());
        assert_eq!(a.extras.as_ref().unwrap().pointer(), None);
    }
}

#[test]
fn test_second_chance_spares_referenced_page() {
    // After D replaces A the queue is B, C, D and only D has its bit set; the
    // hit on B sets B's bit, so E passes over B and takes C
    let trace = run(PolicyConfig::SecondChance { frames: 3 }, "A,B,C,D,B,E");
    let e = &trace.steps()[5];

    assert_eq!(e.evicted, Some(PageRef::new('C')));
    assert_eq!(frames(&e.frames), "DBE");
}

// ============================================================================
// Optimal / VMIN
// ============================================================================

#[test]
fn test_optimal_first_full_fault() {
    let trace = run(PolicyConfig::Optimal { frames: 3 }, "A,B,C,A,B,D,E,A,B,C");
    let d = &trace.steps()[5];

    // Next uses after position 5: A at 7, B at 8, C at 9; C is farthest
    assert!(d.fault);
    assert_eq!(d.evicted, Some(PageRef::new('C')));
    assert_eq!(trace.total_faults(), 6);
}

#[test]
fn test_optimal_never_worse_than_lru() {
    let input = "7 0 1 2 0 3 0 4 2 3 0 3 2 1 2 0 1 7 0 1";

    let optimal = run(PolicyConfig::Optimal { frames: 3 }, input);
    let lru = run(PolicyConfig::Lru { frames: 3 }, input);
    let fifo = run(PolicyConfig::Fifo { frames: 3 }, input);

    assert_eq!(optimal.total_faults(), 9);
    assert_eq!(lru.total_faults(), 12);
    assert_eq!(fifo.total_faults(), 15);
}

#[test]
fn test_vmin_short_window() {
    // Window of 2 after D (position 5) sees E, A: B is the first page missing
    let trace = run(
        PolicyConfig::Vmin {
            frames: 3,
            horizon: 2,
        },
        "A,B,C,A,B,D,E,A,B,C",
    );

    assert_eq!(trace.steps()[5].evicted, Some(PageRef::new('B')));
}

#[test]
fn test_vmin_wide_window_equals_optimal() {
    let input = "7 0 1 2 0 3 0 4 2 3 0 3 2 1 2 0 1 7 0 1";
    let vmin = run(
        PolicyConfig::Vmin {
            frames: 3,
            horizon: 100,
        },
        input,
    );
    let optimal = run(PolicyConfig::Optimal { frames: 3 }, input);

    assert_eq!(vmin.total_faults(), optimal.total_faults());
}

// ============================================================================
// Working-Set
// ============================================================================

#[test]
fn test_working_set_evicts_outside_window() {
    let trace = run(
        PolicyConfig::WorkingSet {
            frames: 3,
            delta: 3,
        },
        "A,B,C,B,C,D",
    );
    let d = &trace.steps()[5];

    // The last three references are B, C, D: A is outside the window
    assert_eq!(d.evicted, Some(PageRef::new('A')));
    assert_eq!(d.changed, Some(FrameId::new(0)));
}

#[test]
fn test_working_set_window_counts_hits() {
    // The hits on A keep it inside the window, so B is chosen at D
    let trace = run(
        PolicyConfig::WorkingSet {
            frames: 3,
            delta: 3,
        },
        "A,B,C,A,A,D",
    );

    assert_eq!(trace.steps()[5].evicted, Some(PageRef::new('B')));
}

// ============================================================================
// PFF
// ============================================================================

#[test]
fn test_pff_grows_under_pressure() {
    let config = PolicyConfig::Pff(PffConfig {
        initial_frames: 1,
        min_frames: 1,
        max_frames: 4,
        lower_threshold: 0.1,
        upper_threshold: 0.5,
    });
    let trace = run(config, "A,B,C,D,E,F");

    let counts: Vec<usize> = trace.steps().iter().map(|s| s.frame_count()).collect();
    assert_eq!(counts, vec![2, 3, 4, 4, 4, 4]);
    assert_eq!(trace.final_frame_count(), 4);
    assert_eq!(trace.policy(), PolicyKind::Pff);
}

fn shrinking_pff(lower_threshold: f64) -> PolicyConfig {
    PolicyConfig::Pff(PffConfig {
        initial_frames: 3,
        min_frames: 2,
        max_frames: 3,
        lower_threshold,
        upper_threshold: 1.0,
    })
}

#[test]
fn test_pff_holds_above_lower_threshold() {
    let trace = run(shrinking_pff(0.5), "A,B,C,A,A");
    let steps = trace.steps();

    assert_eq!(frames(&steps[2].frames), "ABC");
    // 3/4 = 0.75, then 3/5 = 0.6: both above 0.5
    assert_eq!(steps[3].frame_count(), 3);
    assert_eq!(steps[4].frame_count(), 3);
}

#[test]
fn test_pff_shrink_discards_oldest() {
    let trace = run(shrinking_pff(0.7), "A,B,C,A,A");
    let steps = trace.steps();

    // 3/4 = 0.75 is still above 0.7
    assert_eq!(steps[3].frame_count(), 3);

    // 3/5 = 0.6: the table is full, so A (oldest) leaves with its slot
    assert_eq!(frames(&steps[4].frames), "BC");
    assert_eq!(trace.final_frame_count(), 2);
}

#[test]
fn test_pff_shrink_records_discarded_page() {
    let trace = run(shrinking_pff(0.7), "A,B,C,A,A");
    let shrink = &trace.steps()[4];

    // The hit on A is followed by the shrink that drops it
    assert_eq!(shrink.page, Some(PageRef::new('A')));
    assert!(!shrink.fault);
    assert_eq!(shrink.evicted, None);
    assert_eq!(shrink.discarded, Some(PageRef::new('A')));
    assert!(!shrink.frames.contains(&Some(PageRef::new('A'))));

    assert_eq!(trace.stats().discards, 1);
    assert_eq!(trace.stats().evictions, 0);
    assert!(trace.to_json().unwrap().contains(r#""discarded":"A""#));
}

#[test]
fn test_pff_discard_changes_checksum() {
    let held = run(shrinking_pff(0.5), "A,B,C,A,A");
    let shrunk = run(shrinking_pff(0.7), "A,B,C,A,A");

    assert_ne!(held.checksum(), shrunk.checksum());
}

// ============================================================================
// Labels and export
// ============================================================================

#[test]
fn test_labels() {
    let trace = run(PolicyConfig::Fifo { frames: 1 }, "a a");
    let labels: Vec<String> = trace.records().iter().map(|r| r.label()).collect();

    assert_eq!(labels, vec!["Initial state", "Step 1: A (fault)", "Step 2: A (hit)"]);
}

#[test]
fn test_json_export_has_no_lookahead() {
    let trace = run(PolicyConfig::Optimal { frames: 2 }, "A,B,C");
    let json = trace.to_json().unwrap();

    assert!(json.contains(r#""policy":"optimal""#));
    assert!(!json.contains("future"));
}
