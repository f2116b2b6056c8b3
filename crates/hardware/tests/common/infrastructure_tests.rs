use super::builder::stimulus::StimulusBuilder;
use super::harness::{TestContext, vec6};
use super::mocks::block::{FaultyRoi, InvertedRoi};
use roi_harness_core::roi::{CombinationalBlock, TruthTable};

// ─── StimulusBuilder ────────────────────────────────────────────────────────

#[test]
fn builder_load_emits_six_edges_with_trailing_strobe() {
    let stim = StimulusBuilder::new().load(0b101101).build();
    let ticks = stim.ticks();
    assert_eq!(ticks.len(), 6);
    let bits: Vec<bool> = ticks.iter().map(|t| t.serial_in).collect();
    assert_eq!(bits, vec![true, false, true, true, false, true]);
    assert!(ticks[..5].iter().all(|t| !t.strobe));
    assert!(ticks[5].strobe);
}

#[test]
fn builder_chains_in_order() {
    let stim = StimulusBuilder::new().shift(&[1, 0]).strobe(1).idle(2).build();
    assert_eq!(stim.len(), 5);
    assert!(stim.ticks()[0].serial_in);
    assert!(stim.ticks()[2].strobe);
    assert!(stim.ticks()[2].serial_in);
    assert!(!stim.ticks()[4].serial_in);
}

// ─── TestContext ────────────────────────────────────────────────────────────

#[test]
fn context_starts_in_reset_state() {
    let ctx = TestContext::new();
    assert_eq!(ctx.din(), 0);
    assert_eq!(ctx.dout(), 0);
    assert_eq!(ctx.latched(), 0);
    assert_eq!(ctx.serial_out(), 0);
    assert!(ctx.trace().is_empty());
}

#[test]
fn context_records_trace() {
    let mut ctx = TestContext::new();
    ctx.feed(&[1, 1, 0]);
    assert_eq!(ctx.trace().len(), 3);
    assert_eq!(ctx.trace()[2].din, 0b110);
}

// ─── Mock blocks ────────────────────────────────────────────────────────────

#[test]
fn inverted_roi_is_complement_of_table() {
    for (v, bit) in TruthTable::ROI.rows() {
        assert_eq!(InvertedRoi.evaluate(v), !bit);
    }
}

#[test]
fn faulty_roi_differs_on_one_vector_only() {
    let faulty = FaultyRoi { stuck: vec6(40) };
    let diffs = TruthTable::ROI
        .rows()
        .filter(|(v, bit)| faulty.evaluate(*v) != *bit)
        .count();
    assert_eq!(diffs, 1);
}
