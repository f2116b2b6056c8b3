//! # Truth Table Tests
//!
//! Bit-indexing convention of the LUT6 INIT word: bit `i` is the output for
//! input vector `i`, bit 0 being the least-significant.

use roi_harness_core::common::InputVector;
use roi_harness_core::roi::TruthTable;
use rstest::rstest;

const INIT: u64 = 0x8000_DEAD_0000_0001;

fn lookup(v: u8) -> bool {
    TruthTable::ROI.lookup(InputVector::new(v).unwrap())
}

#[test]
fn test_init_word_is_verbatim() {
    assert_eq!(TruthTable::ROI.init(), INIT);
    assert_eq!(TruthTable::default(), TruthTable::ROI);
}

#[test]
fn test_vector_zero_maps_to_lsb() {
    // ...0001
    assert!(lookup(0));
}

#[test]
fn test_all_ones_maps_to_msb() {
    // 8...
    assert!(lookup(63));
}

#[rstest]
// 0xDEAD occupies bits 32..47: 1101_1110_1010_1101
#[case(32, true)]
#[case(33, false)]
#[case(34, true)]
#[case(35, true)]
#[case(36, false)]
#[case(37, true)]
#[case(38, false)]
#[case(39, true)]
#[case(40, false)]
#[case(41, true)]
#[case(42, true)]
#[case(43, true)]
#[case(44, true)]
#[case(45, false)]
#[case(46, true)]
#[case(47, true)]
fn test_dead_region(#[case] v: u8, #[case] expected: bool) {
    assert_eq!(lookup(v), expected);
}

#[rstest]
#[case(1)]
#[case(15)]
#[case(31)]
#[case(48)]
#[case(62)]
fn test_zero_regions(#[case] v: u8) {
    assert!(!lookup(v));
}

#[test]
fn test_every_row_matches_init_bit() {
    for v in 0..64u8 {
        assert_eq!(lookup(v), (INIT >> v) & 1 == 1, "row {v}");
    }
}

#[test]
fn test_ones_count() {
    // 1 (bit 0) + 11 (0xDEAD) + 1 (bit 63)
    assert_eq!(TruthTable::ROI.ones(), 13);
    assert_eq!(TruthTable::ROI.rows().filter(|(_, b)| *b).count(), 13);
}

#[test]
fn test_rows_cover_every_vector_once() {
    let table = TruthTable::ROI;
    assert_eq!(table.len(), 64);
    assert!(!table.is_empty());
    let rows: Vec<u8> = table.rows().map(|(v, _)| v.val()).collect();
    assert_eq!(rows, (0..64).collect::<Vec<u8>>());
}
