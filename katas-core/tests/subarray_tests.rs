//! Agreement tests across the maximum-subarray algorithms

use katas_core::{
    enumerate_subarrays, max_subarray_brute_force, max_subarray_kadane, max_subarray_span,
    subarray_count, SubarrayMethod,
};
use proptest::prelude::*;

#[test]
fn test_canonical_sequence() {
    let seq = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    assert_eq!(max_subarray_brute_force(&seq), Some(6));
    assert_eq!(max_subarray_kadane(&seq), Some(6));

    let span = max_subarray_span(&seq).unwrap();
    assert_eq!(span.slice(&seq), &[4, -1, 2, 1]);
}

#[test]
fn test_edge_shapes() {
    let cases: [(&[i32], Option<i64>); 6] = [
        (&[], None),
        (&[-5], Some(-5)),
        (&[0, 0, 0], Some(0)),
        (&[-3, -1, -2], Some(-1)),
        (&[7], Some(7)),
        (&[1, 2, 3], Some(6)),
    ];
    for (seq, expected) in cases {
        for method in SubarrayMethod::ALL {
            assert_eq!(method.compute(seq), expected, "{method} on {seq:?}");
        }
    }
}

#[test]
fn test_enumeration_matches_brute_force() {
    let seq = [3, -4, 5, -1, 2];
    let best = enumerate_subarrays(&seq)
        .map(|sub| sub.iter().map(|&v| i64::from(v)).sum::<i64>())
        .max();
    assert_eq!(best, max_subarray_brute_force(&seq));
    assert_eq!(Some(enumerate_subarrays(&seq).count()), subarray_count(seq.len()));
}

proptest! {
    #[test]
    fn prop_brute_force_equals_kadane(seq in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(max_subarray_brute_force(&seq), max_subarray_kadane(&seq));
    }

    #[test]
    fn prop_all_methods_agree(seq in prop::collection::vec(-50i32..50, 0..40)) {
        let expected = max_subarray_kadane(&seq);
        for method in SubarrayMethod::ALL {
            prop_assert_eq!(method.compute(&seq), expected);
        }
    }

    #[test]
    fn prop_negative_only(seq in prop::collection::vec(i32::MIN..0, 1..32)) {
        let largest = seq.iter().copied().max().map(i64::from);
        prop_assert_eq!(max_subarray_kadane(&seq), largest);
        prop_assert_eq!(max_subarray_brute_force(&seq), largest);
    }

    #[test]
    fn prop_span_is_consistent(seq in prop::collection::vec(-100i32..100, 1..48)) {
        let span = max_subarray_span(&seq).unwrap();
        let slice_sum: i64 = span.slice(&seq).iter().map(|&v| i64::from(v)).sum();
        prop_assert_eq!(slice_sum, span.sum);
        prop_assert_eq!(Some(span.sum), max_subarray_brute_force(&seq));
    }

    #[test]
    fn prop_enumeration_order(seq in prop::collection::vec(any::<i32>(), 0..16)) {
        let mut expected = Vec::new();
        for start in 0..seq.len() {
            for end in start..seq.len() {
                expected.push(&seq[start..=end]);
            }
        }
        let actual: Vec<&[i32]> = enumerate_subarrays(&seq).collect();
        prop_assert_eq!(actual, expected);
    }
}
