//! Maximum contiguous-subarray sum.
//!
//! Four algorithms of decreasing cost answer the same question and must agree
//! on every input:
//!
//! | method                        | time  | extra space |
//! |-------------------------------|-------|-------------|
//! | [`max_subarray_cubic`]        | O(n³) | O(1)        |
//! | [`max_subarray_brute_force`]  | O(n²) | O(1)        |
//! | [`max_subarray_prefix_sums`]  | O(n²) | O(n)        |
//! | [`max_subarray_kadane`]       | O(n)  | O(1)        |
//!
//! Elements are `i32` and sums are accumulated in `i64`, which cannot
//! overflow for any slice shorter than 2³² elements. An empty slice has no
//! subarray at all, so every method returns `None` for it instead of a
//! sentinel number.

mod enumerate;

pub use enumerate::{enumerate_subarrays, subarray_count, Subarrays};

use std::fmt;

/// Inclusive index span of a maximum-sum subarray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SubarraySpan {
    /// Index of the first element
    pub start: usize,
    /// Index of the last element (inclusive)
    pub end: usize,
    /// Sum of `seq[start..=end]`
    pub sum: i64,
}

impl SubarraySpan {
    /// Number of elements covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Spans always cover at least one element
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrow the covered elements out of the sequence the span was computed on
    pub fn slice<'a>(&self, seq: &'a [i32]) -> &'a [i32] {
        &seq[self.start..=self.end]
    }
}

/// Sums every subarray from scratch.
pub fn max_subarray_cubic(seq: &[i32]) -> Option<i64> {
    let mut max_sum: Option<i64> = None;
    for start in 0..seq.len() {
        for end in start..seq.len() {
            let sum: i64 = seq[start..=end].iter().map(|&v| i64::from(v)).sum();
            max_sum = Some(max_sum.map_or(sum, |best| best.max(sum)));
        }
    }
    max_sum
}

/// Evaluates every `(start, end)` pair, extending a running sum per start.
///
/// # Example
///
/// ```rust
/// use katas_core::max_subarray_brute_force;
///
/// assert_eq!(max_subarray_brute_force(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
/// assert_eq!(max_subarray_brute_force(&[]), None);
/// ```
pub fn max_subarray_brute_force(seq: &[i32]) -> Option<i64> {
    let mut max_sum: Option<i64> = None;
    for start in 0..seq.len() {
        let mut current_sum = 0i64;
        for &value in &seq[start..] {
            current_sum += i64::from(value);
            max_sum = Some(max_sum.map_or(current_sum, |best| best.max(current_sum)));
        }
    }
    max_sum
}

/// Brute force over all pairs, reading each sum as a difference of prefix sums.
pub fn max_subarray_prefix_sums(seq: &[i32]) -> Option<i64> {
    // prefix[i] = seq[0] + ... + seq[i - 1]
    let mut prefix = Vec::with_capacity(seq.len() + 1);
    prefix.push(0i64);
    for &value in seq {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + i64::from(value));
    }

    let mut max_sum: Option<i64> = None;
    for start in 0..seq.len() {
        for end in start..seq.len() {
            let sum = prefix[end + 1] - prefix[start];
            max_sum = Some(max_sum.map_or(sum, |best| best.max(sum)));
        }
    }
    max_sum
}

/// Kadane's algorithm: one scan, dropping the running prefix once it turns
/// negative.
///
/// Every element takes part in the scan, the first one included, so an
/// all-negative input yields its largest element.
///
/// # Example
///
/// ```rust
/// use katas_core::max_subarray_kadane;
///
/// assert_eq!(max_subarray_kadane(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
/// assert_eq!(max_subarray_kadane(&[-5]), Some(-5));
/// ```
pub fn max_subarray_kadane(seq: &[i32]) -> Option<i64> {
    let mut max_sum: Option<i64> = None;
    let mut current_sum = 0i64;
    for &value in seq {
        current_sum += i64::from(value);
        max_sum = Some(max_sum.map_or(current_sum, |best| best.max(current_sum)));
        if current_sum < 0 {
            current_sum = 0;
        }
    }
    max_sum
}

/// Kadane's algorithm that also reports where the best subarray lies.
///
/// Among spans with the maximum sum, this returns the one that ends first and,
/// for that end, starts last (a zero-sum prefix is never included).
pub fn max_subarray_span(seq: &[i32]) -> Option<SubarraySpan> {
    let first = *seq.first()?;
    let mut best = SubarraySpan {
        start: 0,
        end: 0,
        sum: i64::from(first),
    };

    let mut current_start = 0;
    let mut current_sum = 0i64;
    for (index, &value) in seq.iter().enumerate() {
        if current_sum <= 0 {
            current_start = index;
            current_sum = 0;
        }
        current_sum += i64::from(value);
        if current_sum > best.sum {
            best = SubarraySpan {
                start: current_start,
                end: index,
                sum: current_sum,
            };
        }
    }

    log::trace!(
        "max subarray of {} elements spans {}..={} with sum {}",
        seq.len(),
        best.start,
        best.end,
        best.sum
    );
    Some(best)
}

/// Names one of the maximum-subarray algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SubarrayMethod {
    /// O(n³) recomputation of every subarray
    Cubic,
    /// O(n²) running sum per start index
    BruteForce,
    /// O(n²) prefix-sum differences
    PrefixSums,
    /// O(n) Kadane's algorithm
    Kadane,
}

impl SubarrayMethod {
    /// Every method, slowest first
    pub const ALL: [SubarrayMethod; 4] = [
        SubarrayMethod::Cubic,
        SubarrayMethod::BruteForce,
        SubarrayMethod::PrefixSums,
        SubarrayMethod::Kadane,
    ];

    /// Human-readable method name
    pub fn name(&self) -> &'static str {
        match self {
            SubarrayMethod::Cubic => "Brute Force (cubic)",
            SubarrayMethod::BruteForce => "Brute Force",
            SubarrayMethod::PrefixSums => "Prefix Sums",
            SubarrayMethod::Kadane => "Kadane's Algorithm",
        }
    }

    /// Run this method on `seq`
    pub fn compute(&self, seq: &[i32]) -> Option<i64> {
        match self {
            SubarrayMethod::Cubic => max_subarray_cubic(seq),
            SubarrayMethod::BruteForce => max_subarray_brute_force(seq),
            SubarrayMethod::PrefixSums => max_subarray_prefix_sums(seq),
            SubarrayMethod::Kadane => max_subarray_kadane(seq),
        }
    }
}

impl fmt::Display for SubarrayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
