//! Small algorithms implemented several ways and cross-checked against each
//! other.
//!
//! The crate has three independent modules:
//! - **[`factorial`]**: `n!` by iteration and by recursion
//! - **[`subarray`]**: maximum contiguous-subarray sum, from O(n³) brute force
//!   down to Kadane's O(n) scan, plus an enumerator of all subarrays
//! - **[`word_count`]**: four word-counting strategies whose deliberate
//!   disagreements document how tokenization choices matter
//!
//! Every function is pure. Invalid input is reported through
//! [`KataError::InvalidArgument`] before any work is done.
//!
//! # Example
//!
//! ```rust
//! use katas_core::{factorial_iterative, max_subarray_kadane, count_manual_scan};
//!
//! assert_eq!(factorial_iterative(5).unwrap(), 120);
//! assert_eq!(max_subarray_kadane(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
//! assert_eq!(count_manual_scan(" abc  def ghi ").unwrap(), 3);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod factorial;
pub mod subarray;
pub mod word_count;

pub use error::{KataError, Result};
pub use factorial::{
    factorial_iterative, factorial_recursive, factorial_table, FactorialMethod,
    MAX_FACTORIAL_INPUT,
};
pub use subarray::{
    enumerate_subarrays, max_subarray_brute_force, max_subarray_cubic, max_subarray_kadane,
    max_subarray_prefix_sums, max_subarray_span, subarray_count, SubarrayMethod, SubarraySpan,
    Subarrays,
};
pub use word_count::{
    count_manual_scan, count_regex_word_boundary, count_simple_split, count_split_remove_empty,
    count_words, require_text, WordCountStrategy,
};
