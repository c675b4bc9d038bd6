//! Enumeration of every contiguous subarray, for display purposes.

/// Number of contiguous subarrays of a sequence with `len` elements, `len(len+1)/2`.
///
/// Returns `None` when the count does not fit in `usize`.
///
/// # Example
///
/// ```rust
/// use katas_core::subarray_count;
///
/// assert_eq!(subarray_count(9), Some(45));
/// assert_eq!(subarray_count(usize::MAX), None);
/// ```
pub fn subarray_count(len: usize) -> Option<usize> {
    // Halve the even factor first so only the final product can overflow
    if len % 2 == 0 {
        (len / 2).checked_mul(len + 1)
    } else {
        len.checked_mul(len / 2 + 1)
    }
}

fn exact_count(len: usize) -> u128 {
    let len = len as u128;
    len * (len + 1) / 2
}

fn hint(remaining: u128) -> (usize, Option<usize>) {
    match usize::try_from(remaining) {
        Ok(n) => (n, Some(n)),
        Err(_) => (usize::MAX, None),
    }
}

/// Iterator over all contiguous subarrays of a slice.
///
/// Subarrays come out ordered by start index, then by end index:
/// `[a]`, `[a, b]`, `[a, b, c]`, `[b]`, `[b, c]`, `[c]`.
///
/// The size hint is exact unless the count exceeds `usize::MAX`.
#[derive(Debug, Clone)]
pub struct Subarrays<'a> {
    seq: &'a [i32],
    start: usize,
    end: usize,
    remaining: u128,
}

/// Enumerate every contiguous subarray of `seq` as a borrowed slice.
///
/// # Example
///
/// ```rust
/// use katas_core::enumerate_subarrays;
///
/// let seq = [1, 2, 3];
/// let all: Vec<&[i32]> = enumerate_subarrays(&seq).collect();
/// assert_eq!(
///     all,
///     vec![&[1][..], &[1, 2][..], &[1, 2, 3][..], &[2][..], &[2, 3][..], &[3][..]]
/// );
/// ```
pub fn enumerate_subarrays(seq: &[i32]) -> Subarrays<'_> {
    Subarrays {
        seq,
        start: 0,
        end: 0,
        remaining: exact_count(seq.len()),
    }
}

impl<'a> Iterator for Subarrays<'a> {
    type Item = &'a [i32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.seq.len() {
            return None;
        }

        let item = &self.seq[self.start..=self.end];
        self.remaining -= 1;

        self.end += 1;
        if self.end == self.seq.len() {
            self.start += 1;
            self.end = self.start;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        hint(self.remaining)
    }
}

impl std::iter::FusedIterator for Subarrays<'_> {}
