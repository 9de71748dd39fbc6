//! Single-word scans.
//!
//! These are the building blocks the multi-word scans delegate to once they
//! have found the word holding the answer. Each has a precondition on its
//! input that the callers in this crate establish before calling. Violating
//! it trips a debug assertion; in release builds the result is meaningless
//! but still within `0..=BITS_PER_WORD`.

use crate::{BITS_PER_WORD, Word};

/// Returns the index of the lowest set bit of `word`.
///
/// `word` must not be zero.
///
/// # Examples
/// ```
/// use bitscan::first_set_bit;
///
/// assert_eq!(first_set_bit(0b1000), 3);
/// assert_eq!(first_set_bit(0xDEAD_BEEF), 0);
/// ```
#[inline]
pub const fn first_set_bit(word: Word) -> usize {
    debug_assert!(word != 0, "first_set_bit of a zero word");
    word.trailing_zeros() as usize
}

/// Returns the index of the lowest unset bit of `word`.
///
/// `word` must not have every bit set.
///
/// # Examples
/// ```
/// use bitscan::first_zero_bit;
///
/// assert_eq!(first_zero_bit(0b0111), 3);
/// assert_eq!(first_zero_bit(0xDEAD_BEEF), 4);
/// ```
#[inline]
pub const fn first_zero_bit(word: Word) -> usize {
    debug_assert!(word != !0, "first_zero_bit of a full word");
    word.trailing_ones() as usize
}

/// Returns the index of the highest set bit of `word`.
///
/// `word` must not be zero.
///
/// # Examples
/// ```
/// use bitscan::last_set_bit;
///
/// assert_eq!(last_set_bit(0b1010), 3);
/// assert_eq!(last_set_bit(0xFFFF_FFFF), 31);
/// ```
#[inline]
pub const fn last_set_bit(word: Word) -> usize {
    debug_assert!(word != 0, "last_set_bit of a zero word");
    // a zero word has BITS_PER_WORD leading zeros
    (BITS_PER_WORD - 1).saturating_sub(word.leading_zeros() as usize)
}
