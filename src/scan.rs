//! Multi-word scans over a borrowed `&[Word]` holding `size` bits.
//!
//! All five return a bit index below `size`, or `size` itself when no bit
//! qualifies. Only the words `0..word_count(size)` are ever read; bits of the
//! final word at or above `size` are masked before they are looked at.
//!
//! # Panics
//! Every function here panics if `words` is shorter than
//! [`word_count(size)`](crate::word_count), whatever the bits hold. The
//! `next` scans check this after the `offset >= size` early return.

use crate::word::{first_set_bit, first_zero_bit, last_set_bit};
use crate::{BITS_PER_WORD, Word, high_mask, low_mask, word_count};

/// Finds the first set bit in the first `size` bits of `words`.
///
/// Returns the index of the lowest set bit, or `size` if none is set.
///
/// # Examples
/// ```
/// use bitscan::{BITS_PER_WORD, find_first_bit};
///
/// assert_eq!(find_first_bit(&[0xDEAD_BEEF], 32), 0);
/// assert_eq!(find_first_bit(&[0b1000], 3), 3);
/// assert_eq!(find_first_bit(&[0, 0b10], 2 * BITS_PER_WORD), BITS_PER_WORD + 1);
/// ```
pub fn find_first_bit(words: &[Word], size: usize) -> usize {
    let words = &words[..word_count(size)];
    let full = size / BITS_PER_WORD;
    for (idx, &word) in words[..full].iter().enumerate() {
        if word != 0 {
            return idx * BITS_PER_WORD + first_set_bit(word);
        }
    }

    let tail = size % BITS_PER_WORD;
    if tail == 0 {
        return size;
    }
    let word = words[full] & low_mask(tail);
    if word == 0 {
        size
    } else {
        full * BITS_PER_WORD + first_set_bit(word)
    }
}

/// Finds the first cleared bit in the first `size` bits of `words`.
///
/// Returns the index of the lowest unset bit, or `size` if every bit is set.
///
/// # Examples
/// ```
/// use bitscan::find_first_zero_bit;
///
/// assert_eq!(find_first_zero_bit(&[0xDEAD_BEEF], 32), 4);
/// assert_eq!(find_first_zero_bit(&[0b0111], 3), 3);
/// ```
pub fn find_first_zero_bit(words: &[Word], size: usize) -> usize {
    let words = &words[..word_count(size)];
    let full = size / BITS_PER_WORD;
    for (idx, &word) in words[..full].iter().enumerate() {
        if word != !0 {
            return idx * BITS_PER_WORD + first_zero_bit(word);
        }
    }

    let tail = size % BITS_PER_WORD;
    if tail == 0 {
        return size;
    }
    // padding reads as set so it can never look like a free bit
    let word = words[full] | high_mask(tail);
    if word == !0 {
        size
    } else {
        full * BITS_PER_WORD + first_zero_bit(word)
    }
}

/// Finds the last set bit in the first `size` bits of `words`.
///
/// Returns the index of the highest set bit, or `size` if none is set.
///
/// # Examples
/// ```
/// use bitscan::find_last_bit;
///
/// assert_eq!(find_last_bit(&[0xFFFF_FFFF], 32), 31);
/// assert_eq!(find_last_bit(&[0b1111], 2), 1);
/// assert_eq!(find_last_bit(&[0], 16), 16);
/// ```
pub fn find_last_bit(words: &[Word], size: usize) -> usize {
    let words = &words[..word_count(size)];
    let full = size / BITS_PER_WORD;

    let tail = size % BITS_PER_WORD;
    if tail != 0 {
        let word = words[full] & low_mask(tail);
        if word != 0 {
            return full * BITS_PER_WORD + last_set_bit(word);
        }
    }

    for (idx, &word) in words[..full].iter().enumerate().rev() {
        if word != 0 {
            return idx * BITS_PER_WORD + last_set_bit(word);
        }
    }
    size
}

/// Finds the next set bit at or after `offset` in the first `size` bits of
/// `words`.
///
/// Returns the index of the lowest set bit in `offset..size`, or `size` if
/// there is none. An `offset` at or beyond `size` returns `size` without
/// reading `words`.
///
/// # Examples
/// ```
/// use bitscan::find_next_bit;
///
/// assert_eq!(find_next_bit(&[0xDEAD_BEEF], 32, 4), 5);
/// assert_eq!(find_next_bit(&[0xDEAD_BEEF], 32, 32), 32);
/// assert_eq!(find_next_bit(&[0b1001], 3, 1), 3);
/// ```
pub fn find_next_bit(words: &[Word], size: usize, offset: usize) -> usize {
    if offset >= size {
        return size;
    }

    let words = &words[..word_count(size)];
    let last = (size - 1) / BITS_PER_WORD;
    let mut idx = offset / BITS_PER_WORD;
    let mut word = words[idx] & high_mask(offset % BITS_PER_WORD);
    loop {
        let base = idx * BITS_PER_WORD;
        if idx == last {
            // 1..=BITS_PER_WORD bits of this word are in range
            word &= low_mask(size - base);
            return if word == 0 {
                size
            } else {
                base + first_set_bit(word)
            };
        }
        if word != 0 {
            return base + first_set_bit(word);
        }
        idx += 1;
        word = words[idx];
    }
}

/// Finds the next cleared bit at or after `offset` in the first `size` bits
/// of `words`.
///
/// Returns the index of the lowest unset bit in `offset..size`, or `size` if
/// there is none. An `offset` at or beyond `size` returns `size` without
/// reading `words`.
///
/// # Examples
/// ```
/// use bitscan::find_next_zero_bit;
///
/// assert_eq!(find_next_zero_bit(&[0xDEAD_BEEF], 32, 5), 8);
/// assert_eq!(find_next_zero_bit(&[0b0110], 3, 1), 3);
/// ```
pub fn find_next_zero_bit(words: &[Word], size: usize, offset: usize) -> usize {
    if offset >= size {
        return size;
    }

    let words = &words[..word_count(size)];
    let last = (size - 1) / BITS_PER_WORD;
    let mut idx = offset / BITS_PER_WORD;
    let mut word = words[idx] | low_mask(offset % BITS_PER_WORD);
    loop {
        let base = idx * BITS_PER_WORD;
        if idx == last {
            word |= high_mask(size - base);
            return if word == !0 {
                size
            } else {
                base + first_zero_bit(word)
            };
        }
        if word != !0 {
            return base + first_zero_bit(word);
        }
        idx += 1;
        word = words[idx];
    }
}
