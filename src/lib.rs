//! Bit-scanning primitives over borrowed, word-backed bitmaps.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! Designed for low-level resource tracking (free lists, id allocators)
//! in firmware and other constrained environments, where a
//! bitmap is a plain slice of machine words owned by somebody else.
//!
//! The core is five stateless scans that answer "where" questions:
//!
//! - [`find_first_bit`] / [`find_first_zero_bit`]
//! - [`find_last_bit`]
//! - [`find_next_bit`] / [`find_next_zero_bit`]
//!
//! Each returns a bit index, or the bitmap length `size` when nothing
//! qualifies. [`WordBitmap`] wraps the same scans behind an `Option` API and
//! adds iteration over set and cleared bits.
//!
//! # Examples
//! ```
//! use bitscan::{find_first_zero_bit, find_next_bit, BITS_PER_WORD};
//!
//! let words = [0b1011, 0];
//! let size = 2 * BITS_PER_WORD;
//! assert_eq!(find_first_zero_bit(&words, size), 2);
//! assert_eq!(find_next_bit(&words, size, 2), 3);
//! assert_eq!(find_next_bit(&words, size, 4), size);
//! ```
//!
//! # Layout
//!
//! Bit `i` lives in word `i / BITS_PER_WORD` at offset `i % BITS_PER_WORD`,
//! counted from the least significant bit. When `size` is not a multiple of
//! [`BITS_PER_WORD`], the bits of the final word at or above `size` are
//! padding: they may hold anything and never influence a result.
//!
//! # Features
//!
//! - `selftest` (default): the [`selftest`] module, a firmware-style suite
//!   runner reporting through the `log` facade.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod scan;
#[cfg(feature = "selftest")]
pub mod selftest;
mod view;
mod word;

pub use scan::{
    find_first_bit, find_first_zero_bit, find_last_bit, find_next_bit, find_next_zero_bit,
};
pub use view::{IterOnes, IterZeros, WordBitmap};
pub use word::{first_set_bit, first_zero_bit, last_set_bit};

/// The storage unit of a bitmap: an unsigned integer of native width.
pub type Word = usize;

/// Number of bits in a [`Word`].
pub const BITS_PER_WORD: usize = Word::BITS as usize;

/// Computes the number of words needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use bitscan::{word_count, BITS_PER_WORD};
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(1), 1);
/// assert_eq!(word_count(BITS_PER_WORD), 1);
/// assert_eq!(word_count(BITS_PER_WORD + 1), 2);
/// ```
pub const fn word_count(bit_count: usize) -> usize {
    bit_count.div_ceil(BITS_PER_WORD)
}

/// Returns a word with bits `0..k` set and all others unset.
///
/// Defined for every `k` in `0..=BITS_PER_WORD`.
///
/// # Panics
/// Panics if `k > BITS_PER_WORD`.
///
/// # Examples
/// ```
/// use bitscan::{low_mask, BITS_PER_WORD};
///
/// assert_eq!(low_mask(0), 0);
/// assert_eq!(low_mask(3), 0b111);
/// assert_eq!(low_mask(BITS_PER_WORD), !0);
/// ```
#[inline]
pub const fn low_mask(k: usize) -> Word {
    assert!(k <= BITS_PER_WORD, "mask width out of range");
    if k == BITS_PER_WORD {
        // shift by the full width would overflow
        !0
    } else {
        // k == 0 yields 1 - 1 == 0
        (1 << k) - 1
    }
}

/// Returns a word with bits `k..BITS_PER_WORD` set and all others unset.
///
/// Complement of [`low_mask`], defined for every `k` in `0..=BITS_PER_WORD`.
///
/// # Panics
/// Panics if `k > BITS_PER_WORD`.
///
/// # Examples
/// ```
/// use bitscan::{high_mask, BITS_PER_WORD};
///
/// assert_eq!(high_mask(0), !0);
/// assert_eq!(high_mask(3), !0b111);
/// assert_eq!(high_mask(BITS_PER_WORD), 0);
/// ```
#[inline]
pub const fn high_mask(k: usize) -> Word {
    !low_mask(k)
}
