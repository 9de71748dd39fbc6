use crate::scan::{
    find_first_bit, find_first_zero_bit, find_last_bit, find_next_bit, find_next_zero_bit,
};
use crate::{BITS_PER_WORD, Word, low_mask, word_count};
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

/// A read-only view of `len` bits stored in a borrowed slice of words.
///
/// The view never copies, allocates or mutates the words it borrows. Bits of
/// the final word at or above `len` are treated as padding and ignored by
/// every method.
///
/// Scans return `None` where the free functions in this crate return their
/// `size` sentinel.
///
/// # Examples
/// ```
/// use bitscan::WordBitmap;
///
/// let words = [0b0010_0110];
/// let bm = WordBitmap::new(&words, 8);
/// assert_eq!(bm.first_one(), Some(1));
/// assert_eq!(bm.last_one(), Some(5));
/// assert_eq!(bm.next_zero(1), Some(3));
/// ```
#[derive(Clone, Copy)]
pub struct WordBitmap<'words> {
    words: &'words [Word],
    len: usize,
}

impl<'words> WordBitmap<'words> {
    /// Creates a view of the first `len` bits of `words`.
    ///
    /// Words beyond [`word_count(len)`](crate::word_count) are not part of
    /// the view.
    ///
    /// # Panics
    /// Panics if `words` holds fewer than `len` bits. In a const context this
    /// is a compile error.
    ///
    /// # Examples
    /// ```
    /// use bitscan::WordBitmap;
    ///
    /// const FREE_MAP: WordBitmap<'static> = WordBitmap::new(&[0xF0], 8);
    /// assert_eq!(FREE_MAP.len(), 8);
    /// assert_eq!(FREE_MAP.first_one(), Some(4));
    /// ```
    pub const fn new(words: &'words [Word], len: usize) -> Self {
        assert!(
            words.len() >= word_count(len),
            "Word storage too short for bit length"
        );
        Self { words, len }
    }

    /// Creates a view covering every bit of `words`.
    ///
    /// # Examples
    /// ```
    /// use bitscan::{WordBitmap, BITS_PER_WORD};
    ///
    /// let words = [0, 0, 0];
    /// assert_eq!(WordBitmap::from_words(&words).len(), 3 * BITS_PER_WORD);
    /// ```
    pub const fn from_words(words: &'words [Word]) -> Self {
        Self {
            words,
            len: words.len() * BITS_PER_WORD,
        }
    }

    /// Returns the number of bits in the view.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view holds no bits.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the backing words that hold the view's bits.
    ///
    /// The final word may carry padding bits at or above [`len`].
    ///
    /// [`len`]: WordBitmap::len
    #[inline]
    pub fn words(&self) -> &'words [Word] {
        let words = self.words;
        &words[..word_count(self.len)]
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// Panics if `idx >= len`.
    ///
    /// # Examples
    /// ```
    /// use bitscan::WordBitmap;
    ///
    /// let bm = WordBitmap::new(&[0b10], 4);
    /// assert!(bm.is_set(1));
    /// assert!(!bm.is_set(0));
    /// ```
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        assert!(idx < self.len, "Bit index {idx} out of bounds");
        let (word_idx, bit_idx) = Self::idxs(idx);
        self.words[word_idx] & 1 << bit_idx != 0
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / BITS_PER_WORD, idx % BITS_PER_WORD)
    }

    /// Returns the number of set bits, ignoring padding.
    ///
    /// # Examples
    /// ```
    /// use bitscan::WordBitmap;
    ///
    /// // bits 4..8 are padding
    /// let bm = WordBitmap::new(&[0xFF], 4);
    /// assert_eq!(bm.count_ones(), 4);
    /// ```
    pub fn count_ones(&self) -> usize {
        let full = self.len / BITS_PER_WORD;
        let whole: usize = self.words[..full]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        let tail = self.len % BITS_PER_WORD;
        if tail == 0 {
            whole
        } else {
            whole + (self.words[full] & low_mask(tail)).count_ones() as usize
        }
    }

    /// Returns the index of the first set bit or `None` if all bits are unset.
    #[inline]
    pub fn first_one(&self) -> Option<usize> {
        self.found(find_first_bit(self.words, self.len))
    }

    /// Returns the index of the first unset bit or `None` if all bits are set.
    ///
    /// # Examples
    /// ```
    /// use bitscan::WordBitmap;
    ///
    /// assert_eq!(WordBitmap::new(&[0b0111], 3).first_zero(), None);
    /// assert_eq!(WordBitmap::new(&[0b0111], 4).first_zero(), Some(3));
    /// ```
    #[inline]
    pub fn first_zero(&self) -> Option<usize> {
        self.found(find_first_zero_bit(self.words, self.len))
    }

    /// Returns the index of the last set bit or `None` if all bits are unset.
    #[inline]
    pub fn last_one(&self) -> Option<usize> {
        self.found(find_last_bit(self.words, self.len))
    }

    /// Returns the index of the first set bit at or after `from`, or `None`.
    ///
    /// `from >= len` always yields `None`.
    #[inline]
    pub fn next_one(&self, from: usize) -> Option<usize> {
        self.found(find_next_bit(self.words, self.len, from))
    }

    /// Returns the index of the first unset bit at or after `from`, or `None`.
    ///
    /// `from >= len` always yields `None`.
    #[inline]
    pub fn next_zero(&self, from: usize) -> Option<usize> {
        self.found(find_next_zero_bit(self.words, self.len, from))
    }

    #[inline]
    fn found(&self, idx: usize) -> Option<usize> {
        (idx < self.len).then_some(idx)
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use bitscan::WordBitmap;
    ///
    /// let bm = WordBitmap::new(&[0b1_0101], 5);
    /// let mut ones = bm.iter_ones();
    /// assert_eq!(ones.next(), Some(0));
    /// assert_eq!(ones.next(), Some(2));
    /// assert_eq!(ones.next(), Some(4));
    /// assert_eq!(ones.next(), None);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'words> {
        IterOnes {
            bitmap: *self,
            next_idx: 0,
        }
    }

    /// Returns an iterator over the indices of all unset bits, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use bitscan::WordBitmap;
    ///
    /// let bm = WordBitmap::new(&[0b1_0101], 5);
    /// let mut zeros = bm.iter_zeros();
    /// assert_eq!(zeros.next(), Some(1));
    /// assert_eq!(zeros.next(), Some(3));
    /// assert_eq!(zeros.next(), None);
    /// ```
    #[inline]
    pub fn iter_zeros(&self) -> IterZeros<'words> {
        IterZeros {
            bitmap: *self,
            next_idx: 0,
        }
    }
}

impl Debug for WordBitmap<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for i in 0..self.len {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if self.is_set(i) { '1' } else { '0' })?;
            if i % 8 == 7 && i < self.len - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

/// Iterator over the indices of set bits in a [`WordBitmap`].
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`WordBitmap::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'words> {
    bitmap: WordBitmap<'words>,
    next_idx: usize,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.bitmap.next_one(self.next_idx)?;
        self.next_idx = idx + 1;
        Some(idx)
    }
}

impl FusedIterator for IterOnes<'_> {}

/// Iterator over the indices of unset bits in a [`WordBitmap`].
///
/// Yields the positions of all bits that are unset, in ascending order.
///
/// Returned by [`WordBitmap::iter_zeros()`].
#[derive(Clone, Copy)]
pub struct IterZeros<'words> {
    bitmap: WordBitmap<'words>,
    next_idx: usize,
}

impl Iterator for IterZeros<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.bitmap.next_zero(self.next_idx)?;
        self.next_idx = idx + 1;
        Some(idx)
    }
}

impl FusedIterator for IterZeros<'_> {}
