use bitscan::{
    BITS_PER_WORD, Word, WordBitmap, find_first_bit, find_first_zero_bit, find_last_bit,
    find_next_bit, find_next_zero_bit, high_mask, word_count,
};
use proptest::collection::vec;
use proptest::prelude::*;

const W: usize = BITS_PER_WORD;

fn bit(words: &[Word], idx: usize) -> bool {
    words[idx / W] & (1 << (idx % W)) != 0
}

fn model_next(words: &[Word], size: usize, offset: usize, value: bool) -> usize {
    (offset..size)
        .find(|&i| bit(words, i) == value)
        .unwrap_or(size)
}

fn model_last(words: &[Word], size: usize) -> usize {
    (0..size).rev().find(|&i| bit(words, i)).unwrap_or(size)
}

fn word() -> impl Strategy<Value = Word> {
    prop_oneof![
        any::<Word>(),
        Just(0 as Word),
        Just(!0 as Word),
        (0..W).prop_map(|b| (1 as Word) << b),
        (0..W).prop_map(|b| !((1 as Word) << b)),
    ]
}

/// A bit length, storage for it (sometimes with a spare word) and an offset
/// that may run past the end.
fn bitmap() -> impl Strategy<Value = (Vec<Word>, usize, usize)> {
    (0..4 * W).prop_flat_map(|size| {
        let words = word_count(size);
        (vec(word(), words..=words + 1), Just(size), 0..=size + W)
    })
}

proptest! {
    #[test]
    fn first_bit_matches_model((words, size, _) in bitmap()) {
        prop_assert_eq!(find_first_bit(&words, size), model_next(&words, size, 0, true));
    }

    #[test]
    fn first_zero_bit_matches_model((words, size, _) in bitmap()) {
        prop_assert_eq!(find_first_zero_bit(&words, size), model_next(&words, size, 0, false));
    }

    #[test]
    fn last_bit_matches_model((words, size, _) in bitmap()) {
        prop_assert_eq!(find_last_bit(&words, size), model_last(&words, size));
    }

    #[test]
    fn next_bit_matches_model((words, size, offset) in bitmap()) {
        let found = find_next_bit(&words, size, offset);
        prop_assert_eq!(found, model_next(&words, size, offset, true));
        if offset >= size {
            prop_assert_eq!(found, size);
        } else {
            prop_assert!(found >= offset);
        }
    }

    #[test]
    fn next_zero_bit_matches_model((words, size, offset) in bitmap()) {
        let found = find_next_zero_bit(&words, size, offset);
        prop_assert_eq!(found, model_next(&words, size, offset, false));
        if offset >= size {
            prop_assert_eq!(found, size);
        } else {
            prop_assert!(found >= offset);
        }
    }

    #[test]
    fn first_never_after_last((words, size, _) in bitmap()) {
        let first = find_first_bit(&words, size);
        let last = find_last_bit(&words, size);
        if first == size {
            prop_assert_eq!(last, size);
        } else {
            prop_assert!(first <= last && last < size);
        }
    }

    #[test]
    fn next_from_zero_equals_first((words, size, _) in bitmap()) {
        prop_assert_eq!(find_next_bit(&words, size, 0), find_first_bit(&words, size));
        prop_assert_eq!(find_next_zero_bit(&words, size, 0), find_first_zero_bit(&words, size));
    }

    #[test]
    fn padding_does_not_change_results((words, size, offset) in bitmap()) {
        let tail = size % W;
        prop_assume!(tail != 0);
        let mut flipped = words.clone();
        flipped[size / W] ^= high_mask(tail);
        if let Some(spare) = flipped.get_mut(word_count(size)) {
            *spare = !*spare;
        }

        prop_assert_eq!(find_first_bit(&words, size), find_first_bit(&flipped, size));
        prop_assert_eq!(find_first_zero_bit(&words, size), find_first_zero_bit(&flipped, size));
        prop_assert_eq!(find_last_bit(&words, size), find_last_bit(&flipped, size));
        prop_assert_eq!(
            find_next_bit(&words, size, offset),
            find_next_bit(&flipped, size, offset)
        );
        prop_assert_eq!(
            find_next_zero_bit(&words, size, offset),
            find_next_zero_bit(&flipped, size, offset)
        );
    }

    #[test]
    fn iterators_partition_indices((words, size, _) in bitmap()) {
        let bm = WordBitmap::new(&words, size);
        let ones: Vec<usize> = bm.iter_ones().collect();
        let zeros: Vec<usize> = bm.iter_zeros().collect();

        let expected_ones: Vec<usize> = (0..size).filter(|&i| bit(&words, i)).collect();
        let expected_zeros: Vec<usize> = (0..size).filter(|&i| !bit(&words, i)).collect();
        prop_assert_eq!(&ones, &expected_ones);
        prop_assert_eq!(&zeros, &expected_zeros);
        prop_assert_eq!(ones.len(), bm.count_ones());
        prop_assert_eq!(bm.first_one(), expected_ones.first().copied());
        prop_assert_eq!(bm.last_one(), expected_ones.last().copied());
        prop_assert_eq!(bm.first_zero(), expected_zeros.first().copied());
    }
}

#[test]
fn uniform_bitmaps() {
    for size in [1, 7, W - 1, W, W + 1, 2 * W, 3 * W - 5] {
        let zeros = vec![0 as Word; word_count(size)];
        assert_eq!(find_first_bit(&zeros, size), size);
        assert_eq!(find_first_zero_bit(&zeros, size), 0);
        assert_eq!(find_last_bit(&zeros, size), size);

        let ones = vec![!0 as Word; word_count(size)];
        assert_eq!(find_first_bit(&ones, size), 0);
        assert_eq!(find_first_zero_bit(&ones, size), size);
        assert_eq!(find_last_bit(&ones, size), size - 1);
    }
}
