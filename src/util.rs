//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! candidate digits, and the shuffle function used to randomize candidate
//! order.

use rand::Rng;

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit of a `u16`. This generally has better
/// performance than a `HashSet` and is trivially copyable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    mask: u16
}

/// An iterator over the digits contained in a [DigitSet] in ascending order.
pub struct DigitSetIter {
    digit: u8,
    mask: u16
}

impl Iterator for DigitSetIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.mask != 0 {
            let digit = self.digit;
            let found = self.mask & 1 != 0;
            self.digit += 1;
            self.mask >>= 1;

            if found {
                return Some(digit);
            }
        }

        None
    }
}

const DIGIT_MIN: u8 = 1;
const DIGIT_MAX: u8 = 9;
const FULL_MASK: u16 = (1 << (DIGIT_MAX - DIGIT_MIN + 1)) - 1;

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn new() -> DigitSet {
        DigitSet {
            mask: 0
        }
    }

    /// Creates a new `DigitSet` that contains all digits from 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet {
            mask: FULL_MASK
        }
    }

    fn bit(digit: u8) -> Option<u16> {
        if digit < DIGIT_MIN || digit > DIGIT_MAX {
            None
        }
        else {
            Some(1 << (digit - DIGIT_MIN))
        }
    }

    /// Indicates whether this set contains the given digit, in which case
    /// this method returns `true`. Digits outside the range `[1, 9]` are
    /// never contained.
    pub fn contains(&self, digit: u8) -> bool {
        match DigitSet::bit(digit) {
            Some(bit) => self.mask & bit != 0,
            None => false
        }
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards. Digits outside the range `[1, 9]`
    /// are ignored.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// not present before) and `false` otherwise.
    pub fn insert(&mut self, digit: u8) -> bool {
        match DigitSet::bit(digit) {
            Some(bit) => {
                let changed = self.mask & bit == 0;
                self.mask |= bit;
                changed
            },
            None => false
        }
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards. Digits outside the range `[1, 9]`
    /// are ignored.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// present before) and `false` otherwise.
    pub fn remove(&mut self, digit: u8) -> bool {
        match DigitSet::bit(digit) {
            Some(bit) => {
                let changed = self.mask & bit != 0;
                self.mask &= !bit;
                changed
            },
            None => false
        }
    }

    /// Indicates whether this set is empty, i.e. contains no digits.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns an iterator over the digits contained in this set in ascending
    /// order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            digit: DIGIT_MIN,
            mask: self.mask
        }
    }
}

impl Default for DigitSet {
    fn default() -> DigitSet {
        DigitSet::new()
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}

/// Collects the given values into a vector and permutes it with a uniform
/// Fisher-Yates shuffle driven by the given random number generator. Every
/// permutation of the input is equally likely.
pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..len.saturating_sub(1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}
