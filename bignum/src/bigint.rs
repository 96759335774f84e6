//! Fixed-width unsigned big integers: `TOTAL_BITS` bits held in `WORDS`
//! statically allocated words.
//!
//! Every operation reads its source operands by shared reference and writes a
//! distinct destination, so a destination can never alias a live source.
//!
//! # Overflow
//!
//! Results that do not fit the fixed width wrap silently: addition,
//! subtraction, multiplication, exponentiation and left shifts are all
//! computed modulo `2^TOTAL_BITS`. Use the `checked_*` variants to detect it.

use std::cmp::Ordering;

use crate::word::{Word, U64_WORDS, WORDS, WORD_BITS};

/// Fixed-width unsigned big integer.
///
/// Words are stored in little-endian order (`words[0]` is least significant).
/// The all-zero array is the only representation of zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigNum {
    pub(crate) words: [Word; WORDS],
}

impl Default for BigNum {
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Representation & initialization
// ============================================================================

impl BigNum {
    /// The value `0`.
    pub const ZERO: Self = Self { words: [0; WORDS] };

    /// The value `1`.
    pub const ONE: Self = {
        let mut words = [0; WORDS];
        words[0] = 1;
        Self { words }
    };

    /// The largest representable value, `2^TOTAL_BITS - 1`.
    pub const MAX: Self = Self {
        words: [Word::MAX; WORDS],
    };

    /// Create a zero value.
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let z = BigNum::new();
    /// assert!(z.is_zero());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Construct from raw words (LE order).
    #[inline]
    pub const fn from_words(words: [Word; WORDS]) -> Self {
        Self { words }
    }

    /// Reset to zero.
    #[inline]
    pub fn init(&mut self) {
        self.words = [0; WORDS];
    }

    /// Load a native integer into the low-order words, zeroing the rest.
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let b = BigNum::from_u64(42);
    /// assert_eq!(b.to_u64(), 42);
    /// ```
    pub const fn from_u64(val: u64) -> Self {
        let mut words = [0; WORDS];
        let mut i = 0;
        while i < U64_WORDS {
            words[i] = (val >> (i * WORD_BITS)) as Word;
            i += 1;
        }
        Self { words }
    }

    /// Read back the low-order words as a native integer.
    ///
    /// This narrows: any bits above the lowest 64 are ignored. Use the hex
    /// or decimal conversions when the full value is needed.
    pub fn to_u64(&self) -> u64 {
        self.words[..U64_WORDS]
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &w)| acc | (w as u64) << (i * WORD_BITS))
    }

    /// Copy every word of `src` into `self`.
    ///
    /// The two values share no storage after the call.
    #[inline]
    pub fn assign(&mut self, src: &Self) {
        self.words = src.words;
    }

    /// Words slice (LE order).
    #[inline]
    pub fn words(&self) -> &[Word; WORDS] {
        &self.words
    }

    /// Number of significant bits; zero for the value zero.
    pub fn bits(&self) -> usize {
        match self.words.iter().rposition(|&w| w != 0) {
            Some(i) => i * WORD_BITS + (WORD_BITS - self.words[i].leading_zeros() as usize),
            None => 0,
        }
    }

    /// Whether bit `i` is set. Bits at or beyond the width read as unset.
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        i < WORDS * WORD_BITS && (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    #[inline]
    pub(crate) fn set_bit(&mut self, i: usize) {
        self.words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
    }
}

// ============================================================================
// Comparator
// ============================================================================

impl BigNum {
    /// Compare two values, scanning from the most significant word down.
    ///
    /// This is the sole ordering primitive; [`Ord`] is defined through it.
    pub fn compare(&self, other: &Self) -> Ordering {
        for i in (0..WORDS).rev() {
            match self.words[i].cmp(&other.words[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl From<u64> for BigNum {
    fn from(val: u64) -> Self {
        Self::from_u64(val)
    }
}

impl From<u32> for BigNum {
    fn from(val: u32) -> Self {
        Self::from_u64(val as u64)
    }
}
