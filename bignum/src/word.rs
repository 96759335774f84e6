//! Word type selection and the double-width primitives every algorithm is
//! built from.
//!
//! The word width is fixed at build time through cargo features. Every
//! intermediate that can exceed one word (carries, borrows, cross-word
//! products) is computed in [`WideWord`] and truncated explicitly.

#[cfg(all(feature = "word-u8", feature = "word-u16"))]
compile_error!("features `word-u8` and `word-u16` are mutually exclusive");

//
// 8-bit words
//

/// Unsigned integer type forming one element of a [`BigNum`](crate::BigNum).
#[cfg(feature = "word-u8")]
pub type Word = u8;

/// Unsigned wide integer type: double the width of [`Word`].
#[cfg(feature = "word-u8")]
pub type WideWord = u16;

//
// 16-bit words
//

/// Unsigned integer type forming one element of a [`BigNum`](crate::BigNum).
#[cfg(all(feature = "word-u16", not(feature = "word-u8")))]
pub type Word = u16;

/// Unsigned wide integer type: double the width of [`Word`].
#[cfg(all(feature = "word-u16", not(feature = "word-u8")))]
pub type WideWord = u32;

//
// 32-bit words (default)
//

/// Unsigned integer type forming one element of a [`BigNum`](crate::BigNum).
#[cfg(not(any(feature = "word-u8", feature = "word-u16")))]
pub type Word = u32;

/// Unsigned wide integer type: double the width of [`Word`].
#[cfg(not(any(feature = "word-u8", feature = "word-u16")))]
pub type WideWord = u64;

/// Size of one word in bits.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Total width of every big number in bits.
pub const TOTAL_BITS: usize = 1024;

/// Number of words in a big number.
pub const WORDS: usize = TOTAL_BITS / WORD_BITS;

/// Hex digits needed to render one word.
pub const WORD_HEX_DIGITS: usize = WORD_BITS / 4;

/// Longest hex string a big number renders to or parses from.
pub const HEX_DIGITS: usize = TOTAL_BITS / 4;

/// Longest decimal rendering: `ceil(TOTAL_BITS * log10(2))`.
pub const DECIMAL_DIGITS: usize = (TOTAL_BITS * 30103).div_ceil(100000);

/// Words occupied by a native `u64`.
pub(crate) const U64_WORDS: usize = if WORDS < 64 / WORD_BITS {
    WORDS
} else {
    64 / WORD_BITS
};

const _: () = assert!(TOTAL_BITS % WORD_BITS == 0);
const _: () = assert!(WideWord::BITS == 2 * Word::BITS);

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let tmp = a as WideWord + b as WideWord + carry as WideWord;
    (tmp as Word, (tmp >> WORD_BITS) as Word)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let tmp = (a as WideWord)
        .wrapping_sub(b as WideWord)
        .wrapping_sub(borrow as WideWord);
    (tmp as Word, (tmp >> (2 * WORD_BITS - 1)) as Word) // borrow is 0 or 1
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
pub(crate) const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let tmp = a as WideWord * b as WideWord + c as WideWord + carry as WideWord;
    (tmp as Word, (tmp >> WORD_BITS) as Word)
}
