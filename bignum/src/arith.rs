//! Additive and multiplicative families.
//!
//! All operations wrap modulo `2^TOTAL_BITS`. Division is the exception: a
//! zero divisor is reported, never answered.

use std::cmp::Ordering;

use crate::word::{adc, mac, sbb, Word, WORDS};
use crate::{BigNum, BigNumError};

// ============================================================================
// Word-array kernels
// ============================================================================

/// `lhs += rhs`, returning the carry out of the top word.
#[inline]
fn add_assign_words(lhs: &mut [Word; WORDS], rhs: &[Word; WORDS]) -> bool {
    let mut carry = 0;
    for (l, &r) in lhs.iter_mut().zip(rhs.iter()) {
        (*l, carry) = adc(*l, r, carry);
    }
    carry != 0
}

/// `lhs -= rhs`, returning the borrow out of the top word.
#[inline]
pub(crate) fn sub_assign_words(lhs: &mut [Word; WORDS], rhs: &[Word; WORDS]) -> bool {
    let mut borrow = 0;
    for (l, &r) in lhs.iter_mut().zip(rhs.iter()) {
        (*l, borrow) = sbb(*l, r, borrow);
    }
    borrow != 0
}

/// Schoolbook product truncated to `WORDS` words, plus whether anything was
/// truncated.
fn mul_words(a: &[Word; WORDS], b: &[Word; WORDS], out: &mut [Word; WORDS]) -> bool {
    *out = [0; WORDS];
    let mut overflow = false;
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0;
        for j in 0..WORDS - i {
            (out[i + j], carry) = mac(ai, b[j], out[i + j], carry);
        }
        // Partial products landing past the top word are dropped.
        overflow |= carry != 0 || b[WORDS - i..].iter().any(|&w| w != 0);
    }
    overflow
}

// ============================================================================
// Additive family
// ============================================================================

impl BigNum {
    /// `out = self + rhs`, wrapping on overflow.
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let mut c = BigNum::new();
    /// BigNum::from_u64(0x0100).add(&BigNum::from_u64(0x0080), &mut c);
    /// assert_eq!(c.to_u64(), 0x0180);
    /// ```
    #[inline]
    pub fn add(&self, rhs: &Self, out: &mut Self) {
        self.overflowing_add(rhs, out);
    }

    /// `out = self + rhs`, returning whether a carry left the top word.
    pub fn overflowing_add(&self, rhs: &Self, out: &mut Self) -> bool {
        out.words = self.words;
        add_assign_words(&mut out.words, &rhs.words)
    }

    /// `out = self + rhs`, or [`BigNumError::Overflow`] if it does not fit.
    pub fn checked_add(&self, rhs: &Self, out: &mut Self) -> Result<(), BigNumError> {
        if self.overflowing_add(rhs, out) {
            return Err(BigNumError::Overflow);
        }
        Ok(())
    }

    /// `out = self - rhs`.
    ///
    /// Callers must guarantee `self >= rhs`. When they do not, the result
    /// wraps modulo `2^TOTAL_BITS`, symmetric with [`add`](Self::add): for
    /// example `0 - 1` yields [`BigNum::MAX`].
    #[inline]
    pub fn sub(&self, rhs: &Self, out: &mut Self) {
        self.overflowing_sub(rhs, out);
    }

    /// `out = self - rhs`, returning whether a borrow left the top word
    /// (that is, whether `self < rhs`).
    pub fn overflowing_sub(&self, rhs: &Self, out: &mut Self) -> bool {
        out.words = self.words;
        sub_assign_words(&mut out.words, &rhs.words)
    }

    /// `out = self - rhs`, or [`BigNumError::Underflow`] when `self < rhs`.
    pub fn checked_sub(&self, rhs: &Self, out: &mut Self) -> Result<(), BigNumError> {
        if self.compare(rhs) == Ordering::Less {
            return Err(BigNumError::Underflow);
        }
        self.sub(rhs, out);
        Ok(())
    }

    /// Add one in place, stopping as soon as no carry remains.
    /// [`BigNum::MAX`] wraps to zero.
    pub fn inc(&mut self) {
        for w in self.words.iter_mut() {
            let (r, overflow) = w.overflowing_add(1);
            *w = r;
            if !overflow {
                break;
            }
        }
    }

    /// Subtract one in place, stopping as soon as no borrow remains.
    /// Zero wraps to [`BigNum::MAX`].
    pub fn dec(&mut self) {
        for w in self.words.iter_mut() {
            let (r, underflow) = w.overflowing_sub(1);
            *w = r;
            if !underflow {
                break;
            }
        }
    }
}

// ============================================================================
// Multiplicative family
// ============================================================================

impl BigNum {
    /// `out = self * rhs`, keeping only the low `TOTAL_BITS` bits.
    #[inline]
    pub fn mul(&self, rhs: &Self, out: &mut Self) {
        mul_words(&self.words, &rhs.words, &mut out.words);
    }

    /// `out = self * rhs`, or [`BigNumError::Overflow`] if the full product
    /// does not fit. `out` holds the truncated product either way.
    pub fn checked_mul(&self, rhs: &Self, out: &mut Self) -> Result<(), BigNumError> {
        if mul_words(&self.words, &rhs.words, &mut out.words) {
            return Err(BigNumError::Overflow);
        }
        Ok(())
    }

    /// Binary long division: `quot = self / rhs`, `rem = self % rhs`.
    ///
    /// The divisor is aligned under the dividend's top bit, then walked back
    /// down one bit at a time, subtracting wherever it fits. The loop runs
    /// once per bit of difference in operand length.
    ///
    /// ```
    /// use bignum::{BigNum, BigNumError};
    ///
    /// let (mut q, mut r) = (BigNum::new(), BigNum::new());
    /// BigNum::from_u64(0x0100).divmod(&BigNum::from_u64(0x0080), &mut q, &mut r).unwrap();
    /// assert_eq!((q.to_u64(), r.to_u64()), (2, 0));
    ///
    /// let err = BigNum::ONE.divmod(&BigNum::new(), &mut q, &mut r);
    /// assert_eq!(err, Err(BigNumError::DivisionByZero));
    /// ```
    pub fn divmod(&self, rhs: &Self, quot: &mut Self, rem: &mut Self) -> Result<(), BigNumError> {
        if rhs.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        quot.init();
        rem.assign(self);
        if self.compare(rhs) == Ordering::Less {
            return Ok(());
        }

        let shift = self.bits() - rhs.bits();
        let mut denom = BigNum::ZERO;
        rhs.lshift(&mut denom, shift);

        for i in (0..=shift).rev() {
            if rem.compare(&denom) != Ordering::Less {
                sub_assign_words(&mut rem.words, &denom.words);
                quot.set_bit(i);
            }
            denom.shr_one();
        }
        Ok(())
    }

    /// `out = self / rhs`.
    #[inline]
    pub fn div(&self, rhs: &Self, out: &mut Self) -> Result<(), BigNumError> {
        let mut rem = BigNum::ZERO;
        self.divmod(rhs, out, &mut rem)
    }

    /// `out = self % rhs`.
    #[inline]
    pub fn modulo(&self, rhs: &Self, out: &mut Self) -> Result<(), BigNumError> {
        let mut quot = BigNum::ZERO;
        self.divmod(rhs, &mut quot, out)
    }

    /// Divide by a single word, returning the remainder. Used by decimal
    /// rendering, where the divisor is always a small constant.
    pub(crate) fn div_rem_word(&mut self, divisor: Word) -> Word {
        use crate::word::{WideWord, WORD_BITS};

        let mut rem: WideWord = 0;
        for w in self.words.iter_mut().rev() {
            let acc = (rem << WORD_BITS) | *w as WideWord;
            *w = (acc / divisor as WideWord) as Word;
            rem = acc % divisor as WideWord;
        }
        rem as Word
    }

    /// `self = self * factor + addend` for single-word operands, returning
    /// the carry out of the top word.
    pub(crate) fn mul_add_word(&mut self, factor: Word, addend: Word) -> Word {
        let mut carry = addend;
        for w in self.words.iter_mut() {
            (*w, carry) = mac(*w, factor, 0, carry);
        }
        carry
    }
}
