//! Bitwise family: per-word logic and logical shifts across the whole array.

use crate::word::{Word, TOTAL_BITS, WORDS, WORD_BITS};
use crate::BigNum;

impl BigNum {
    /// Bitwise AND.
    pub fn and(&self, rhs: &Self, out: &mut Self) {
        for ((o, &a), &b) in out.words.iter_mut().zip(&self.words).zip(&rhs.words) {
            *o = a & b;
        }
    }

    /// Bitwise OR.
    pub fn or(&self, rhs: &Self, out: &mut Self) {
        for ((o, &a), &b) in out.words.iter_mut().zip(&self.words).zip(&rhs.words) {
            *o = a | b;
        }
    }

    /// Bitwise XOR.
    pub fn xor(&self, rhs: &Self, out: &mut Self) {
        for ((o, &a), &b) in out.words.iter_mut().zip(&self.words).zip(&rhs.words) {
            *o = a ^ b;
        }
    }

    /// Bitwise NOT (flip all bits within the width).
    pub fn not(&self, out: &mut Self) {
        for (o, &a) in out.words.iter_mut().zip(&self.words) {
            *o = !a;
        }
    }

    /// `out = self << nbits`. Bits pushed past the top are discarded;
    /// shifting by `TOTAL_BITS` or more yields zero.
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let mut out = BigNum::new();
    /// BigNum::ONE.lshift(&mut out, 8);
    /// assert_eq!(out.to_u64(), 0x100);
    /// ```
    pub fn lshift(&self, out: &mut Self, nbits: usize) {
        if nbits >= TOTAL_BITS {
            out.init();
            return;
        }
        let word_shift = nbits / WORD_BITS;
        let bit_shift = nbits % WORD_BITS;

        for i in (0..WORDS).rev() {
            out.words[i] = if i < word_shift {
                0
            } else {
                let src = i - word_shift;
                let mut w = self.words[src] << bit_shift;
                if bit_shift != 0 && src > 0 {
                    w |= self.words[src - 1] >> (WORD_BITS - bit_shift);
                }
                w
            };
        }
    }

    /// `out = self >> nbits`, filling with zeros. Shifting by `TOTAL_BITS` or
    /// more yields zero.
    pub fn rshift(&self, out: &mut Self, nbits: usize) {
        if nbits >= TOTAL_BITS {
            out.init();
            return;
        }
        let word_shift = nbits / WORD_BITS;
        let bit_shift = nbits % WORD_BITS;

        for i in 0..WORDS {
            let src = i + word_shift;
            out.words[i] = if src >= WORDS {
                0
            } else {
                let mut w = self.words[src] >> bit_shift;
                if bit_shift != 0 && src + 1 < WORDS {
                    w |= self.words[src + 1] << (WORD_BITS - bit_shift);
                }
                w
            };
        }
    }

    /// Shift right by one bit in place.
    pub(crate) fn shr_one(&mut self) {
        let mut carry: Word = 0;
        for w in self.words.iter_mut().rev() {
            let next = *w << (WORD_BITS - 1);
            *w = (*w >> 1) | carry;
            carry = next;
        }
    }
}
