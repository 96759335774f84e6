//! Exponentiation and integer square root, built on the multiplicative
//! family and the comparator.

use std::cmp::Ordering;

use crate::{BigNum, BigNumError};

impl BigNum {
    /// `out = self ^ exp`, wrapping modulo `2^TOTAL_BITS`.
    ///
    /// Square-and-multiply over the bits of `exp`, least significant first,
    /// so the multiplication count is bounded by twice the bit length of
    /// `exp`. A zero exponent yields one for every base, including `0^0 = 1`.
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let mut out = BigNum::new();
    /// BigNum::from_u64(2).pow(&BigNum::from_u64(10), &mut out);
    /// assert_eq!(out.to_u64(), 1024);
    /// ```
    pub fn pow(&self, exp: &Self, out: &mut Self) {
        let nbits = exp.bits();
        let mut acc = BigNum::ONE;
        let mut base = *self;
        let mut tmp = BigNum::ZERO;

        for i in 0..nbits {
            if exp.bit(i) {
                acc.mul(&base, &mut tmp);
                acc = tmp;
            }
            if i + 1 < nbits {
                base.mul(&base, &mut tmp);
                base = tmp;
            }
        }
        out.assign(&acc);
    }

    /// `out = self ^ exp mod modulus`, reducing after every multiplication.
    ///
    /// Exact as long as `modulus < 2^(TOTAL_BITS / 2)`, so that the product
    /// of two residues fits before reduction. Larger moduli wrap.
    pub fn pow_mod(&self, exp: &Self, modulus: &Self, out: &mut Self) -> Result<(), BigNumError> {
        let mut base = BigNum::ZERO;
        self.modulo(modulus, &mut base)?;
        let mut acc = BigNum::ZERO;
        BigNum::ONE.modulo(modulus, &mut acc)?;
        let mut prod = BigNum::ZERO;

        let nbits = exp.bits();
        for i in 0..nbits {
            if exp.bit(i) {
                acc.mul(&base, &mut prod);
                prod.modulo(modulus, &mut acc)?;
            }
            if i + 1 < nbits {
                base.mul(&base, &mut prod);
                prod.modulo(modulus, &mut base)?;
            }
        }
        out.assign(&acc);
        Ok(())
    }

    /// `out = floor(sqrt(self))`: the largest value whose square is at most
    /// `self`.
    ///
    /// Bisection over `[0, 2^ceil(bits/2) - 1]`. The upper bound keeps every
    /// trial square below `2^TOTAL_BITS`, so no squaring ever wraps.
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let mut out = BigNum::new();
    /// BigNum::from_u64(5).isqrt(&mut out);
    /// assert_eq!(out.to_u64(), 2);
    /// ```
    pub fn isqrt(&self, out: &mut Self) {
        let mut low = BigNum::ZERO;
        let mut high = BigNum::ZERO;
        BigNum::ONE.lshift(&mut high, self.bits().div_ceil(2));
        high.dec();

        let mut mid = BigNum::ZERO;
        let mut span = BigNum::ZERO;
        let mut square = BigNum::ZERO;
        while low.compare(&high) == Ordering::Less {
            // mid = low + (high - low + 1) / 2
            high.sub(&low, &mut span);
            span.inc();
            span.shr_one();
            low.add(&span, &mut mid);

            mid.mul(&mid, &mut square);
            if square.compare(self) == Ordering::Greater {
                high.assign(&mid);
                high.dec();
            } else {
                low.assign(&mid);
            }
        }
        out.assign(&low);
    }
}
