//! Operator sugar over the named operations.
//!
//! Each operator allocates a fresh destination on the stack and delegates to
//! the explicit-destination form, with the same wraparound behaviour. `/` and
//! `%` panic on a zero divisor, like the primitive integers.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

use crate::BigNum;

macro_rules! binary_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait for BigNum {
            type Output = BigNum;

            #[inline]
            fn $method(self, rhs: BigNum) -> BigNum {
                let mut out = BigNum::ZERO;
                BigNum::$op(&self, &rhs, &mut out);
                out
            }
        }
    };
}

binary_op!(Add, add, add);
binary_op!(Sub, sub, sub);
binary_op!(Mul, mul, mul);
binary_op!(BitAnd, bitand, and);
binary_op!(BitOr, bitor, or);
binary_op!(BitXor, bitxor, xor);

impl Div for BigNum {
    type Output = BigNum;

    fn div(self, rhs: BigNum) -> BigNum {
        let mut out = BigNum::ZERO;
        if BigNum::div(&self, &rhs, &mut out).is_err() {
            panic!("attempt to divide by zero");
        }
        out
    }
}

impl Rem for BigNum {
    type Output = BigNum;

    fn rem(self, rhs: BigNum) -> BigNum {
        let mut out = BigNum::ZERO;
        if self.modulo(&rhs, &mut out).is_err() {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
        out
    }
}

impl Not for BigNum {
    type Output = BigNum;

    fn not(self) -> BigNum {
        let mut out = BigNum::ZERO;
        BigNum::not(&self, &mut out);
        out
    }
}

impl Shl<usize> for BigNum {
    type Output = BigNum;

    fn shl(self, nbits: usize) -> BigNum {
        let mut out = BigNum::ZERO;
        self.lshift(&mut out, nbits);
        out
    }
}

impl Shr<usize> for BigNum {
    type Output = BigNum;

    fn shr(self, nbits: usize) -> BigNum {
        let mut out = BigNum::ZERO;
        self.rshift(&mut out, nbits);
        out
    }
}
