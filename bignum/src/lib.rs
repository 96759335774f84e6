//! Fixed-footprint arbitrary-precision unsigned integers.
//!
//! A [`BigNum`] is a statically sized array of [`Word`]s; nothing in the
//! engine allocates. Operations take their sources by reference and write an
//! explicit destination:
//!
//! ```
//! use bignum::BigNum;
//!
//! let a = BigNum::from_u64(0x0100);
//! let b = BigNum::from_u64(0x0080);
//! let mut c = BigNum::new();
//! a.add(&b, &mut c);
//! assert_eq!(c.to_hex_string(), "180");
//! ```
//!
//! Addition, subtraction, multiplication, exponentiation and left shifts wrap
//! silently modulo `2^TOTAL_BITS`. Division by zero is reported as
//! [`BigNumError::DivisionByZero`].

pub mod advanced;
pub mod arith;
pub mod bigint;
pub mod bitwise;
pub mod convert;
pub mod error;
pub mod ops;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod word;

pub use bigint::BigNum;
pub use error::BigNumError;
pub use word::{Word, WideWord, DECIMAL_DIGITS, HEX_DIGITS, TOTAL_BITS, WORDS, WORD_BITS};
