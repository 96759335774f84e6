//! Conversion layer: base-16 and decimal interchange.
//!
//! Rendering writes into caller-provided buffers and never allocates; a
//! buffer that cannot hold the digits plus the NUL terminator is rejected
//! before anything is written. Parsing rejects input that does not fit
//! rather than truncating it.

use std::fmt;
use std::str::FromStr;

use crate::word::{Word, DECIMAL_DIGITS, HEX_DIGITS, WORD_BITS, WORD_HEX_DIGITS};
use crate::{BigNum, BigNumError};

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Parse a single ASCII digit of the given radix.
fn digit(ch: char, radix: u32, index: usize) -> Result<Word, BigNumError> {
    ch.to_digit(radix)
        .map(|d| d as Word)
        .ok_or(BigNumError::InvalidDigit { ch, index })
}

/// View a freshly rendered ASCII prefix of `buf` as a string.
fn ascii_str(buf: &[u8]) -> &str {
    std::str::from_utf8(buf).expect("rendered digits are ASCII")
}

impl BigNum {
    /// Parse a base-16 string, most significant digit first.
    ///
    /// An optional `0x`/`0X` prefix is accepted. At most
    /// [`HEX_DIGITS`](crate::HEX_DIGITS) digits are allowed, leading zeros
    /// included; longer input is [`BigNumError::TooLong`].
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let b = BigNum::from_hex_str("0x0180").unwrap();
    /// assert_eq!(b.to_u64(), 0x180);
    /// assert!(BigNum::from_hex_str("12g4").is_err());
    /// ```
    pub fn from_hex_str(s: &str) -> Result<Self, BigNumError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let offset = s.len() - digits.len();
        if digits.is_empty() {
            return Err(BigNumError::Empty);
        }
        for (i, ch) in digits.char_indices() {
            digit(ch, 16, offset + i)?;
        }
        // All ASCII from here on, so bytes and chars coincide.
        if digits.len() > HEX_DIGITS {
            return Err(BigNumError::TooLong {
                len: digits.len(),
                max: HEX_DIGITS,
            });
        }

        let mut n = BigNum::ZERO;
        for (pos, b) in digits.bytes().rev().enumerate() {
            let nibble = digit(b as char, 16, 0)?;
            n.words[pos / WORD_HEX_DIGITS] |= nibble << (4 * (pos % WORD_HEX_DIGITS));
        }
        Ok(n)
    }

    /// Parse a decimal string. Values above [`BigNum::MAX`] are
    /// [`BigNumError::Overflow`].
    pub fn from_decimal_str(s: &str) -> Result<Self, BigNumError> {
        if s.is_empty() {
            return Err(BigNumError::Empty);
        }
        let mut n = BigNum::ZERO;
        for (i, ch) in s.char_indices() {
            let d = digit(ch, 10, i)?;
            if n.mul_add_word(10, d) != 0 {
                return Err(BigNumError::Overflow);
            }
        }
        Ok(n)
    }

    /// Hex digit at nibble position `pos` (0 is least significant).
    #[inline]
    fn nibble(&self, pos: usize) -> usize {
        let bit = 4 * pos;
        ((self.words[bit / WORD_BITS] >> (bit % WORD_BITS)) & 0xf) as usize
    }

    /// Render as lowercase base-16 into `buf`, followed by a NUL terminator.
    ///
    /// Most significant non-zero digit first; zero renders as `"0"`. Returns
    /// the digits (without the terminator).
    ///
    /// ```
    /// use bignum::{BigNum, BigNumError};
    ///
    /// let mut buf = [0u8; 8];
    /// assert_eq!(BigNum::from_u64(0x180).write_hex(&mut buf).unwrap(), "180");
    /// assert_eq!(buf[3], 0);
    ///
    /// let mut tiny = [0u8; 3];
    /// assert_eq!(
    ///     BigNum::from_u64(0x180).write_hex(&mut tiny),
    ///     Err(BigNumError::BufferTooSmall { needed: 4, capacity: 3 })
    /// );
    /// ```
    pub fn write_hex<'a>(&self, buf: &'a mut [u8]) -> Result<&'a str, BigNumError> {
        let len = self.bits().div_ceil(4).max(1);
        if len + 1 > buf.len() {
            return Err(BigNumError::BufferTooSmall {
                needed: len + 1,
                capacity: buf.len(),
            });
        }
        for (k, out) in buf[..len].iter_mut().enumerate() {
            *out = HEX_LOWER[self.nibble(len - 1 - k)];
        }
        buf[len] = 0;
        Ok(ascii_str(&buf[..len]))
    }

    /// Render as decimal into `buf`, followed by a NUL terminator.
    pub fn write_decimal<'a>(&self, buf: &'a mut [u8]) -> Result<&'a str, BigNumError> {
        let mut scratch = [b'0'; DECIMAL_DIGITS];
        let mut len = 0;
        let mut n = *self;
        while !n.is_zero() {
            scratch[len] = b'0' + n.div_rem_word(10) as u8;
            len += 1;
        }
        let len = len.max(1);
        if len + 1 > buf.len() {
            return Err(BigNumError::BufferTooSmall {
                needed: len + 1,
                capacity: buf.len(),
            });
        }
        for (out, &d) in buf.iter_mut().zip(scratch[..len].iter().rev()) {
            *out = d;
        }
        buf[len] = 0;
        Ok(ascii_str(&buf[..len]))
    }

    /// Format as hex string (no prefix, lowercase, minimal).
    pub fn to_hex_string(&self) -> String {
        format!("{self:x}")
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl FromStr for BigNum {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl fmt::LowerHex for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; HEX_DIGITS + 1];
        let s = self.write_hex(&mut buf).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "0x", s)
    }
}

impl fmt::UpperHex for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; HEX_DIGITS + 1];
        let len = self.write_hex(&mut buf).map_err(|_| fmt::Error)?.len();
        buf[..len].make_ascii_uppercase();
        f.pad_integral(true, "0x", ascii_str(&buf[..len]))
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; DECIMAL_DIGITS + 1];
        let s = self.write_decimal(&mut buf).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", s)
    }
}

impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum(0x{self:x})")
    }
}
