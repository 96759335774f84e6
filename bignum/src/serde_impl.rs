//! Serde support: a `BigNum` travels as a lowercase hex string.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::word::HEX_DIGITS;
use crate::BigNum;

impl Serialize for BigNum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; HEX_DIGITS + 1];
        let s = self
            .write_hex(&mut buf)
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(s)
    }
}

struct HexVisitor;

impl Visitor<'_> for HexVisitor {
    type Value = BigNum;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a hex string of at most {HEX_DIGITS} digits")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigNum, E> {
        BigNum::from_hex_str(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for BigNum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor)
    }
}
