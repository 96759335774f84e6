//! RSA round trips through `pow_mod`: a textbook key and a 511-bit key.

use anyhow::{ensure, Result};
use bignum::BigNum;
use tracing::info;

struct Key {
    name: &'static str,
    n: &'static str,
    e: &'static str,
    d: &'static str,
    message: &'static str,
    cipher: &'static str,
}

const KEYS: [Key; 2] = [
    Key {
        name: "textbook",
        n: "ca1",
        e: "11",
        d: "ac1",
        message: "41",
        cipher: "ae6",
    },
    Key {
        name: "rsa-511",
        n: "7d2be5742569abe235b6d2bdab82b610f5862282b9a1a75aac22f672cbf97c33\
            9a4af34718beb80c25953e352fe1e2db9283de56df4a1a7290c7f4e82761d45b",
        e: "10001",
        d: "26f20c7f79d08a2964fb1050f157471cb9b7d56f0520f5f8314ce38f4e45becd\
            c3af6fea95dfca232e980ff56034caa50f8632f74af8a80a989b970498e416c1",
        message: "48656c6c6f2c20626967206e756d6265727321",
        cipher: "6ff28ab80049b606dbff56dba1408719869001e607d3ebc726258186df859ade\
                 8de6421b58c068abacd8c9cc7525bef1b6f57d750822324095a3e0af034fbb2",
    },
];

fn roundtrip(key: &Key) -> Result<()> {
    let n = BigNum::from_hex_str(key.n)?;
    let e = BigNum::from_hex_str(key.e)?;
    let d = BigNum::from_hex_str(key.d)?;
    let m = BigNum::from_hex_str(key.message)?;
    let expected = BigNum::from_hex_str(key.cipher)?;

    let mut c = BigNum::new();
    m.pow_mod(&e, &n, &mut c)?;
    ensure!(c == expected, "{}: encrypt gave {c:x}, expected {expected:x}", key.name);

    let mut back = BigNum::new();
    c.pow_mod(&d, &n, &mut back)?;
    ensure!(back == m, "{}: decrypt gave {back:x}, expected {m:x}", key.name);

    info!(key = key.name, bits = n.bits(), "round trip ok");
    Ok(())
}

pub fn run() -> Result<()> {
    KEYS.iter().try_for_each(roundtrip)
}
