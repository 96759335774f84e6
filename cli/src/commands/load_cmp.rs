//! Loading, reading back and comparing: native integer interchange,
//! comparator agreement with native ordering, increment and decrement across
//! word boundaries, and string round trips.

use std::cmp::Ordering;

use anyhow::{ensure, Result};
use bignum::{BigNum, WORD_BITS};
use tracing::info;

fn samples() -> Vec<u64> {
    let mut values = vec![0, 1, 2, 0x7f, 0x80, 0xff, 0x100, 0xffff, 0x1_0000, u64::MAX];
    for k in (0..64).step_by(WORD_BITS.min(16)) {
        let p = 1u64 << k;
        values.extend([p - 1, p, p.wrapping_add(1)]);
    }
    values
}

fn check_native_roundtrip(values: &[u64]) -> Result<()> {
    for &v in values {
        let n = BigNum::from_u64(v);
        ensure!(n.to_u64() == v, "from_u64({v:#x}) reads back as {:#x}", n.to_u64());
        ensure!(n.is_zero() == (v == 0), "is_zero({v:#x}) is wrong");
    }
    Ok(())
}

fn check_ordering(values: &[u64]) -> Result<()> {
    for &x in values {
        for &y in values {
            let (a, b) = (BigNum::from_u64(x), BigNum::from_u64(y));
            ensure!(
                a.compare(&b) == x.cmp(&y),
                "compare({x:#x}, {y:#x}) = {:?}",
                a.compare(&b)
            );
            ensure!(a.compare(&b) == b.compare(&a).reverse(), "compare is not antisymmetric");
        }
    }
    ensure!(BigNum::MAX.compare(&BigNum::from_u64(u64::MAX)) == Ordering::Greater);
    Ok(())
}

fn check_inc_dec(values: &[u64]) -> Result<()> {
    for &v in values.iter().filter(|&&v| v != 0 && v != u64::MAX) {
        let mut n = BigNum::from_u64(v);
        n.inc();
        ensure!(n.to_u64() == v + 1, "inc({v:#x}) = {n:x}");
        n.dec();
        n.dec();
        ensure!(n.to_u64() == v - 1, "dec(dec(inc({v:#x}))) = {n:x}");
    }

    let mut n = BigNum::from_u64(u64::MAX);
    n.inc();
    ensure!(n.bits() == 65 && n.to_u64() == 0, "u64::MAX + 1 = {n:x}");
    n.dec();
    ensure!(n == BigNum::from_u64(u64::MAX), "2^64 - 1 = {n:x}");

    let mut wrap = BigNum::MAX;
    wrap.inc();
    ensure!(wrap.is_zero(), "MAX + 1 = {wrap:x}");
    wrap.dec();
    ensure!(wrap == BigNum::MAX, "0 - 1 = {wrap:x}");
    Ok(())
}

fn check_strings(values: &[u64]) -> Result<()> {
    let mut buf = [0u8; bignum::HEX_DIGITS + 1];
    for &v in values.iter().chain([0xdead_beef_u64].iter()) {
        let n = BigNum::from_u64(v);
        let hex = n.write_hex(&mut buf)?;
        ensure!(hex == format!("{v:x}"), "hex of {v:#x} rendered as {hex}");
        ensure!(BigNum::from_hex_str(hex)? == n, "hex round trip of {v:#x}");
        ensure!(n.to_string() == v.to_string(), "decimal of {v}");
    }
    let max_hex = BigNum::MAX.write_hex(&mut buf)?;
    ensure!(BigNum::from_hex_str(max_hex)? == BigNum::MAX, "MAX hex round trip");
    Ok(())
}

pub fn run() -> Result<()> {
    let values = samples();
    check_native_roundtrip(&values)?;
    check_ordering(&values)?;
    check_inc_dec(&values)?;
    check_strings(&values)?;
    info!(values = values.len(), "load/compare checks passed");
    Ok(())
}
