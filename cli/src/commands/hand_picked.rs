//! Hand-picked cases: the documented examples plus wraparound at the
//! numeric extremes.

use anyhow::{ensure, Result};
use bignum::{BigNum, BigNumError, TOTAL_BITS};
use tracing::debug;

fn hex(s: &str) -> Result<BigNum> {
    Ok(BigNum::from_hex_str(s)?)
}

fn documented_examples() -> Result<()> {
    let mut c = BigNum::new();

    hex("0100")?.add(&hex("0080")?, &mut c);
    ensure!(c == hex("0180")?, "0x0100 + 0x0080 = {c:x}");

    hex("0100")?.div(&hex("0080")?, &mut c)?;
    ensure!(c == hex("02")?, "0x0100 / 0x0080 = {c:x}");

    hex("0100")?.modulo(&hex("0080")?, &mut c)?;
    ensure!(c.is_zero(), "0x0100 % 0x0080 = {c:x}");

    BigNum::from_u64(2).pow(&BigNum::from_u64(10), &mut c);
    ensure!(c.to_u64() == 1024, "2^10 = {c}");

    BigNum::from_u64(5).isqrt(&mut c);
    ensure!(c.to_u64() == 2, "isqrt(5) = {c}");

    BigNum::ONE.lshift(&mut c, 8);
    ensure!(c == hex("100")?, "1 << 8 = {c:x}");
    hex("100")?.rshift(&mut c, 8);
    ensure!(c == BigNum::ONE, "0x100 >> 8 = {c:x}");

    let err = hex("1234")?.modulo(&BigNum::ZERO, &mut c);
    ensure!(err == Err(BigNumError::DivisionByZero), "x % 0 gave {err:?}");
    Ok(())
}

fn extremes() -> Result<()> {
    let mut c = BigNum::new();

    BigNum::MAX.add(&BigNum::ONE, &mut c);
    ensure!(c.is_zero(), "MAX + 1 = {c:x}");

    BigNum::ZERO.sub(&BigNum::ONE, &mut c);
    ensure!(c == BigNum::MAX, "0 - 1 = {c:x}");

    // (2^N - 1)^2 = 2^2N - 2^(N+1) + 1, which is 1 modulo 2^N
    BigNum::MAX.mul(&BigNum::MAX, &mut c);
    ensure!(c == BigNum::ONE, "MAX * MAX = {c:x}");

    BigNum::ZERO.pow(&BigNum::ZERO, &mut c);
    ensure!(c == BigNum::ONE, "0^0 = {c:x}");

    BigNum::ZERO.isqrt(&mut c);
    ensure!(c.is_zero(), "isqrt(0) = {c:x}");

    BigNum::MAX.lshift(&mut c, TOTAL_BITS);
    ensure!(c.is_zero(), "MAX << TOTAL_BITS = {c:x}");
    BigNum::MAX.rshift(&mut c, TOTAL_BITS);
    ensure!(c.is_zero(), "MAX >> TOTAL_BITS = {c:x}");

    let mut r = BigNum::new();
    BigNum::MAX.divmod(&BigNum::MAX, &mut c, &mut r)?;
    ensure!(c == BigNum::ONE && r.is_zero(), "MAX / MAX = ({c:x}, {r:x})");
    Ok(())
}

pub fn run() -> Result<()> {
    documented_examples()?;
    debug!("documented examples ok");
    extremes()?;
    debug!("extremes ok");
    Ok(())
}
