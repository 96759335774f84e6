//! Division walk: checks `q * b + r == a` and `r < b` over a grid of
//! operands, and agreement with native division where the values fit.

use anyhow::{ensure, Result};
use bignum::{BigNum, TOTAL_BITS};
use tracing::info;

const DIVISORS: [u64; 12] = [
    1,
    2,
    3,
    7,
    10,
    0x80,
    0xff,
    0x100,
    65521,
    0xffff_ffff,
    0x1_0000_0001,
    u64::MAX,
];

fn check_native(a: u64, b: u64) -> Result<()> {
    let (mut q, mut r) = (BigNum::new(), BigNum::new());
    BigNum::from_u64(a).divmod(&BigNum::from_u64(b), &mut q, &mut r)?;
    ensure!(
        q.to_u64() == a / b && r.to_u64() == a % b,
        "{a:#x} / {b:#x}: got ({q:x}, {r:x}), expected ({:x}, {:x})",
        a / b,
        a % b
    );
    Ok(())
}

fn check_identity(a: &BigNum, b: &BigNum) -> Result<()> {
    let (mut q, mut r) = (BigNum::new(), BigNum::new());
    a.divmod(b, &mut q, &mut r)?;
    ensure!(r < *b, "{a:x} % {b:x} = {r:x} is not below the divisor");

    let (mut qb, mut back) = (BigNum::new(), BigNum::new());
    q.mul(b, &mut qb);
    qb.add(&r, &mut back);
    ensure!(back == *a, "{a:x} / {b:x}: q * b + r = {back:x}");
    Ok(())
}

pub fn run() -> Result<()> {
    let mut checked = 0usize;

    let dividends = (0..=0xffffu64)
        .step_by(97)
        .chain([1 << 32, 1 << 63, u64::MAX - 1, u64::MAX]);
    for a in dividends {
        for b in DIVISORS {
            check_native(a, b)?;
            checked += 1;
        }
    }

    for shift in (0..TOTAL_BITS).step_by(37) {
        let mut a = BigNum::new();
        BigNum::MAX.rshift(&mut a, shift);
        for b in DIVISORS {
            check_identity(&a, &BigNum::from_u64(b))?;
            let mut wide = BigNum::new();
            BigNum::from_u64(b).lshift(&mut wide, shift / 2);
            check_identity(&a, &wide)?;
            checked += 2;
        }
    }

    info!(checked, "division checks passed");
    Ok(())
}
