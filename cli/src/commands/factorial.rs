//! 100! by repeated multiplication.

use anyhow::{ensure, Result};
use bignum::BigNum;
use tracing::info;

pub const FACTORIAL_100: &str =
    "1b30964ec395dc24069528d54bbda40d16e966ef9a70eb21b5b2943a321cdf10\
     391745570cca9420c6ecb3b72ed2ee8b02ea2735c61a000000000000000000000000";

pub fn factorial(n: u64) -> BigNum {
    let mut acc = BigNum::ONE;
    let mut tmp = BigNum::new();
    for i in 2..=n {
        acc.mul(&BigNum::from_u64(i), &mut tmp);
        acc.assign(&tmp);
    }
    acc
}

pub fn run() -> Result<()> {
    let result = factorial(100);
    let expected = BigNum::from_hex_str(FACTORIAL_100)?;
    ensure!(result == expected, "100! = {result:x}, expected {expected:x}");
    info!(decimal = %result, "100!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_factorials() {
        assert_eq!(factorial(0), BigNum::ONE);
        assert_eq!(factorial(20).to_u64(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_suite_passes() {
        run().unwrap();
    }
}
