//! Golden vectors: (operator, a, b, expected) in hex, evaluated through the
//! same operator dispatch as the randomized driver.

use anyhow::{ensure, Context, Result};
use bignum::BigNum;
use tracing::{debug, info};

use super::randomized::Operator;

#[rustfmt::skip]
pub const VECTORS: &[(Operator, &str, &str, &str)] = &[
    (Operator::Add, "ffffffffffffffffffffffff", "1", "1000000000000000000000000"),
    (Operator::Add, "0100", "0080", "0180"),
    (Operator::Sub, "1000000000000000000000000", "1", "ffffffffffffffffffffffff"),
    (Operator::Sub, "0180", "0080", "0100"),
    (Operator::Mul, "ffffffffffffffff", "ffffffffffffffff", "fffffffffffffffe0000000000000001"),
    (Operator::Mul, "123456789abcdef0123456789abcdef", "fedcba9876543210fedcba9876543210",
        "121fa00ad77d742247acc9140513b74458fab20783af1222236d88fe5618cf0"),
    (Operator::Div, "100", "80", "2"),
    (Operator::Div, "1b30964ec395dc24069528d54bbda40d16e966ef9a70eb21b5b2943a321cdf10", "3b9aca07",
        "74c77e71397b95059d3d0837f2aec71d585de9ebe3553444a428146f"),
    (Operator::Mod, "1b30964ec395dc24069528d54bbda40d16e966ef9a70eb21b5b2943a321cdf10", "3b9aca07",
        "351eba07"),
    (Operator::Mod, "100", "80", "0"),
    (Operator::And, "f0f0f0f0f0f0f0f0f0f0", "ffff0000ffff0000ffff", "f0f00000f0f00000f0f0"),
    (Operator::Or, "f0f0f0f0f0f0f0f0f0f0", "f0f0f0f0f0f0f0f0f0f", "ffffffffffffffffffff"),
    (Operator::Xor, "deadbeefdeadbeefdeadbeef", "deadbeef", "deadbeefdeadbeef00000000"),
    (Operator::Pow, "2", "a", "400"),
    (Operator::Pow, "7", "4d", "11f487519cdcc0c4e641a0d185eab7c19a7c11afdb6d1b7c28072e7"),
    (Operator::Pow, "0", "0", "1"),
    (Operator::Rshift, "100", "8", "1"),
    (Operator::Rshift, "deadbeefcafebabe0123456789abcdef", "64", "deadbee"),
    (Operator::Lshift, "1", "8", "100"),
    (Operator::Lshift, "abcdef", "400", "0"),
    (Operator::Isqrt, "5", "0", "2"),
    (Operator::Isqrt, "10000000000000000000000000000000000000000", "0", "100000000000000000000"),
];

pub fn run() -> Result<()> {
    for (i, &(op, a, b, expected)) in VECTORS.iter().enumerate() {
        let a = BigNum::from_hex_str(a).with_context(|| format!("vector {i}: operand1"))?;
        let b = BigNum::from_hex_str(b).with_context(|| format!("vector {i}: operand2"))?;
        let expected =
            BigNum::from_hex_str(expected).with_context(|| format!("vector {i}: expected"))?;

        let mut res = BigNum::new();
        op.apply(&a, &b, &mut res)
            .with_context(|| format!("vector {i}: {op:?}"))?;
        ensure!(
            res == expected,
            "vector {i}: {op:?}({a:x}, {b:x}) = {res:x}, expected {expected:x}"
        );
        debug!(i, ?op, "ok");
    }
    info!(vectors = VECTORS.len(), "golden vectors passed");
    Ok(())
}
