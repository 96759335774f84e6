//! Randomized differential driver.
//!
//! `bn 6 <oper> <a> <b> <expected>` evaluates one operation on hex operands
//! and compares the result with the expected hex value. External generators
//! feed it random operands and the answer from a reference implementation.

use anyhow::{bail, ensure, Context, Result};
use bignum::{BigNum, BigNumError};
use tracing::{debug, error};

use super::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};

const USAGE: &str = "usage: bn 6 <oper> <operand1> <operand2> <expected>\n\
    oper: 0=add 1=sub 2=mul 3=div 4=and 5=or 6=xor 7=pow 8=mod 9=rshift 10=lshift 11=isqrt\n\
    example: bn 6 3 0100 80 02  (divide 0x0100 by 0x80 and expect 0x02)";

/// Operator codes understood by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
    Pow,
    Mod,
    Rshift,
    Lshift,
    Isqrt,
}

impl TryFrom<u32> for Operator {
    type Error = anyhow::Error;

    fn try_from(code: u32) -> Result<Self> {
        Ok(match code {
            0 => Operator::Add,
            1 => Operator::Sub,
            2 => Operator::Mul,
            3 => Operator::Div,
            4 => Operator::And,
            5 => Operator::Or,
            6 => Operator::Xor,
            7 => Operator::Pow,
            8 => Operator::Mod,
            9 => Operator::Rshift,
            10 => Operator::Lshift,
            11 => Operator::Isqrt,
            _ => bail!("unknown operator '{code}'"),
        })
    }
}

impl Operator {
    /// Evaluate `out = a <op> b`. Shifts read their bit count from the low
    /// word(s) of `b`; `Isqrt` ignores `b`.
    pub fn apply(self, a: &BigNum, b: &BigNum, out: &mut BigNum) -> Result<(), BigNumError> {
        match self {
            Operator::Add => a.add(b, out),
            Operator::Sub => a.sub(b, out),
            Operator::Mul => a.mul(b, out),
            Operator::Div => a.div(b, out)?,
            Operator::And => a.and(b, out),
            Operator::Or => a.or(b, out),
            Operator::Xor => a.xor(b, out),
            Operator::Pow => a.pow(b, out),
            Operator::Mod => a.modulo(b, out)?,
            Operator::Rshift => a.rshift(out, shift_amount(b)),
            Operator::Lshift => a.lshift(out, shift_amount(b)),
            Operator::Isqrt => a.isqrt(out),
        }
        Ok(())
    }
}

fn shift_amount(b: &BigNum) -> usize {
    usize::try_from(b.to_u64()).unwrap_or(usize::MAX)
}

/// One parsed driver invocation.
#[derive(Debug)]
pub struct Request {
    pub op: Operator,
    pub a: BigNum,
    pub b: BigNum,
    pub expected: BigNum,
}

impl Request {
    pub fn parse(args: &[String]) -> Result<Self> {
        let [oper, a, b, expected, ..] = args else {
            bail!("expected 4 arguments, got {}", args.len());
        };
        let code: u32 = oper
            .parse()
            .with_context(|| format!("operator '{oper}' is not a number"))?;
        Ok(Self {
            op: Operator::try_from(code)?,
            a: parse_operand("operand1", a)?,
            b: parse_operand("operand2", b)?,
            expected: parse_operand("expected", expected)?,
        })
    }

    /// Evaluate and compare. `Ok(false)` is a mismatch; arithmetic errors
    /// and clobbered operands are reported as `Err`.
    pub fn check(&self) -> Result<bool> {
        let (a, b) = (self.a, self.b);
        let mut res = BigNum::new();
        self.op
            .apply(&a, &b, &mut res)
            .with_context(|| format!("{:?} failed", self.op))?;

        ensure!(a == self.a, "operand1 modified by {:?}", self.op);
        ensure!(b == self.b, "operand2 modified by {:?}", self.op);

        if res != self.expected {
            error!(
                op = ?self.op,
                a = %format_args!("{:x}", self.a),
                b = %format_args!("{:x}", self.b),
                got = %format_args!("{res:x}"),
                expected = %format_args!("{:x}", self.expected),
                "result mismatch"
            );
            return Ok(false);
        }
        debug!(op = ?self.op, result = %format_args!("{res:x}"), "match");
        Ok(true)
    }
}

fn parse_operand(name: &str, s: &str) -> Result<BigNum> {
    BigNum::from_hex_str(s).with_context(|| format!("{name} '{s}' is not a valid hex number"))
}

/// Driver entry point, returning the process exit code.
pub fn main(args: &[String]) -> i32 {
    let request = match Request::parse(args) {
        Ok(request) => request,
        Err(e) => {
            error!("{e:#}");
            eprintln!("{USAGE}");
            return EXIT_USAGE;
        }
    };
    match request.check() {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_FAILURE,
        Err(e) => {
            error!("{e:#}");
            EXIT_FAILURE
        }
    }
}
