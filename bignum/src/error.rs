use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Wraparound of computed results is not an error; only the checked
/// operations report [`Overflow`](BigNumError::Overflow) and
/// [`Underflow`](BigNumError::Underflow).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigNumError {
    #[error("BigNum division by zero")]
    DivisionByZero,
    #[error("BigNum overflow")]
    Overflow,
    #[error("BigNum underflow")]
    Underflow,
    #[error("empty digit string")]
    Empty,
    #[error("invalid digit {ch:?} at index {index}")]
    InvalidDigit { ch: char, index: usize },
    #[error("digit string of length {len} exceeds the maximum of {max}")]
    TooLong { len: usize, max: usize },
    #[error("buffer of {capacity} bytes cannot hold {needed} bytes")]
    BufferTooSmall { needed: usize, capacity: usize },
}
