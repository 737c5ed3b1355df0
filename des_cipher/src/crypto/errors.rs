use thiserror::Error;

/// Failures detected before any transformation runs. None of these are
/// retryable: the computation is deterministic, so the input has to change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("expected a {expected}-bit block, got {actual} bits")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid bit character {0:?}")]
    InvalidBitValue(char),

    #[error("permutation table references bit {index} of a {width}-bit input")]
    TableIndexOutOfRange { index: usize, width: usize },

    #[error("xor operands differ in width: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
