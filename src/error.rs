use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecoveryError {
    #[error("base {base} is outside the supported range 2..=36")]
    InvalidBase { base: u32 },
    #[error("{value:?} is not a valid base-{base} numeral (offending byte at {position})")]
    InvalidEncoding {
        value: String,
        base: u32,
        position: usize,
    },
    #[error("value {value} is outside the permitted secret range")]
    ValueOutOfRange { value: BigInt },
    #[error("not enough shares to reconstruct (need {needed}, got {supplied})")]
    InsufficientShares { needed: usize, supplied: usize },
    #[error("duplicate share abscissa {x}")]
    DuplicateAbscissa { x: u64 },
    #[error("shares do not lie on a common integer polynomial (remainder {remainder})")]
    NonIntegerResult { remainder: BigInt },
    #[error("threshold must satisfy n >= k > 0")]
    InvalidThreshold,
    #[error("too many shares ({count}, at most {max} accepted)")]
    TooManyShares { count: usize, max: usize },
    #[error("malformed share record: {reason}")]
    MalformedRecord { reason: String },
}
