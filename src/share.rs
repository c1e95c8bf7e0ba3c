use num_bigint::BigUint;

use crate::{RecoveryError, interpolate::reconstruct_secret};

/// One share as supplied by the caller: an x-coordinate together with the
/// base-encoded representation of its y-coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawShare {
    /// Positive share identifier, the polynomial abscissa.
    pub x: u64,
    /// Numeral base of `value`, in `2..=36`.
    pub base: u32,
    /// y-coordinate encoded as a numeral string in `base`.
    pub value: String,
}

impl RawShare {
    pub fn new(x: u64, base: u32, value: impl Into<String>) -> Self {
        Self {
            x,
            base,
            value: value.into(),
        }
    }
}

/// A decoded polynomial sample. `y` is the exact integer the share encodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u64,
    pub y: BigUint,
}

impl Point {
    pub fn new(x: u64, y: BigUint) -> Self {
        Self { x, y }
    }
}

/// Decoded points together with the sharing parameters: `n` shares exist in
/// total, any `k` of them determine the polynomial.
#[derive(Clone, Debug)]
pub struct ShareSet {
    points: Vec<Point>,
    n: usize,
    k: usize,
}

impl ShareSet {
    /// Requires `n >= k > 0`. The points themselves may be fewer than `n`
    /// (not every share has to be presented) but reconstruction will demand
    /// at least `k` of them.
    pub fn new(points: Vec<Point>, n: usize, k: usize) -> Result<Self, RecoveryError> {
        if k == 0 || n < k {
            return Err(RecoveryError::InvalidThreshold);
        }
        Ok(Self { points, n, k })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Reconstruct the secret from this set under the default 256-bit range.
    pub fn reconstruct(&self) -> Result<BigUint, RecoveryError> {
        reconstruct_secret(&self.points, self.k)
    }
}
