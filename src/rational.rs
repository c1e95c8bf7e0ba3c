//! Exact rational arithmetic over big integers.
//!
//! A Lagrange basis coefficient at x = 0 is a ratio of integer products,
//! and the accumulated sum must come out an exact integer. Floating-point
//! quotients lose precision long before 256-bit magnitudes, so the sum is
//! carried as a (numerator, denominator) pair of `BigInt`s instead.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

use crate::RecoveryError;

/// Invariant: `den` is always positive and `gcd(|num|, den) == 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    pub fn zero() -> Self {
        Self {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    /// `den` must be non-zero; the caller guarantees this by checking for
    /// duplicate abscissas before any basis denominator is formed.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        let (mut num, mut den) = if den.is_negative() {
            (-num, -den)
        } else {
            (num, den)
        };
        if num.is_zero() {
            return Self::zero();
        }
        let g = gcd(num.magnitude().clone(), den.magnitude().clone());
        if !g.is_one() {
            let g = BigInt::from(g);
            num /= &g;
            den /= &g;
        }
        Self { num, den }
    }

    pub fn add(&self, other: &Rational) -> Rational {
        Rational::new(
            &self.num * &other.den + &other.num * &self.den,
            &self.den * &other.den,
        )
    }

    /// The exact integer this rational represents, or the non-zero division
    /// remainder when it is not an integer.
    pub fn into_integer(self) -> Result<BigInt, RecoveryError> {
        let remainder = &self.num % &self.den;
        if !remainder.is_zero() {
            return Err(RecoveryError::NonIntegerResult { remainder });
        }
        Ok(self.num / self.den)
    }
}

fn gcd(mut a: BigUint, mut b: BigUint) -> BigUint {
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}
