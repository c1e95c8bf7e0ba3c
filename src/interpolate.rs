use std::collections::HashSet;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed};

use crate::{
    RecoveryError, Point,
    rational::Rational,
    recovery::SecretRecovery,
};

/// Reconstruct the constant term of the degree-(k-1) polynomial passing
/// through `points`, under the default 256-bit range.
///
/// When more than `k` points are supplied, the points are sorted ascending
/// by x and the first `k` are used. Any `k`-subset of a consistent share
/// set determines the same polynomial, so the choice only has to be
/// deterministic; ascending-x-first-k is the one this crate commits to.
pub fn reconstruct_secret(points: &[Point], k: usize) -> Result<BigUint, RecoveryError> {
    SecretRecovery::new().reconstruct(points, k)
}

/// Evaluate the Lagrange interpolation polynomial at x = 0 using exact
/// rational arithmetic.
///
/// For each selected point i the basis coefficient at zero is
///
/// ```text
///           ---      (0 - x[j])
///   l_i  =  | |    -------------
///         j != i   (x[i] - x[j])
/// ```
///
/// kept as an integer numerator/denominator pair, and the result is the
/// exact rational sum of y[i] * l_i. The sum of integer-polynomial samples
/// is itself an integer; a non-zero final remainder therefore means the
/// shares do not lie on a common polynomial and the set is rejected.
pub(crate) fn reconstruct_bounded(
    points: &[Point],
    k: usize,
    ceiling: &BigUint,
    max_shares: usize,
) -> Result<BigUint, RecoveryError> {
    if k == 0 {
        return Err(RecoveryError::InvalidThreshold);
    }
    if k > max_shares {
        return Err(RecoveryError::TooManyShares {
            count: k,
            max: max_shares,
        });
    }
    if points.len() < k {
        return Err(RecoveryError::InsufficientShares {
            needed: k,
            supplied: points.len(),
        });
    }

    // Distinct abscissas guarantee every basis denominator below is
    // non-zero, so this must be established before any division.
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(point.x) {
            return Err(RecoveryError::DuplicateAbscissa { x: point.x });
        }
    }

    let mut selected: Vec<&Point> = points.iter().collect();
    selected.sort_by_key(|point| point.x);
    let selected = &selected[..k];
    let xs: Vec<BigInt> = selected.iter().map(|point| BigInt::from(point.x)).collect();

    let mut sum = Rational::zero();
    for (i, point) in selected.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();
        for (j, xj) in xs.iter().enumerate() {
            if j == i {
                continue;
            }
            numerator *= -xj;
            denominator *= &xs[i] - xj;
        }
        numerator *= BigInt::from(point.y.clone());
        sum = sum.add(&Rational::new(numerator, denominator));
    }

    let value = sum.into_integer()?;
    if value.is_negative() || value.magnitude() > ceiling {
        return Err(RecoveryError::ValueOutOfRange { value });
    }
    let (_, magnitude) = value.into_parts();
    Ok(magnitude)
}
