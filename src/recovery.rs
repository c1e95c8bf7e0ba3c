//! The reconstruction engine and its configuration.

use num_bigint::BigUint;
use num_traits::One;

use crate::{
    DEFAULT_MAX_SECRET_BITS, MAX_SHARE_COUNT, RecoveryError,
    decode::decode_bounded,
    input::ShareRecord,
    interpolate::reconstruct_bounded,
    share::{Point, RawShare, ShareSet},
};

/// Decodes shares and reconstructs secrets under a configurable value
/// ceiling. The default covers unsigned 256-bit secrets; the limit is held
/// here rather than baked into the arithmetic so alternate ranges can be
/// exercised without touching the engine.
///
/// The engine holds no mutable state, so one instance may be shared freely
/// across threads and every call is independent.
#[derive(Clone, Debug)]
pub struct SecretRecovery {
    ceiling: BigUint,
    max_shares: usize,
}

impl SecretRecovery {
    /// Engine for the standard unsigned 256-bit secret range.
    pub fn new() -> Self {
        Self::with_max_bits(DEFAULT_MAX_SECRET_BITS)
    }

    /// Engine accepting values in `[0, 2^bits - 1]`.
    pub fn with_max_bits(bits: usize) -> Self {
        Self::with_ceiling((BigUint::one() << bits) - 1u32)
    }

    /// Engine accepting values in `[0, ceiling]`.
    pub fn with_ceiling(ceiling: BigUint) -> Self {
        Self {
            ceiling,
            max_shares: MAX_SHARE_COUNT,
        }
    }

    /// Cap the number of shares one reconstruction may consume. Big-integer
    /// operands grow with the share count, so the cap bounds memory use on
    /// hostile inputs.
    pub fn share_limit(mut self, limit: usize) -> Self {
        self.max_shares = limit;
        self
    }

    /// Inclusive upper bound on decoded and reconstructed values.
    pub fn ceiling(&self) -> &BigUint {
        &self.ceiling
    }

    pub fn decode_share(&self, base: u32, value: &str) -> Result<BigUint, RecoveryError> {
        decode_bounded(base, value, &self.ceiling)
    }

    pub fn decode_point(&self, share: &RawShare) -> Result<Point, RecoveryError> {
        Ok(Point::new(share.x, self.decode_share(share.base, &share.value)?))
    }

    /// Decode every raw share and assemble the set, validating `n >= k > 0`.
    pub fn decode_set(
        &self,
        shares: &[RawShare],
        n: usize,
        k: usize,
    ) -> Result<ShareSet, RecoveryError> {
        let points = shares
            .iter()
            .map(|share| self.decode_point(share))
            .collect::<Result<Vec<_>, _>>()?;
        ShareSet::new(points, n, k)
    }

    pub fn reconstruct(&self, points: &[Point], k: usize) -> Result<BigUint, RecoveryError> {
        reconstruct_bounded(points, k, &self.ceiling, self.max_shares)
    }

    /// Flatten an external share record, decode its entries and reconstruct
    /// the secret in one step.
    pub fn recover_record(&self, record: &ShareRecord) -> Result<BigUint, RecoveryError> {
        let (shares, n, k) = record.flatten()?;
        let set = self.decode_set(&shares, n, k)?;
        self.reconstruct(set.points(), set.k())
    }
}

impl Default for SecretRecovery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SecretRecovery>();
    }

    #[test]
    fn default_ceiling_is_256_bits() {
        let engine = SecretRecovery::new();
        assert_eq!(engine.ceiling(), &((BigUint::one() << 256) - 1u32));
    }

    #[test]
    fn decode_set_validates_the_threshold() {
        let engine = SecretRecovery::new();
        let shares = vec![RawShare::new(1, 10, "4")];
        assert_eq!(
            engine.decode_set(&shares, 2, 3).unwrap_err(),
            RecoveryError::InvalidThreshold
        );
    }

    #[test]
    fn decode_set_surfaces_the_first_bad_share() {
        let engine = SecretRecovery::new();
        let shares = vec![RawShare::new(1, 10, "4"), RawShare::new(2, 2, "21")];
        assert_eq!(
            engine.decode_set(&shares, 2, 2).unwrap_err(),
            RecoveryError::InvalidEncoding {
                value: "21".to_string(),
                base: 2,
                position: 0,
            }
        );
    }

    #[test]
    fn decode_then_reconstruct_round_trip() {
        // f(x) = x^2 + 3 with the samples spread across bases.
        let engine = SecretRecovery::new();
        let shares = vec![
            RawShare::new(1, 10, "4"),
            RawShare::new(2, 2, "111"),
            RawShare::new(3, 10, "12"),
        ];
        let set = engine.decode_set(&shares, 3, 3).unwrap();
        assert_eq!(
            engine.reconstruct(set.points(), set.k()).unwrap(),
            BigUint::from(3u32)
        );
    }
}
