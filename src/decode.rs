//! Decoding of base-encoded share values into exact integers.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::{RecoveryError, recovery::SecretRecovery};

/// Decode `value` as an unsigned integer written in `base`, under the
/// default 256-bit range. Letter digits are case-insensitive and stand for
/// the values 10..=35.
///
/// The parse is strict: the whole string must consist of digits valid in
/// `base` — no signs, no whitespace, no partial reads. Magnitudes are
/// accumulated in arbitrary precision, so no digit is ever lost to a
/// fixed-width or floating intermediate.
pub fn decode_share(base: u32, value: &str) -> Result<BigUint, RecoveryError> {
    SecretRecovery::new().decode_share(base, value)
}

pub(crate) fn decode_bounded(
    base: u32,
    value: &str,
    ceiling: &BigUint,
) -> Result<BigUint, RecoveryError> {
    if !(2..=36).contains(&base) {
        return Err(RecoveryError::InvalidBase { base });
    }
    if value.is_empty() {
        return Err(RecoveryError::InvalidEncoding {
            value: value.to_string(),
            base,
            position: 0,
        });
    }

    let big_base = BigUint::from(base);
    let mut acc = BigUint::zero();
    for (position, c) in value.char_indices() {
        let digit = c
            .to_digit(base)
            .ok_or_else(|| RecoveryError::InvalidEncoding {
                value: value.to_string(),
                base,
                position,
            })?;
        acc = acc * &big_base + digit;
    }

    if &acc > ceiling {
        return Err(RecoveryError::ValueOutOfRange {
            value: BigInt::from(acc),
        });
    }
    Ok(acc)
}
