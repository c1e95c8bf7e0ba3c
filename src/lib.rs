//! Reconstruction of Shamir-style shared secrets.
//!
//! A secret is the constant term of a hidden integer polynomial; each share
//! is one sample of that polynomial with its y-coordinate written in an
//! arbitrary numeral base. Given any `k` consistent shares this crate
//! decodes them exactly and recovers the constant term by Lagrange
//! interpolation at x = 0, carried out entirely in big-integer rational
//! arithmetic.

/// Default secret width: values in `[0, 2^256 - 1]` are accepted.
pub const DEFAULT_MAX_SECRET_BITS: usize = 256;
/// Upper bound on the shares one reconstruction will consume.
pub const MAX_SHARE_COUNT: usize = 1024;

mod decode;
mod input;
mod interpolate;
mod rational;
mod recovery;
mod share;

mod error;
pub use error::RecoveryError;

pub use decode::decode_share;
pub use input::{ShareEntry, ShareKeys, ShareRecord, recover_from_json, recover_from_record};
pub use interpolate::reconstruct_secret;
pub use recovery::SecretRecovery;
pub use share::{Point, RawShare, ShareSet};
