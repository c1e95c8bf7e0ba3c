//! Typed form of the externally-supplied share record.
//!
//! Callers hand over a record carrying `{n, k}` metadata plus entries keyed
//! by the share's x-coordinate, each holding a numeral base and the encoded
//! value. This module flattens that structure into [`RawShare`]s; reading
//! the record from disk or elsewhere stays with the caller.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use serde::Deserialize;

use crate::{RecoveryError, recovery::SecretRecovery, share::RawShare};

/// The `{n, k}` metadata pair: `n` shares exist, `k` are required.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ShareKeys {
    pub n: usize,
    pub k: usize,
}

/// One record entry. Upstream producers store `base` either as a number or
/// as a string of digits; both forms are accepted.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ShareEntry {
    base: BaseField,
    value: String,
}

impl ShareEntry {
    pub fn new(base: u32, value: impl Into<String>) -> Self {
        Self {
            base: BaseField::Numeric(base),
            value: value.into(),
        }
    }

    fn resolved_base(&self) -> Result<u32, RecoveryError> {
        match &self.base {
            BaseField::Numeric(base) => Ok(*base),
            BaseField::Text(text) => {
                text.parse()
                    .map_err(|_| RecoveryError::MalformedRecord {
                        reason: format!("base {text:?} is not an integer"),
                    })
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
enum BaseField {
    Numeric(u32),
    Text(String),
}

/// The full external record. Deserializes from the upstream JSON shape
///
/// ```text
/// { "keys": { "n": 4, "k": 3 },
///   "1": { "base": "10", "value": "4" },
///   "6": { "base": "4",  "value": "213" } }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ShareRecord {
    pub keys: ShareKeys,
    #[serde(flatten)]
    entries: BTreeMap<String, ShareEntry>,
}

impl ShareRecord {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            keys: ShareKeys { n, k },
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, x: u64, entry: ShareEntry) {
        self.entries.insert(x.to_string(), entry);
    }

    /// Flatten the record into raw shares plus the `(n, k)` pair.
    ///
    /// Entries whose key is not a positive integer are not shares and are
    /// skipped; classifying such records is the producer's concern, not a
    /// decoding failure. Fails with `InvalidThreshold` when the metadata
    /// violates `n >= k > 0`, before any share is examined.
    pub fn flatten(&self) -> Result<(Vec<RawShare>, usize, usize), RecoveryError> {
        if self.keys.k == 0 || self.keys.n < self.keys.k {
            return Err(RecoveryError::InvalidThreshold);
        }
        let mut shares = Vec::with_capacity(self.entries.len());
        for (key, entry) in &self.entries {
            let Ok(x) = key.parse::<u64>() else {
                continue;
            };
            if x == 0 {
                continue;
            }
            shares.push(RawShare::new(x, entry.resolved_base()?, entry.value.clone()));
        }
        Ok((shares, self.keys.n, self.keys.k))
    }
}

/// Reconstruct the secret described by a share record, under the default
/// 256-bit range.
pub fn recover_from_record(record: &ShareRecord) -> Result<BigUint, RecoveryError> {
    SecretRecovery::new().recover_record(record)
}

/// Parse a JSON share record and reconstruct its secret. This is the whole
/// pipeline short of file access: deserialize, flatten, decode, interpolate.
pub fn recover_from_json(text: &str) -> Result<BigUint, RecoveryError> {
    let record: ShareRecord =
        serde_json::from_str(text).map_err(|e| RecoveryError::MalformedRecord {
            reason: e.to_string(),
        })?;
    recover_from_record(&record)
}
