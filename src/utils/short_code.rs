//! Short code codec: record ids to base-62 strings and back.
//!
//! The alphabet order (`A-Z`, `0-9`, `a-z`) is part of the public contract.
//! Changing it would re-map every short code ever issued.

use std::sync::LazyLock;

use thiserror::Error;

use crate::utils::base_converter::{Alphabet, BASE62, ConversionError, DecimalBaseConverter};

static BASE10_TO_62: LazyLock<DecimalBaseConverter> = LazyLock::new(|| {
    DecimalBaseConverter::new(Alphabet::new(BASE62).expect("BASE62 is a valid alphabet"))
});

/// A string that does not decode to a record id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid short code '{code}': {reason}")]
pub struct InvalidShortCode {
    pub code: String,
    pub reason: ConversionError,
}

/// Encodes a record id as its short code.
///
/// Ids are assigned by the store and are never negative.
pub fn encode(id: i64) -> String {
    BASE10_TO_62.from_decimal(i128::from(id))
}

/// Decodes a short code back to the record id it was produced from.
///
/// Only base-62 symbols are accepted: a sign, an empty string, or a value
/// beyond `i64::MAX` are all rejected.
pub fn decode(code: &str) -> Result<i64, InvalidShortCode> {
    let invalid = |reason| InvalidShortCode {
        code: code.to_string(),
        reason,
    };

    if let Some(position) = code.chars().position(|c| c == '-') {
        return Err(invalid(ConversionError::InvalidSymbol {
            symbol: '-',
            position,
        }));
    }

    let value = BASE10_TO_62.to_decimal(code).map_err(invalid)?;

    i64::try_from(value).map_err(|_| invalid(ConversionError::Overflow))
}
