//! The 256-bit machine word and its two interpretations.
//!
//! Words are stored as [`U256`]. Signed opcodes view the same bits as two's-complement [`I256`];
//! both conversions are total and lossless.

use crate::error::{DomainContext, FoldError, Result};
use alloy_primitives::{I256, U256};

pub type Word = U256;

/// `u - 2^256` if the sign bit is set, `u` otherwise.
#[inline]
pub fn to_signed(value: Word) -> I256 {
    I256::from_raw(value)
}

/// `s + 2^256` if `s` is negative, `s` otherwise.
#[inline]
pub fn to_unsigned(value: I256) -> Word {
    value.into_raw()
}

#[inline]
pub(crate) fn from_bool(value: bool) -> Word {
    if value { U256::ONE } else { U256::ZERO }
}

/// Converts a literal as written in source text (sign and magnitude) into a word.
///
/// Accepted range is `[-2^255, 2^256 - 1]`: non-negative literals are taken as unsigned, negative
/// ones must fit the signed interpretation.
pub fn from_literal(negative: bool, magnitude: U256) -> Result<Word> {
    if !negative || magnitude.is_zero() {
        return Ok(magnitude);
    }
    // |I256::MIN| == 2^255
    if magnitude > I256::MIN.unsigned_abs() {
        return Err(FoldError::Domain {
            context: DomainContext::Literal,
            reason: "negative literal below -2^255",
        });
    }
    Ok(magnitude.wrapping_neg())
}
