//! Error taxonomy shared by every generator.

use thiserror::Error;

/// Errors that can occur while generating or decoding identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdgenError {
    #[error("alphabet must not be empty")]
    EmptyAlphabet,
    #[error("length {length} is below the minimum of {min}")]
    LengthTooShort { length: usize, min: usize },
    #[error("length {length} exceeds the maximum of {max}")]
    LengthTooLong { length: usize, max: usize },
    #[error("IPv6 addresses are not supported for canonical encoding: {0}")]
    Ipv6NotSupported(String),
    #[error("negative integers cannot be canonically encoded: {0}")]
    NegativeCanonicalValue(String),
    #[error(
        "not a valid value for canonical encoding: {0} (expected an IPv4 address, an unsigned integer or a hex string)"
    )]
    InvalidCanonicalValue(String),
    #[error("invalid proquint: {0}")]
    InvalidProquint(String),
}
