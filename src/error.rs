//! Error types for fixr

use thiserror::Error;

/// Result type alias using fixr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing fixed-point values from text.
///
/// The arithmetic kernels themselves never fail: invalid inputs map to
/// documented sentinel results. Parsing decimal strings is the one surface
/// where failure is meaningful, so it reports through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input was empty or contained no digits
    #[error("empty input: no digits to parse")]
    Empty,

    /// Input contained a character that is not a digit, sign, or decimal point
    #[error("invalid character {ch:?} in fixed-point literal")]
    InvalidDigit {
        /// The offending character
        ch: char,
    },

    /// The parsed magnitude does not fit the target raw representation
    #[error("value out of range for the target fixed-point format")]
    Overflow,
}
