use thiserror::Error;

/// Unified error type for the fulmen library.
///
/// Malformed input is an ordinary, recoverable outcome: every decode step
/// reports failure through `Result`, never by panicking. A type without a
/// codec is rejected at compile time by the `Encodable` bound and therefore
/// has no variant here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer bytes remain than the decode step requires. Raised before any
    /// out-of-bounds access; the input is left unconsumed.
    #[error("truncated input: needed {needed} bytes but only {available} remain")]
    TruncatedInput { needed: usize, available: usize },

    /// A decoded integer does not match any declared discriminant of the
    /// enumeration being read.
    #[error("invalid discriminant {value} for enumeration {enumeration}")]
    InvalidDiscriminant {
        value: u64,
        enumeration: &'static str,
    },

    /// A text payload decoded into `String` is not valid UTF-8. The raw
    /// `Bytes` codec copies payloads verbatim and never raises this.
    #[error("text payload is not valid UTF-8: {0}")]
    InvalidText(#[from] std::str::Utf8Error),
}

/// A specialized `Result` type for fulmen codec operations.
pub type Result<T> = std::result::Result<T, Error>;
