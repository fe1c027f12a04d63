/* fft-tables | error.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use core::fmt;

/******************************************************************************/

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while generating or emitting tables
///
/// None of these are recoverable: the invocation is aborted and no partial table set is emitted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested or derived transform size cannot be used
    #[error("invalid size {size}: {reason}")]
    InvalidSize { size: usize, reason: SizeReason },

    /// The largest bit reversal index does not fit in the requested element type
    #[error("invalid size {size}: bit reversal indices do not fit in {index_type}")]
    IndexOverflow { size: usize, index_type: &'static str },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a size was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeReason {
    NotPowerOfTwo,
    BelowMinimum(usize),
    NotInChain,
}

impl fmt::Display for SizeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeReason::NotPowerOfTwo => write!(f, "not a power of two"),
            SizeReason::BelowMinimum(min) => write!(f, "must be at least {min}"),
            SizeReason::NotInChain => write!(f, "no table was generated for this size"),
        }
    }
}

impl Error {
    pub(crate) fn invalid_size(size: usize, reason: SizeReason) -> Self {
        Error::InvalidSize { size, reason }
    }

    /// The size that caused the error, if any
    pub fn offending_size(&self) -> Option<usize> {
        match self {
            Error::InvalidSize { size, .. } | Error::IndexOverflow { size, .. } => Some(*size),
            Error::Io(_) | Error::Json(_) => None,
        }
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_size() {
        let err = Error::invalid_size(6, SizeReason::NotPowerOfTwo);
        assert_eq!(err.to_string(), "invalid size 6: not a power of two");
        assert_eq!(err.offending_size(), Some(6));

        let err = Error::invalid_size(2, SizeReason::BelowMinimum(4));
        assert_eq!(err.to_string(), "invalid size 2: must be at least 4");
    }
}
