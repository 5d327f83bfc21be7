//! Error taxonomy for FrankenSieve.
//!
//! Every fallible operation in the workspace returns [`Result`]. Failures are
//! deterministic for a given input: nothing here is transient or retryable.

use thiserror::Error;

/// Errors produced while estimating bounds, sieving, or loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SieveError {
    /// The requested prime index was negative. Raised before any sieve work.
    #[error("prime index must be non-negative, got {index}")]
    InvalidArgument { index: i64 },

    /// The sieve ran over the whole estimated range without collecting
    /// `index + 1` primes, so the estimated limit was too small.
    #[error(
        "prime index {index} out of range: only {available} primes below estimated limit {limit}"
    )]
    IndexOutOfRange {
        index: u64,
        available: usize,
        limit: u64,
    },

    /// A configuration value is outside its accepted range or unparseable.
    #[error("invalid sieve configuration: {detail}")]
    InvalidConfig { detail: String },

    /// Internal invariant violation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SieveError {
    /// Build an [`SieveError::Internal`] from any displayable message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Build an [`SieveError::InvalidConfig`] from any displayable detail.
    pub fn invalid_config(detail: impl Into<String>) -> Self {
        Self::InvalidConfig {
            detail: detail.into(),
        }
    }

    /// Whether this error means the bound estimator under-shot.
    #[must_use]
    pub const fn is_estimator_defect(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Whether the caller supplied bad input (argument or configuration).
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::InvalidConfig { .. })
    }
}

/// Workspace-wide result alias.
pub type Result<T> = std::result::Result<T, SieveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_index() {
        let err = SieveError::InvalidArgument { index: -1 };
        assert_eq!(err.to_string(), "prime index must be non-negative, got -1");
        assert!(err.is_user_error());
        assert!(!err.is_estimator_defect());
    }

    #[test]
    fn index_out_of_range_is_estimator_defect() {
        let err = SieveError::IndexOutOfRange {
            index: 10,
            available: 4,
            limit: 13,
        };
        assert!(err.is_estimator_defect());
        assert!(!err.is_user_error());
        let msg = err.to_string();
        assert!(msg.contains("index 10"), "{msg}");
        assert!(msg.contains("only 4 primes"), "{msg}");
        assert!(msg.contains("limit 13"), "{msg}");
    }

    #[test]
    fn helper_constructors() {
        assert_eq!(
            SieveError::internal("boom"),
            SieveError::Internal("boom".to_owned())
        );
        assert!(matches!(
            SieveError::invalid_config("chunk"),
            SieveError::InvalidConfig { detail } if detail == "chunk"
        ));
    }
}
