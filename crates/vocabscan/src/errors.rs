//! # Error Types

use thiserror::Error;

/// Errors raised while building a vocabulary snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// The same token text appears twice.
    #[error("duplicate token {token:?}: ids {first} and {second}")]
    DuplicateToken {
        /// The repeated token.
        token: String,
        /// The id of the first occurrence.
        first: u64,
        /// The id of the repeated occurrence.
        second: u64,
    },

    /// Two different tokens share an id.
    #[error("duplicate id {id}: {first:?} and {second:?}")]
    DuplicateId {
        /// The shared id.
        id: u64,
        /// The first token mapped to `id`.
        first: String,
        /// The second token mapped to `id`.
        second: String,
    },

    /// The empty string was offered as a token.
    #[error("empty token at id {id}")]
    EmptyToken {
        /// The id the empty token would have had.
        id: u64,
    },

    /// An id does not fit the vocabulary's token type.
    #[error("id {id} out of range for the token type")]
    IdOutOfRange {
        /// The offending id.
        id: u64,
    },
}

/// Errors raised by [`crate::VocabAnalyzer`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A token could not be written to the dump text form.
    #[error("cannot encode token {token:?} for dump: {reason}")]
    Encoding {
        /// The token that failed.
        token: String,
        /// What went wrong.
        reason: String,
    },

    /// A range query with `low >= high`.
    #[error("invalid range: low ({low}) must be less than high ({high})")]
    InvalidRange {
        /// The inclusive lower bound.
        low: i64,
        /// The exclusive upper bound.
        high: i64,
    },

    /// The continuation marker must be non-empty.
    #[error("continuation marker must not be empty")]
    InvalidMarker,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AnalysisError::InvalidRange {
                low: 2021,
                high: 1600
            }
            .to_string(),
            "invalid range: low (2021) must be less than high (1600)"
        );

        assert_eq!(
            VocabError::DuplicateToken {
                token: "the".to_string(),
                first: 1996,
                second: 2000,
            }
            .to_string(),
            "duplicate token \"the\": ids 1996 and 2000"
        );
    }
}
