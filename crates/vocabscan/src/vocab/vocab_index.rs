//! # Token Vocabulary Index

use crate::types::{TokenToIdMap, TokenType};

/// Read-only view of a ``{ token -> id }`` vocabulary.
///
/// This is the seam between a tokenizer and the analysis code;
/// any finite map with a stable iteration order can implement it.
/// Implementations must not change between calls within one analysis session.
pub trait TokenVocabIndex<T: TokenType>: Send + Sync {
    /// Iterate over ``(token, id)`` pairs in the vocabulary's native order.
    fn ordered_pairs(&self) -> impl Iterator<Item = (&str, T)>;

    /// Return the id for the token, if any.
    fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T>;

    /// The number of tokens in the vocabulary.
    fn len(&self) -> usize;

    /// Returns `true` if the vocabulary contains no tokens.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact, case-sensitive key membership.
    fn contains_token(
        &self,
        token: &str,
    ) -> bool {
        self.lookup_id(token).is_some()
    }

    /// Iterate over the tokens in native order.
    fn tokens(&self) -> impl Iterator<Item = &str> {
        self.ordered_pairs().map(|(token, _)| token)
    }

    /// Gets the highest id, if the vocabulary is non-empty.
    fn max_id(&self) -> Option<T> {
        self.ordered_pairs().map(|(_, id)| id).max()
    }
}

impl<T: TokenType> TokenVocabIndex<T> for TokenToIdMap<T> {
    fn ordered_pairs(&self) -> impl Iterator<Item = (&str, T)> {
        self.iter().map(|(token, &id)| (token.as_str(), id))
    }

    fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.get(token).copied()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
