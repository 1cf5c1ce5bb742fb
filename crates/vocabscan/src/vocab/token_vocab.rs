//! # Token Map ``{ String -> T }`` Vocabulary

use crate::errors::VocabError;
use crate::types::{IdToTokenMap, TokenToIdMap, TokenType};
use crate::vocab::TokenVocabIndex;

/// Immutable vocabulary snapshot as a dictionary map of ``{ String -> T }``.
///
/// Token texts are unique, and ids are unique.
/// Native iteration order is ascending id.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    /// ``(token, id)`` entries, sorted by id.
    entries: Vec<(String, T)>,

    /// Map of ``{ String -> T }``.
    token_to_id: TokenToIdMap<T>,
}

impl<'a, T: TokenType> IntoIterator for &'a TokenVocab<T> {
    type Item = (&'a str, T);

    type IntoIter = Box<dyn Iterator<Item = (&'a str, T)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn id_as_u64<T: TokenType>(id: T) -> u64 {
    id.to_u64().unwrap_or(u64::MAX)
}

impl<T: TokenType> TokenVocab<T> {
    /// Build a vocabulary from ``(token, id)`` pairs.
    ///
    /// # Errors
    /// * [`VocabError::EmptyToken`] if a token is the empty string.
    /// * [`VocabError::DuplicateToken`] if a token text repeats.
    /// * [`VocabError::DuplicateId`] if two tokens share an id.
    pub fn try_from_pairs<I, S>(pairs: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut token_to_id: TokenToIdMap<T> = Default::default();
        let mut id_to_token: IdToTokenMap<T> = Default::default();

        for (token, id) in pairs {
            let token = token.into();
            if token.is_empty() {
                return Err(VocabError::EmptyToken { id: id_as_u64(id) });
            }
            if let Some(&first) = token_to_id.get(&token) {
                return Err(VocabError::DuplicateToken {
                    token,
                    first: id_as_u64(first),
                    second: id_as_u64(id),
                });
            }
            if let Some(first) = id_to_token.get(&id) {
                return Err(VocabError::DuplicateId {
                    id: id_as_u64(id),
                    first: first.clone(),
                    second: token,
                });
            }

            id_to_token.insert(id, token.clone());
            token_to_id.insert(token, id);
        }

        let mut entries: Vec<(String, T)> = id_to_token
            .into_iter()
            .map(|(id, token)| (token, id))
            .collect();
        entries.sort_by_key(|&(_, id)| id);

        Ok(Self {
            entries,
            token_to_id,
        })
    }

    /// Build a vocabulary where each token's id is its position.
    ///
    /// This is the `vocab.txt` convention of WordPiece tokenizers.
    pub fn from_ordered_tokens<I, S>(tokens: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pairs = tokens
            .into_iter()
            .enumerate()
            .map(|(idx, token)| match T::from_usize(idx) {
                Some(id) => Ok((token.into(), id)),
                None => Err(VocabError::IdOutOfRange { id: idx as u64 }),
            })
            .collect::<Result<Vec<(String, T)>, VocabError>>()?;

        Self::try_from_pairs(pairs)
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vocabulary contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over ``(token, id)`` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.entries.iter().map(|(token, id)| (token.as_str(), *id))
    }

    /// Get the token => id map.
    pub fn token_to_id(&self) -> &TokenToIdMap<T> {
        &self.token_to_id
    }

    /// Return the id for the token, if any.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Return the token text for the id, if any.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.entries
            .binary_search_by_key(&id, |&(_, entry_id)| entry_id)
            .ok()
            .map(|idx| self.entries[idx].0.as_str())
    }
}

impl<T: TokenType> TokenVocabIndex<T> for TokenVocab<T> {
    fn ordered_pairs(&self) -> impl Iterator<Item = (&str, T)> {
        self.iter()
    }

    fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        TokenVocab::lookup_id(self, token)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn max_id(&self) -> Option<T> {
        self.entries.last().map(|&(_, id)| id)
    }
}
