//! # JSON Vocabulary IO
//!
//! Accepts either a flat ``{ "token": id }`` object (`vocab.json`),
//! or a `tokenizer.json` document carrying such an object at `model.vocab`.

use crate::errors::VocabError;
use crate::types::TokenType;
use crate::vocab::TokenVocab;
use anyhow::Context;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::Formatter;
use std::io::{BufReader, Read};
use std::path::Path;

/// ``(token, id)`` entries of a JSON object, in document order.
///
/// Repeated keys are kept, so duplicates reach vocabulary validation.
struct TokenIdEntries(Vec<(String, u64)>);

impl<'de> Deserialize<'de> for TokenIdEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = TokenIdEntries;

            fn expecting(
                &self,
                f: &mut Formatter<'_>,
            ) -> std::fmt::Result {
                f.write_str("a token => id object")
            }

            fn visit_map<A>(
                self,
                mut map: A,
            ) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or_default());
                while let Some((token, id)) = map.next_entry::<String, u64>()? {
                    entries.push((token, id));
                }
                Ok(TokenIdEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[derive(Deserialize)]
struct TokenizerModel {
    vocab: TokenIdEntries,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonVocabDocument {
    Tokenizer { model: TokenizerModel },
    Map(TokenIdEntries),
}

impl JsonVocabDocument {
    fn into_entries(self) -> Vec<(String, u64)> {
        match self {
            JsonVocabDocument::Tokenizer { model } => model.vocab.0,
            JsonVocabDocument::Map(entries) => entries.0,
        }
    }
}

/// Load a [`TokenVocab`] from a JSON vocabulary file.
///
/// # Arguments
/// * `path` - the path to the `vocab.json` or `tokenizer.json` file.
pub fn load_token_vocab_from_json_path<T, P>(path: P) -> anyhow::Result<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open vocabulary {}", path.display()))?;

    let vocab = read_token_vocab_from_json(BufReader::new(file))
        .with_context(|| format!("failed to read vocabulary {}", path.display()))?;
    log::debug!("loaded {} tokens from {}", vocab.len(), path.display());

    Ok(vocab)
}

/// Read a [`TokenVocab`] from a JSON [`Read`] stream.
pub fn read_token_vocab_from_json<T, R>(reader: R) -> anyhow::Result<TokenVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let document: JsonVocabDocument =
        serde_json::from_reader(reader).context("expected a token => id object")?;

    let pairs = document
        .into_entries()
        .into_iter()
        .map(|(token, id)| match T::from_u64(id) {
            Some(id) => Ok((token, id)),
            None => Err(VocabError::IdOutOfRange { id }),
        })
        .collect::<Result<Vec<(String, T)>, VocabError>>()?;

    Ok(TokenVocab::try_from_pairs(pairs)?)
}
