//! # Vocab Testing Tools

use crate::types::TokenType;
use crate::vocab::TokenVocab;

/// Create a new test vocabulary, ids assigned in order.
///
/// # Panics
/// If the tokens are not a valid vocabulary.
pub fn new_test_vocab<T, I, S>(tokens: I) -> TokenVocab<T>
where
    T: TokenType,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TokenVocab::from_ordered_tokens(tokens).expect("invalid test vocabulary")
}

/// A miniature BERT-like vocabulary.
///
/// Reserved tokens, matched single characters, whole words,
/// subwords, and numbers, in the layout of a `bert-base-uncased` vocab.
pub fn mini_bert_vocab<T: TokenType>() -> TokenVocab<T> {
    new_test_vocab([
        "[PAD]", "[unused0]", "[UNK]", "[CLS]", "[SEP]", "[MASK]", "a", "b", "c", "1", "##a", "##b",
        "##c", "##1", "the", "of", "government", "can", "'", "t", "##s", "##ly", "ly", "##ing",
        "1600", "1620", "2000", "10000", "misspelled",
    ])
}
