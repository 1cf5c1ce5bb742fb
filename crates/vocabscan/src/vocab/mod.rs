//! # Vocabulary

pub mod io;
pub mod public;
pub mod token_vocab;
pub mod tooling;
pub mod vocab_index;

pub use token_vocab::TokenVocab;
pub use vocab_index::TokenVocabIndex;
