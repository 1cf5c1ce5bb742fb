//! # Tokenizer Vocabulary Inspection
//!
//! Descriptive statistics and membership checks over a fixed
//! ``{ token -> id }`` vocabulary snapshot.
//!
//! # Example
//!
//! Load a BERT style `vocab.txt`, and ask a few questions about it:
//!
//! ```rust,ignore
//! let vocab: TokenVocab<u32> = load_token_vocab_from_txt_path("vocab.txt")?;
//! let analyzer = AnalyzerOptions::default().init()?;
//!
//! let pairs = analyzer.single_character_pairs(&vocab);
//! println!("Are the two sets identical? {}", pairs.sets_match);
//!
//! let ratio = analyzer.continuation_ratio(&vocab);
//! println!("{} of {} ({ratio})", ratio.count, ratio.total);
//!
//! let years = analyzer.count_range_coverage(&vocab, 1600, 2021)?;
//! ```
#![warn(missing_docs, unused)]

pub mod analysis;
pub mod errors;
pub mod types;
pub mod vocab;
pub mod wordlist;

pub use analysis::{AnalyzerOptions, DumpEncoding, TokenClass, VocabAnalyzer};
pub use errors::{AnalysisError, VocabError};
pub use vocab::{TokenVocab, TokenVocabIndex};

/// The BERT WordPiece continuation marker.
pub const DEFAULT_CONTINUATION_MARKER: &str = "##";

/// Numeric tokens longer than this (in chars) are reported as outliers.
pub const DEFAULT_NUMERIC_OUTLIER_LENGTH: usize = 4;
