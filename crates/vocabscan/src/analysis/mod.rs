//! # Vocabulary Analysis

pub mod analyzer;
pub mod escape;
pub mod histogram;
pub mod options;
pub mod token_class;

pub use analyzer::{
    ContinuationRatio, MembershipQuery, NumericSummary, SingleCharPairs, VocabAnalyzer,
};
pub use histogram::LengthHistogram;
pub use options::{AnalyzerOptions, DumpEncoding};
pub use token_class::{TokenClass, is_numeric_token};
