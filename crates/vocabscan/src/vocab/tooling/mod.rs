//! # Vocabulary Tooling

pub mod testing;
