//! # BERT WordPiece Conventions

pub mod specials;

pub use specials::*;
