//! # Vocabulary IO
//!
//! Vocabulary providers for common on-disk formats.

pub mod json_io;
pub mod txt_io;

pub use json_io::{load_token_vocab_from_json_path, read_token_vocab_from_json};
pub use txt_io::{
    load_token_vocab_from_txt_path, read_token_vocab_from_txt, save_token_vocab_to_txt_path,
    write_token_vocab_to_txt,
};
