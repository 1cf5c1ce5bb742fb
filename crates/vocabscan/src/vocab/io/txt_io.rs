//! # WordPiece `vocab.txt` IO
//!
//! One token per line; the line index is the token id.

use crate::analysis::escape::escape_token;
use crate::analysis::options::DumpEncoding;
use crate::types::TokenType;
use crate::vocab::{TokenVocab, TokenVocabIndex};
use anyhow::Context;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load a [`TokenVocab`] from a `vocab.txt` file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_token_vocab_from_txt_path<T, P>(path: P) -> anyhow::Result<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open vocabulary {}", path.display()))?;
    let reader = BufReader::new(file);

    let vocab = read_token_vocab_from_txt(reader)
        .with_context(|| format!("failed to read vocabulary {}", path.display()))?;
    log::debug!("loaded {} tokens from {}", vocab.len(), path.display());

    Ok(vocab)
}

/// Read a [`TokenVocab`] from a `vocab.txt` [`BufRead`] stream.
///
/// Line terminators (``\n`` or ``\r\n``) are stripped; no other trimming is done,
/// as leading/trailing spaces may be part of a token.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_token_vocab_from_txt<T, R>(reader: R) -> anyhow::Result<TokenVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut tokens: Vec<String> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let mut line = line.with_context(|| format!("line {}", idx + 1))?;
        if line.ends_with('\r') {
            line.pop();
        }
        tokens.push(line);
    }

    Ok(TokenVocab::from_ordered_tokens(tokens)?)
}

/// Save a vocabulary dump to a file, one token per line.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
/// * `encoding` - the character set the file must be representable in.
pub fn save_token_vocab_to_txt_path<T, V, P>(
    vocab: &V,
    path: P,
    encoding: DumpEncoding,
) -> anyhow::Result<()>
where
    T: TokenType,
    V: TokenVocabIndex<T>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_token_vocab_to_txt(vocab, &mut writer, encoding)?;
    writer.flush()?;

    Ok(())
}

/// Write a vocabulary dump to a [`Write`] writer, one token per line.
///
/// Tokens are written in native order; characters that cannot be
/// represented in `encoding` are escaped.
pub fn write_token_vocab_to_txt<T, V, W>(
    vocab: &V,
    writer: &mut W,
    encoding: DumpEncoding,
) -> anyhow::Result<()>
where
    T: TokenType,
    V: TokenVocabIndex<T>,
    W: Write,
{
    for token in vocab.tokens() {
        writeln!(writer, "{}", escape_token(token, encoding)?)?;
    }
    Ok(())
}
