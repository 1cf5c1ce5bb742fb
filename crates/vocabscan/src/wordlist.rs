//! # External Word Lists
//!
//! Plain text candidate lists, one word per line (e.g. a list of first names).

use anyhow::Context;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Bytes stripped from line ends; ASCII whitespace plus vertical tab.
fn is_trailing_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Normalize one raw line.
///
/// Strips trailing ASCII whitespace, ASCII-lowercases, then decodes UTF-8.
/// Blank lines normalize to the empty string.
/// Returns `None` for lines that do not decode.
pub fn normalize_word_line(line: &[u8]) -> Option<String> {
    let end = line
        .iter()
        .rposition(|&b| !is_trailing_space(b))
        .map_or(0, |idx| idx + 1);

    let lowered = line[..end].to_ascii_lowercase();
    String::from_utf8(lowered).ok()
}

/// Read a word list from a [`BufRead`] stream.
///
/// Lines which fail to decode are silently discarded; blank lines are kept
/// as empty strings.
pub fn read_word_list<R: BufRead>(mut reader: R) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut skipped = 0_usize;

    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        match normalize_word_line(&buf) {
            Some(word) => words.push(word),
            None => skipped += 1,
        }
    }

    log::debug!("read {} words, skipped {skipped} lines", words.len());
    Ok(words)
}

/// Load a word list from a file.
pub fn load_word_list_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open word list {}", path.display()))?;

    read_word_list(BufReader::new(file))
        .with_context(|| format!("failed to read word list {}", path.display()))
}
