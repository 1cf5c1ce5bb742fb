//! # Dump Escaping

use crate::analysis::options::DumpEncoding;
use crate::errors::AnalysisError;
use std::fmt::Write;

fn needs_escape(
    c: char,
    encoding: DumpEncoding,
) -> bool {
    if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') {
        return true;
    }
    match encoding {
        DumpEncoding::Utf8 => false,
        DumpEncoding::Ascii => !c.is_ascii(),
    }
}

/// Escape a token so it is representable as one line of `encoding` text.
///
/// Backslashes are always doubled, so distinct tokens give distinct lines.
/// Tokens with no backslash, and nothing else to escape, are returned unchanged.
///
/// # Errors
/// [`AnalysisError::Encoding`] if the escaped form is still not representable.
pub fn escape_token(
    token: &str,
    encoding: DumpEncoding,
) -> Result<String, AnalysisError> {
    let mut buf = String::with_capacity(token.len());
    for c in token.chars() {
        if c == '\\' {
            buf.push_str("\\\\");
        } else if !needs_escape(c, encoding) {
            buf.push(c);
        } else if c.is_ascii() {
            // \t, \n, \r and \u{..} for the rest.
            write!(buf, "{}", c.escape_default()).map_err(|e| encoding_error(token, e))?;
        } else {
            write!(buf, "{}", c.escape_unicode()).map_err(|e| encoding_error(token, e))?;
        }
    }

    if let Some(c) = buf.chars().find(|&c| needs_escape(c, encoding)) {
        return Err(AnalysisError::Encoding {
            token: token.to_string(),
            reason: format!("{:?} survived escaping", c),
        });
    }

    Ok(buf)
}

fn encoding_error(
    token: &str,
    err: std::fmt::Error,
) -> AnalysisError {
    AnalysisError::Encoding {
        token: token.to_string(),
        reason: err.to_string(),
    }
}
