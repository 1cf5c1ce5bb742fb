//! # Special Tokens

use crate::declare_bracket_special;

declare_bracket_special!(
    BERT_RESERVED_TOKENS;
    (PAD, "PAD"),
    (UNK, "UNK"),
    (CLS, "CLS"),
    (SEP, "SEP"),
    (MASK, "MASK"),
);

/// Format the ``[unusedN]`` placeholder slot token.
pub fn format_unused_token(index: usize) -> String {
    format!("[unused{index}]")
}

/// Returns `true` for ``[unusedN]`` placeholder slot tokens.
///
/// These fill the low id range of BERT vocabularies, but are not
/// part of the structural reserved set.
pub fn is_unused_placeholder(token: &str) -> bool {
    token
        .strip_prefix("[unused")
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_tokens() {
        assert_eq!(PAD, "[PAD]");
        assert_eq!(MASK, "[MASK]");
        assert_eq!(
            BERT_RESERVED_TOKENS,
            &["[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]"]
        );
    }

    #[test]
    fn test_unused_placeholder() {
        assert_eq!(format_unused_token(957), "[unused957]");
        assert!(is_unused_placeholder(&format_unused_token(0)));
        assert!(!is_unused_placeholder("[unused]"));
        assert!(!is_unused_placeholder("[unusedX]"));
        assert!(!is_unused_placeholder("[PAD]"));
    }
}
