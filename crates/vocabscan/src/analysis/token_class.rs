//! # Token Classes

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Classification of a token by its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenClass {
    /// One of the fixed reserved literals, such as ``[PAD]``.
    ReservedSpecial,

    /// A single char, not marked as a continuation.
    SingleCharacterStandalone,

    /// The continuation marker followed by exactly one char.
    SingleCharacterContinuation,

    /// The continuation marker followed by anything but exactly one char.
    MultiCharacterContinuation,

    /// Only decimal digits.
    Numeric,

    /// Everything else.
    WholeWord,
}

impl TokenClass {
    /// All classes, in declaration order.
    pub const ALL: [TokenClass; 6] = [
        TokenClass::ReservedSpecial,
        TokenClass::SingleCharacterStandalone,
        TokenClass::SingleCharacterContinuation,
        TokenClass::MultiCharacterContinuation,
        TokenClass::Numeric,
        TokenClass::WholeWord,
    ];

    /// The kebab-case name of the class.
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::ReservedSpecial => "reserved-special",
            TokenClass::SingleCharacterStandalone => "single-character-standalone",
            TokenClass::SingleCharacterContinuation => "single-character-continuation",
            TokenClass::MultiCharacterContinuation => "multi-character-continuation",
            TokenClass::Numeric => "numeric",
            TokenClass::WholeWord => "whole-word",
        }
    }

    /// Returns `true` for either continuation class.
    pub fn is_continuation(&self) -> bool {
        matches!(
            self,
            TokenClass::SingleCharacterContinuation | TokenClass::MultiCharacterContinuation
        )
    }
}

impl Display for TokenClass {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if the token is non-empty and every char is a decimal digit ``0-9``.
///
/// Fractions, roman numerals and other non-decimal numerals are not numeric.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
