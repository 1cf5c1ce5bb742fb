//! # Vocabulary Analyzer
//!
//! Every operation is a read-only pass over a [`TokenVocabIndex`];
//! nothing is cached between calls.

use crate::analysis::escape::escape_token;
use crate::analysis::histogram::LengthHistogram;
use crate::analysis::options::AnalyzerOptions;
use crate::analysis::token_class::{TokenClass, is_numeric_token};
use crate::errors::AnalysisError;
use crate::types::TokenType;
use crate::vocab::TokenVocabIndex;
use ahash::AHashSet;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Single char tokens, standalone and continuation forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleCharPairs {
    /// Standalone single chars, in vocabulary order.
    pub standalone: Vec<char>,

    /// Chars of single char continuation tokens, marker stripped, in vocabulary order.
    pub continuation: Vec<char>,

    /// Whether `standalone` and `continuation` hold the same set of chars.
    pub sets_match: bool,
}

impl SingleCharPairs {
    /// Standalone chars with no continuation form.
    pub fn missing_continuations(&self) -> Vec<char> {
        let continuation: AHashSet<char> = self.continuation.iter().copied().collect();
        self.standalone
            .iter()
            .copied()
            .filter(|c| !continuation.contains(c))
            .collect()
    }

    /// Continuation chars with no standalone form.
    pub fn missing_standalones(&self) -> Vec<char> {
        let standalone: AHashSet<char> = self.standalone.iter().copied().collect();
        self.continuation
            .iter()
            .copied()
            .filter(|c| !standalone.contains(c))
            .collect()
    }
}

/// Count of marker-prefixed tokens against the vocabulary size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinuationRatio {
    /// Tokens starting with the continuation marker.
    pub count: usize,

    /// The vocabulary size.
    pub total: usize,
}

impl ContinuationRatio {
    /// Tokens not starting with the continuation marker.
    pub fn non_continuation(&self) -> usize {
        self.total - self.count
    }

    /// The exact ``count / total`` ratio; `0.0` for an empty vocabulary.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }

    /// The ratio as a percentage.
    pub fn percentage(&self) -> f64 {
        self.ratio() * 100.0
    }
}

impl Display for ContinuationRatio {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{:.1}%", self.percentage())
    }
}

/// The result of a membership check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipQuery<T: TokenType> {
    /// The candidate string, as given.
    pub candidate: String,

    /// The candidate's id, if it is a key.
    pub id: Option<T>,
}

impl<T: TokenType> MembershipQuery<T> {
    /// Returns `true` if the candidate is a key.
    pub fn is_present(&self) -> bool {
        self.id.is_some()
    }
}

/// Numeric tokens, and the unusually long ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericSummary {
    /// The number of numeric tokens.
    pub count: usize,

    /// All numeric tokens, in vocabulary order.
    pub tokens: Vec<String>,

    /// Numeric tokens longer than `threshold` chars, in vocabulary order.
    pub outliers: Vec<String>,

    /// The outlier length threshold used.
    pub threshold: usize,
}

/// Descriptive statistics and membership checks over a vocabulary.
///
/// Built from [`AnalyzerOptions::init`].
#[derive(Debug, Clone)]
pub struct VocabAnalyzer {
    options: AnalyzerOptions,
    reserved: AHashSet<String>,
}

impl Default for VocabAnalyzer {
    fn default() -> Self {
        Self {
            reserved: AnalyzerOptions::default().reserved_tokens.into_iter().collect(),
            options: AnalyzerOptions::default(),
        }
    }
}

impl VocabAnalyzer {
    /// Initialize an analyzer.
    ///
    /// # Errors
    /// [`AnalysisError::InvalidMarker`] if the continuation marker is empty.
    pub fn init(options: AnalyzerOptions) -> Result<Self, AnalysisError> {
        if options.continuation_marker.is_empty() {
            return Err(AnalysisError::InvalidMarker);
        }
        let reserved = options.reserved_tokens.iter().cloned().collect();
        Ok(Self { options, reserved })
    }

    /// Get the options.
    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// The prefix marking a non-initial subword fragment.
    pub fn continuation_marker(&self) -> &str {
        &self.options.continuation_marker
    }

    /// Returns `true` if the token is a reserved literal.
    pub fn is_reserved(
        &self,
        token: &str,
    ) -> bool {
        self.reserved.contains(token)
    }

    /// Strip the continuation marker, if the token starts with it.
    pub fn strip_continuation<'a>(
        &self,
        token: &'a str,
    ) -> Option<&'a str> {
        token.strip_prefix(self.continuation_marker())
    }

    /// Classify a token by its text.
    ///
    /// Rules, first match wins:
    /// 1. a reserved literal;
    /// 2. the marker plus exactly one char;
    /// 3. exactly one char;
    /// 4. the marker plus anything else;
    /// 5. all decimal digits;
    /// 6. a whole word.
    pub fn classify(
        &self,
        token: &str,
    ) -> TokenClass {
        if self.is_reserved(token) {
            return TokenClass::ReservedSpecial;
        }
        let rest = self.strip_continuation(token);
        if rest.is_some_and(|rest| rest.chars().count() == 1) {
            return TokenClass::SingleCharacterContinuation;
        }
        if token.chars().count() == 1 {
            return TokenClass::SingleCharacterStandalone;
        }
        if rest.is_some() {
            return TokenClass::MultiCharacterContinuation;
        }
        if is_numeric_token(token) {
            return TokenClass::Numeric;
        }
        TokenClass::WholeWord
    }

    /// Count the tokens of each class.
    ///
    /// Every class is present in the result; the counts sum to the vocabulary size.
    pub fn class_counts<T, V>(
        &self,
        vocab: &V,
    ) -> BTreeMap<TokenClass, usize>
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        let mut counts: BTreeMap<TokenClass, usize> =
            TokenClass::ALL.iter().map(|&class| (class, 0)).collect();
        for token in vocab.tokens() {
            *counts.entry(self.classify(token)).or_default() += 1;
        }
        counts
    }

    /// Export the tokens in native order, escaped for the configured dump encoding.
    ///
    /// # Errors
    /// [`AnalysisError::Encoding`] if a token cannot be escaped.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab)))]
    pub fn dump<T, V>(
        &self,
        vocab: &V,
    ) -> Result<Vec<String>, AnalysisError>
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        vocab
            .tokens()
            .map(|token| escape_token(token, self.options.dump_encoding))
            .collect()
    }

    /// Collect single char tokens, and check the standalone/continuation sets agree.
    ///
    /// The agreement is reported, not assumed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab)))]
    pub fn single_character_pairs<T, V>(
        &self,
        vocab: &V,
    ) -> SingleCharPairs
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        let mut standalone: Vec<char> = Vec::new();
        let mut continuation: Vec<char> = Vec::new();

        for token in vocab.tokens() {
            match self.classify(token) {
                TokenClass::SingleCharacterStandalone => standalone.extend(token.chars()),
                TokenClass::SingleCharacterContinuation => {
                    if let Some(rest) = self.strip_continuation(token) {
                        continuation.extend(rest.chars());
                    }
                }
                _ => {}
            }
        }

        let standalone_set: AHashSet<char> = standalone.iter().copied().collect();
        let continuation_set: AHashSet<char> = continuation.iter().copied().collect();
        let sets_match = standalone_set == continuation_set;

        log::debug!(
            "single chars: {} standalone, {} continuation, match={}",
            standalone.len(),
            continuation.len(),
            sets_match
        );

        SingleCharPairs {
            standalone,
            continuation,
            sets_match,
        }
    }

    /// Histogram of token lengths (in chars), over tokens matching `predicate`.
    pub fn length_histogram<T, V, P>(
        &self,
        vocab: &V,
        predicate: P,
    ) -> LengthHistogram
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
        P: Fn(&str) -> bool,
    {
        vocab
            .tokens()
            .filter(|&token| predicate(token))
            .map(|token| token.chars().count())
            .collect()
    }

    /// Histogram of the lengths of every token.
    pub fn token_length_histogram<T, V>(
        &self,
        vocab: &V,
    ) -> LengthHistogram
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        self.length_histogram(vocab, |_| true)
    }

    /// Histogram of the lengths of marker-prefixed tokens, marker excluded.
    pub fn continuation_length_histogram<T, V>(
        &self,
        vocab: &V,
    ) -> LengthHistogram
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        vocab
            .tokens()
            .filter_map(|token| self.strip_continuation(token))
            .map(|rest| rest.chars().count())
            .collect()
    }

    /// Count tokens starting with the continuation marker.
    ///
    /// This is a plain prefix test, so single char continuations are included.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab)))]
    pub fn continuation_ratio<T, V>(
        &self,
        vocab: &V,
    ) -> ContinuationRatio
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        let marker = self.continuation_marker();
        let count = vocab
            .tokens()
            .filter(|token| token.starts_with(marker))
            .count();

        let ratio = ContinuationRatio {
            count,
            total: vocab.len(),
        };
        log::debug!("continuations: {} of {} ({ratio})", ratio.count, ratio.total);
        ratio
    }

    /// Multi-char continuation tokens whose stripped form is not a key.
    ///
    /// An empty result means full coverage; partial coverage is normal.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab)))]
    pub fn has_continuation_coverage<T, V>(
        &self,
        vocab: &V,
    ) -> Vec<String>
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        let missing: Vec<String> = vocab
            .tokens()
            .filter(|token| self.classify(token) == TokenClass::MultiCharacterContinuation)
            .filter(|token| {
                self.strip_continuation(token)
                    .is_some_and(|rest| !vocab.contains_token(rest))
            })
            .map(str::to_string)
            .collect();

        log::debug!("{} continuations lack a standalone form", missing.len());
        missing
    }

    /// Exact, case-sensitive key membership.
    ///
    /// No normalization is applied to `candidate`.
    pub fn contains<T, V>(
        &self,
        vocab: &V,
        candidate: &str,
    ) -> bool
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        vocab.contains_token(candidate)
    }

    /// Key membership, with the id when present.
    pub fn query<T, V>(
        &self,
        vocab: &V,
        candidate: &str,
    ) -> MembershipQuery<T>
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        MembershipQuery {
            candidate: candidate.to_string(),
            id: vocab.lookup_id(candidate),
        }
    }

    /// Collect the numeric tokens, and those longer than the outlier threshold.
    ///
    /// Single digit tokens count as numbers here.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab)))]
    pub fn count_numeric<T, V>(
        &self,
        vocab: &V,
    ) -> NumericSummary
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        let threshold = self.options.numeric_outlier_length;

        let tokens: Vec<String> = vocab
            .tokens()
            .filter(|token| is_numeric_token(token))
            .map(str::to_string)
            .collect();

        let outliers: Vec<String> = tokens
            .iter()
            .filter(|token| token.chars().count() > threshold)
            .cloned()
            .collect();

        log::debug!("{} numbers, {} longer than {threshold}", tokens.len(), outliers.len());

        NumericSummary {
            count: tokens.len(),
            tokens,
            outliers,
            threshold,
        }
    }

    /// Count integers in ``[low, high)`` whose decimal form is a key.
    ///
    /// # Errors
    /// [`AnalysisError::InvalidRange`] if `low >= high`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab)))]
    pub fn count_range_coverage<T, V>(
        &self,
        vocab: &V,
        low: i64,
        high: i64,
    ) -> Result<usize, AnalysisError>
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
    {
        if low >= high {
            return Err(AnalysisError::InvalidRange { low, high });
        }
        Ok((low..high)
            .filter(|i| vocab.contains_token(&i.to_string()))
            .count())
    }

    /// Count the candidates which are keys.
    ///
    /// The list is used exactly as given.
    pub fn count_external_list_coverage<T, V, I, S>(
        &self,
        vocab: &V,
        candidates: I,
    ) -> usize
    where
        T: TokenType,
        V: TokenVocabIndex<T>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .filter(|candidate| vocab.contains_token(candidate.as_ref()))
            .count()
    }
}
