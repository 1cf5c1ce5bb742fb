//! # Analyzer Options

use crate::analysis::VocabAnalyzer;
use crate::errors::AnalysisError;
use crate::vocab::public::bert::BERT_RESERVED_TOKENS;
use crate::{DEFAULT_CONTINUATION_MARKER, DEFAULT_NUMERIC_OUTLIER_LENGTH};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The character set a vocabulary dump must be representable in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpEncoding {
    /// Any char but control characters.
    #[default]
    Utf8,

    /// Printable ASCII only.
    Ascii,
}

/// Options for [`VocabAnalyzer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    /// The prefix marking a non-initial subword fragment.
    pub continuation_marker: String,

    /// Literal tokens with reserved structural meaning.
    pub reserved_tokens: Vec<String>,

    /// Numeric tokens longer than this many chars are outliers.
    pub numeric_outlier_length: usize,

    /// The dump output character set.
    pub dump_encoding: DumpEncoding,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            continuation_marker: DEFAULT_CONTINUATION_MARKER.to_string(),
            reserved_tokens: BERT_RESERVED_TOKENS.iter().map(|s| s.to_string()).collect(),
            numeric_outlier_length: DEFAULT_NUMERIC_OUTLIER_LENGTH,
            dump_encoding: DumpEncoding::default(),
        }
    }
}

impl AnalyzerOptions {
    /// Load options from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn load_json_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open options {}", path.display()))?;

        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("failed to parse options {}", path.display()))
    }

    /// Sets the continuation marker.
    pub fn with_continuation_marker<S: Into<String>>(
        self,
        continuation_marker: S,
    ) -> Self {
        Self {
            continuation_marker: continuation_marker.into(),
            ..self
        }
    }

    /// Replace the reserved token set.
    pub fn with_reserved_tokens<W, S>(
        self,
        reserved_tokens: W,
    ) -> Self
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved_tokens: reserved_tokens.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Sets the numeric outlier length threshold.
    pub fn with_numeric_outlier_length(
        self,
        numeric_outlier_length: usize,
    ) -> Self {
        Self {
            numeric_outlier_length,
            ..self
        }
    }

    /// Sets the dump output character set.
    pub fn with_dump_encoding(
        self,
        dump_encoding: DumpEncoding,
    ) -> Self {
        Self {
            dump_encoding,
            ..self
        }
    }

    /// Initializes a [`VocabAnalyzer`] from these options.
    ///
    /// # Errors
    /// [`AnalysisError::InvalidMarker`] if the continuation marker is empty.
    pub fn init(self) -> Result<VocabAnalyzer, AnalysisError> {
        VocabAnalyzer::init(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = AnalyzerOptions::default();
        assert_eq!(options.continuation_marker, "##");
        assert_eq!(options.reserved_tokens.len(), 5);
        assert_eq!(options.numeric_outlier_length, 4);
        assert_eq!(options.dump_encoding, DumpEncoding::Utf8);
    }

    #[test]
    fn test_builder() {
        let options = AnalyzerOptions::default()
            .with_continuation_marker("@@")
            .with_reserved_tokens(["<s>", "</s>"])
            .with_numeric_outlier_length(6)
            .with_dump_encoding(DumpEncoding::Ascii);

        assert_eq!(options.continuation_marker, "@@");
        assert_eq!(options.reserved_tokens, vec!["<s>", "</s>"]);
        assert_eq!(options.numeric_outlier_length, 6);
        assert_eq!(options.dump_encoding, DumpEncoding::Ascii);
    }

    #[test]
    fn test_empty_marker_rejected() {
        let err = AnalyzerOptions::default()
            .with_continuation_marker("")
            .init()
            .unwrap_err();
        assert_eq!(err, AnalysisError::InvalidMarker);
    }

    #[test]
    fn test_load_json_path() {
        tempdir::TempDir::new("options_test")
            .and_then(|dir| {
                let path = dir.path().join("options.json");
                let mut file = std::fs::File::create(&path)?;
                file.write_all(br#"{"continuation_marker": "@@", "dump_encoding": "ascii"}"#)?;
                drop(file);

                let options = AnalyzerOptions::load_json_path(&path).expect("Failed to load");
                assert_eq!(options.continuation_marker, "@@");
                assert_eq!(options.dump_encoding, DumpEncoding::Ascii);
                assert_eq!(options.numeric_outlier_length, 4);
                assert_eq!(options.reserved_tokens.len(), 5);

                Ok(())
            })
            .unwrap();
    }
}
