//! # Inspection Report
//!
//! Text rendering of analyzer results.

use std::io::Write;
use vocabscan::analysis::LengthHistogram;
use vocabscan::types::TokenType;
use vocabscan::vocab::public::bert::is_unused_placeholder;
use vocabscan::{TokenVocabIndex, VocabAnalyzer};

/// Single chars printed per row.
pub const CHARS_PER_ROW: usize = 40;

/// Widest histogram bar, in columns.
pub const HISTOGRAM_WIDTH: usize = 50;

/// Misspelling / contraction / subword queries, checked in pairs.
pub const DEFAULT_QUERIES: &[&str] = &[
    "misspelled",
    "mispelled",
    "government",
    "goverment",
    "beginning",
    "begining",
    "separate",
    "seperate",
    "can't",
    "cant",
    "##ly",
    "ly",
];

/// Inputs to [`write_report`] beyond the vocabulary.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    /// Extra membership queries.
    pub queries: Vec<String>,

    /// An external candidate list, such as first names.
    pub names: Option<Vec<String>>,

    /// Inclusive start of the year range.
    pub range_low: i64,

    /// Exclusive end of the year range.
    pub range_high: i64,

    /// Maximum number of uncovered subwords to list.
    pub max_missing: usize,
}

/// Format an integer with `,` thousands separators.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Lay out chars space-separated, `per_row` to a row.
pub fn format_char_rows(
    chars: &[char],
    per_row: usize,
) -> Vec<String> {
    chars
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Render a histogram as text bars, scaled to `width` columns.
pub fn format_histogram(
    hist: &LengthHistogram,
    width: usize,
) -> Vec<String> {
    let max_count = hist.max_count().max(1);
    let label_width = hist
        .max_length()
        .map_or(1, |len| len.to_string().len());

    hist.iter()
        .map(|(length, count)| {
            let bar = (count * width).div_ceil(max_count);
            format!(
                "{length:>label_width$} | {} {}",
                "#".repeat(bar),
                format_thousands(count)
            )
        })
        .collect()
}

/// Write the full inspection report.
pub fn write_report<T, V, W>(
    writer: &mut W,
    analyzer: &VocabAnalyzer,
    vocab: &V,
    inputs: &ReportInputs,
) -> anyhow::Result<()>
where
    T: TokenType,
    V: TokenVocabIndex<T>,
    W: Write,
{
    let marker = analyzer.continuation_marker();

    writeln!(writer, "Vocabulary size: {}", format_thousands(vocab.len()))?;
    let placeholders = vocab.tokens().filter(|t| is_unused_placeholder(t)).count();
    writeln!(
        writer,
        "Unused placeholder tokens: {}",
        format_thousands(placeholders)
    )?;
    writeln!(writer)?;

    writeln!(writer, "Token classes:")?;
    for (class, count) in analyzer.class_counts(vocab) {
        writeln!(writer, "  {:<30} {:>8}", class.name(), format_thousands(count))?;
    }
    writeln!(writer)?;

    let pairs = analyzer.single_character_pairs(vocab);
    writeln!(
        writer,
        "Number of single character tokens: {}",
        format_thousands(pairs.standalone.len())
    )?;
    for row in format_char_rows(&pairs.standalone, CHARS_PER_ROW) {
        writeln!(writer, "{row}")?;
    }
    writeln!(
        writer,
        "Number of single character tokens with {marker}: {}",
        format_thousands(pairs.continuation.len())
    )?;
    for row in format_char_rows(&pairs.continuation, CHARS_PER_ROW) {
        writeln!(writer, "{row}")?;
    }
    writeln!(writer, "Are the two sets identical? {}", pairs.sets_match)?;
    if !pairs.sets_match {
        writeln!(
            writer,
            "  without {marker} form: {:?}",
            pairs.missing_continuations()
        )?;
        writeln!(
            writer,
            "  without standalone form: {:?}",
            pairs.missing_standalones()
        )?;
    }
    writeln!(writer)?;

    let lengths = analyzer.token_length_histogram(vocab);
    writeln!(
        writer,
        "Maximum token length: {}",
        lengths.max_length().unwrap_or_default()
    )?;
    writeln!(writer, "Vocab Token Lengths:")?;
    for row in format_histogram(&lengths, HISTOGRAM_WIDTH) {
        writeln!(writer, "{row}")?;
    }
    writeln!(writer)?;

    let ratio = analyzer.continuation_ratio(vocab);
    writeln!(
        writer,
        "Number of subwords: {} of {}",
        format_thousands(ratio.count),
        format_thousands(ratio.total)
    )?;
    writeln!(writer, "{ratio}")?;
    writeln!(writer, "Subword Token Lengths (w/o \"{marker}\"):")?;
    for row in format_histogram(
        &analyzer.continuation_length_histogram(vocab),
        HISTOGRAM_WIDTH,
    ) {
        writeln!(writer, "{row}")?;
    }
    writeln!(writer)?;

    writeln!(writer, "Membership:")?;
    let candidates = DEFAULT_QUERIES
        .iter()
        .map(|s| s.to_string())
        .chain(inputs.queries.iter().cloned());
    for candidate in candidates {
        let query = analyzer.query(vocab, &candidate);
        match query.id {
            Some(id) => writeln!(writer, "  {:?} in vocab: true ({id:?})", query.candidate)?,
            None => writeln!(writer, "  {:?} in vocab: false", query.candidate)?,
        }
    }
    writeln!(writer)?;

    let missing = analyzer.has_continuation_coverage(vocab);
    if missing.is_empty() {
        writeln!(writer, "Every subword has a standalone token.")?;
    } else {
        writeln!(
            writer,
            "{} subwords have no standalone token:",
            format_thousands(missing.len())
        )?;
        for token in missing.iter().take(inputs.max_missing) {
            let rest = analyzer.strip_continuation(token).unwrap_or(token);
            writeln!(writer, "  Did not find a token for {rest} ({token})")?;
        }
    }
    writeln!(writer)?;

    if let Some(names) = &inputs.names {
        writeln!(writer, "Number of names: {}", format_thousands(names.len()))?;
        let hits = analyzer.count_external_list_coverage(vocab, names);
        writeln!(
            writer,
            "{} names in the vocabulary",
            format_thousands(hits)
        )?;
        writeln!(writer)?;
    }

    let numbers = analyzer.count_numeric(vocab);
    if !numbers.outliers.is_empty() {
        writeln!(
            writer,
            "Numbers longer than {} chars:",
            numbers.threshold
        )?;
        for token in &numbers.outliers {
            writeln!(writer, "  {token}")?;
        }
    }
    writeln!(
        writer,
        "Vocab includes {} numbers.",
        format_thousands(numbers.count)
    )?;

    let years = analyzer.count_range_coverage(vocab, inputs.range_low, inputs.range_high)?;
    let span = (inputs.range_high - inputs.range_low) as usize;
    writeln!(
        writer,
        "Vocab includes {} of {} dates from {} - {}",
        format_thousands(years),
        format_thousands(span),
        inputs.range_low,
        inputs.range_high
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocabscan::TokenVocab;
    use vocabscan::vocab::tooling::testing::mini_bert_vocab;

    fn inputs() -> ReportInputs {
        ReportInputs {
            queries: vec!["starbucks".to_string()],
            names: Some(vec!["the".to_string(), "bob".to_string()]),
            range_low: 1600,
            range_high: 2021,
            max_missing: 1,
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(30522), "30,522");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_char_rows() {
        let chars: Vec<char> = ('a'..='e').collect();
        assert_eq!(format_char_rows(&chars, 2), vec!["a b", "c d", "e"]);
        assert_eq!(format_char_rows(&chars, 40), vec!["a b c d e"]);
        assert!(format_char_rows(&[], 40).is_empty());
    }

    #[test]
    fn test_format_histogram() {
        let hist: LengthHistogram = [1, 1, 1, 1, 2, 2, 10].into_iter().collect();
        assert_eq!(
            format_histogram(&hist, 4),
            vec![" 1 | #### 4", " 2 | ## 2", "10 | # 1"]
        );
    }

    #[test]
    fn test_write_report() {
        let analyzer = VocabAnalyzer::default();
        let vocab: TokenVocab<u32> = mini_bert_vocab();

        let mut buf: Vec<u8> = Vec::new();
        write_report(&mut buf, &analyzer, &vocab, &inputs()).unwrap();
        let report = String::from_utf8(buf).unwrap();

        assert!(report.contains("Vocabulary size: 29\n"));
        assert!(report.contains("Unused placeholder tokens: 1\n"));
        assert!(report.contains("Number of single character tokens: 6\n"));
        assert!(report.contains("a b c 1 ' t\n"));
        assert!(report.contains("Are the two sets identical? false\n"));
        assert!(report.contains("Number of subwords: 7 of 29\n24.1%\n"));
        assert!(report.contains("  \"misspelled\" in vocab: true (28)\n"));
        assert!(report.contains("  \"mispelled\" in vocab: false\n"));
        assert!(report.contains("  \"starbucks\" in vocab: false\n"));
        assert!(report.contains("2 subwords have no standalone token:\n"));
        assert!(report.contains("  Did not find a token for s (##s)\n"));
        assert!(!report.contains("(##ing)"));
        assert!(report.contains("1 names in the vocabulary\n"));
        assert!(report.contains("Numbers longer than 4 chars:\n  10000\n"));
        assert!(report.contains("Vocab includes 5 numbers.\n"));
        assert!(report.contains("Vocab includes 3 of 421 dates from 1600 - 2021\n"));
    }

    #[test]
    fn test_write_report_invalid_range() {
        let analyzer = VocabAnalyzer::default();
        let vocab: TokenVocab<u32> = mini_bert_vocab();

        let inputs = ReportInputs {
            range_low: 2021,
            range_high: 1600,
            ..inputs()
        };

        let mut buf: Vec<u8> = Vec::new();
        let err = write_report(&mut buf, &analyzer, &vocab, &inputs).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid range: low (2021) must be less than high (1600)"
        );
    }
}
