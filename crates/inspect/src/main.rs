use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use vocabscan::vocab::io::{
    load_token_vocab_from_json_path, load_token_vocab_from_txt_path, save_token_vocab_to_txt_path,
};
use vocabscan::wordlist::load_word_list_from_path;
use vocabscan::{AnalyzerOptions, DumpEncoding, TokenVocab};

mod report;

use report::{ReportInputs, write_report};

/// Vocabulary file formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VocabFormat {
    /// One token per line; the line index is the id.
    Txt,

    /// A ``{ "token": id }`` object, or a `tokenizer.json` document.
    Json,
}

impl VocabFormat {
    /// Guess the format from the file extension; anything but `.json` is `txt`.
    pub fn infer<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => VocabFormat::Json,
            _ => VocabFormat::Txt,
        }
    }
}

/// Tokenizer vocabulary inspector.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the vocabulary file.
    #[arg(long)]
    pub vocab: String,

    /// Vocabulary file format; inferred from the extension when absent.
    #[arg(long, value_enum)]
    pub format: Option<VocabFormat>,

    /// Optional JSON analyzer options file.
    #[arg(long)]
    pub config: Option<String>,

    /// Override the continuation marker.
    #[arg(long)]
    pub marker: Option<String>,

    /// Override the numeric outlier length.
    #[arg(long)]
    pub outlier_length: Option<usize>,

    /// Optional path to write the vocabulary dump to.
    #[arg(long)]
    pub dump_path: Option<String>,

    /// Escape every non-ASCII char in the dump.
    #[arg(long, default_value = "false")]
    pub ascii_dump: bool,

    /// Optional names list (one per line) to check coverage of.
    #[arg(long)]
    pub names_path: Option<String>,

    /// Extra membership queries.
    #[arg(short, long)]
    pub query: Vec<String>,

    /// Year range start (inclusive).
    #[arg(long, default_value = "1600")]
    pub range_low: i64,

    /// Year range end (exclusive).
    #[arg(long, default_value = "2021")]
    pub range_high: i64,

    /// Maximum number of uncovered subwords to list.
    #[arg(long, default_value = "10")]
    pub max_missing: usize,

    /// Enable verbose output.
    #[arg(long, default_value = "false")]
    pub verbose: bool,
}

impl Args {
    /// Build analyzer options from the config file and overrides.
    pub fn analyzer_options(&self) -> anyhow::Result<AnalyzerOptions> {
        let mut options = match &self.config {
            Some(path) => AnalyzerOptions::load_json_path(path)?,
            None => AnalyzerOptions::default(),
        };
        if let Some(marker) = &self.marker {
            options = options.with_continuation_marker(marker.as_str());
        }
        if let Some(length) = self.outlier_length {
            options = options.with_numeric_outlier_length(length);
        }
        if self.ascii_dump {
            options = options.with_dump_encoding(DumpEncoding::Ascii);
        }
        Ok(options)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("{:#?}", args);

    let options = args.analyzer_options()?;
    log::debug!("{:#?}", options);
    let analyzer = options.init()?;

    type T = u32;

    let format = args.format.unwrap_or_else(|| VocabFormat::infer(&args.vocab));
    let vocab: TokenVocab<T> = match format {
        VocabFormat::Txt => load_token_vocab_from_txt_path(&args.vocab)?,
        VocabFormat::Json => load_token_vocab_from_json_path(&args.vocab)?,
    };
    log::info!("Loaded {} tokens from {}", vocab.len(), args.vocab);

    if let Some(path) = &args.dump_path {
        save_token_vocab_to_txt_path(&vocab, path, analyzer.options().dump_encoding)?;
        log::info!("Wrote vocabulary dump to {path}");
    }

    let names = match &args.names_path {
        Some(path) => Some(load_word_list_from_path(path)?),
        None => None,
    };

    let inputs = ReportInputs {
        queries: args.query.clone(),
        names,
        range_low: args.range_low,
        range_high: args.range_high,
        max_missing: args.max_missing,
    };

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    write_report(&mut writer, &analyzer, &vocab, &inputs)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args() {
        Args::command().debug_assert();

        let args = Args::parse_from([
            "inspect",
            "--vocab",
            "vocab.txt",
            "--query",
            "starbucks",
            "-q",
            "triassic",
            "--marker",
            "@@",
            "--ascii-dump",
        ]);
        assert_eq!(args.query, vec!["starbucks", "triassic"]);
        assert_eq!(args.range_low, 1600);
        assert_eq!(args.range_high, 2021);

        let options = args.analyzer_options().unwrap();
        assert_eq!(options.continuation_marker, "@@");
        assert_eq!(options.dump_encoding, DumpEncoding::Ascii);
        assert_eq!(options.numeric_outlier_length, 4);
    }

    #[test]
    fn test_infer_format() {
        assert_eq!(VocabFormat::infer("vocab.txt"), VocabFormat::Txt);
        assert_eq!(VocabFormat::infer("tokenizer.JSON"), VocabFormat::Json);
        assert_eq!(VocabFormat::infer("vocab"), VocabFormat::Txt);
    }

    #[test]
    fn test_dump_then_reload() {
        let vocab: TokenVocab<u32> = vocabscan::vocab::tooling::testing::mini_bert_vocab();

        tempdir::TempDir::new("inspect_test")
            .and_then(|dir| {
                let path = dir.path().join("vocabulary.txt");
                save_token_vocab_to_txt_path(&vocab, &path, DumpEncoding::Utf8)
                    .expect("Failed to dump");

                let reloaded: TokenVocab<u32> =
                    load_token_vocab_from_txt_path(&path).expect("Failed to reload");
                assert_eq!(&vocab, &reloaded);

                Ok(())
            })
            .unwrap();
    }
}
