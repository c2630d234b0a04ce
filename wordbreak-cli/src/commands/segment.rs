//! Segment command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, InputEncoding, InputSource};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormatter, SegmentData, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordbreak_core::{Encoding, MalformedPolicy, Segmenter, SegmenterConfig, TextBuffer};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Input encoding: auto, a UTF label or any WHATWG label [default: auto]
    #[arg(short, long, value_name = "LABEL", env = "WORDBREAK_ENCODING")]
    pub encoding: Option<String>,

    /// Only output word segments (letters, numbers, kana, ideographs)
    #[arg(short, long)]
    pub words_only: bool,

    /// Replace malformed input with U+FFFD instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one segment per line
    Text,
    /// JSON array of sources with their segments
    Json,
    /// Markdown formatted output
    Markdown,
}

/// Effective settings after merging the config file and flags
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: OutputFormat,
    input_encoding: InputEncoding,
    malformed: MalformedPolicy,
    words_only: bool,
    pretty_json: bool,
    threads: usize,
}

/// Segments of one input, ready for output
#[derive(Debug)]
struct SegmentedSource {
    name: String,
    encoding: Encoding,
    segments: Vec<SegmentData>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting word segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve_settings(&config)?;
        log::debug!("Effective settings: {:?}", settings);

        let segmenter = Segmenter::with_config(
            SegmenterConfig::builder()
                .malformed(settings.malformed)
                .build()?,
        );
        let sources = resolve_patterns(&self.input)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build()
            .context("Failed to create worker thread pool")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let results: Vec<Result<SegmentedSource>> = pool.install(|| {
            sources
                .par_iter()
                .map(|source| {
                    let result = segment_source(source, &segmenter, &settings);
                    if progress.is_active() {
                        progress.file_completed(&source.name());
                    }
                    result
                })
                .collect()
        });
        progress.finish();

        let segmented = results.into_iter().collect::<Result<Vec<_>>>()?;
        self.write_output(&settings, &segmented)?;

        log::info!("Segmented {} input(s)", segmented.len());
        Ok(())
    }

    /// Merge config file values with command-line flags
    fn resolve_settings(&self, config: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.format
                ))
            })?,
        };

        let label = self
            .encoding
            .as_deref()
            .unwrap_or(&config.processing.encoding);
        let input_encoding: InputEncoding = label.parse()?;

        let malformed = if self.lossy {
            MalformedPolicy::Replace
        } else {
            config.processing.malformed
        };

        let threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };

        Ok(Settings {
            format,
            input_encoding,
            malformed,
            words_only: self.words_only || config.output.words_only,
            pretty_json: config.output.pretty_json,
            threads,
        })
    }

    fn write_output(&self, settings: &Settings, segmented: &[SegmentedSource]) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for source in segmented {
            formatter.start_source(&source.name, source.encoding)?;
            for segment in &source.segments {
                formatter.format_segment(segment)?;
            }
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

/// Read, decode and segment one input
fn segment_source(
    source: &InputSource,
    segmenter: &Segmenter,
    settings: &Settings,
) -> Result<SegmentedSource> {
    let name = source.name();
    let raw = source.read()?;

    let prepared = settings
        .input_encoding
        .prepare(raw, settings.malformed)
        .with_context(|| format!("Failed to decode {name}"))?;
    let buffer = TextBuffer::new(&prepared.bytes, prepared.encoding)
        .with_context(|| format!("Invalid {} buffer in {name}", prepared.encoding))?;
    let segmentation = segmenter
        .segment(&buffer)
        .with_context(|| format!("Failed to segment {name}"))?;

    let segments: Vec<SegmentData> = segmentation
        .iter()
        .filter(|segment| !settings.words_only || segment.is_word())
        .map(|segment| SegmentData {
            text: segmentation.text_of(&segment),
            start: segment.start,
            end: segment.end,
            kind: segment.kind,
        })
        .collect();

    log::info!(
        "{name}: {} segment(s), read as {}",
        segments.len(),
        prepared.source_encoding
    );

    Ok(SegmentedSource {
        name,
        encoding: prepared.encoding,
        segments,
    })
}
