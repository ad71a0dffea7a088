use crate::analyzers::sentiment::SentimentOptions;
use crate::analyzers::{languages, ner, sentiment};
use crate::config::ProbeConfig;
use crate::core::DatasetReport;
use crate::formatting::FormattingConfig;
use crate::io;
use crate::io::output;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: crate::cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub samples: Option<usize>,
    pub imbalance_threshold: Option<f64>,
    pub formatting_config: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let mut probe_config = ProbeConfig::load(config.config.as_deref(), &config.path)
        .context("Failed to load configuration")?;
    apply_overrides(&mut probe_config, &config);

    let report = probe_datasets(&config.path, &probe_config)
        .with_context(|| format!("Failed to analyze datasets under {}", config.path.display()))?;

    let mut writer = output::create_writer(
        config.format.into(),
        config.output.as_deref(),
        config.formatting_config,
        &probe_config.display,
    )?;
    writer.write_report(&report)?;

    Ok(())
}

fn apply_overrides(probe_config: &mut ProbeConfig, config: &AnalyzeConfig) {
    if let Some(samples) = config.samples {
        probe_config.display.sample_sentences = samples;
        probe_config.display.sample_texts = samples;
    }
    if let Some(threshold) = config.imbalance_threshold {
        probe_config.sentiment.imbalance_threshold = threshold;
    }
}

/// Run every report section over the dataset base directory.
///
/// Missing corpus directories become warnings in the report; the remaining
/// sections still run. Missing split files are handled inside the
/// sentiment analyzer.
pub fn probe_datasets(base_path: &Path, config: &ProbeConfig) -> Result<DatasetReport> {
    let mut report = DatasetReport::new(base_path.to_path_buf());

    let ner_root = base_path.join(&config.ner.root);
    for corpus in &config.ner.corpora {
        let corpus_dir = ner_root.join(corpus);
        if !io::dir_exists(&corpus_dir) {
            warn(&mut report, format!("{corpus} not found"));
            continue;
        }
        let corpus_report =
            ner::analyze_ner_corpus(corpus, &corpus_dir, config.display.sample_sentences)?;
        report.ner.push(corpus_report);
    }

    let sentiment_root = base_path.join(&config.sentiment.root);
    let language_dir = sentiment_root.join(&config.sentiment.language);
    if io::dir_exists(&language_dir) {
        let name = format!("nusax-senti ({})", config.sentiment.language);
        let options = SentimentOptions {
            sample_texts: config.display.sample_texts,
            preview_chars: config.display.text_preview_chars,
            imbalance_threshold: config.sentiment.imbalance_threshold,
        };
        report.sentiment = Some(sentiment::analyze_sentiment_corpus(
            &name,
            &language_dir,
            &config.sentiment.splits,
            options,
        )?);
    } else {
        warn(
            &mut report,
            format!("{} not found", config.sentiment.language),
        );
    }

    if io::dir_exists(&sentiment_root) {
        report.languages = Some(languages::scan_language_overview(&sentiment_root)?);
    } else {
        warn(
            &mut report,
            format!("sentiment root {} not found", config.sentiment.root.display()),
        );
    }

    Ok(report)
}

fn warn(report: &mut DatasetReport, message: String) {
    log::warn!("{message}");
    report.warnings.push(message);
}
