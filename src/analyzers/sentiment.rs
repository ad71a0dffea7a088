//! Labeled text corpus statistics.
//!
//! A corpus is a language directory containing one CSV per split with a
//! header row; the `text` and `label` columns are located by name, other
//! columns are ignored. Missing split files are skipped silently.

use crate::core::stats::{check_imbalance, length_stats, CountTable};
use crate::core::{SampleText, SentimentReport, SplitReport, TagCount};
use crate::errors::ProbeError;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const TEXT_COLUMN: &str = "text";
pub const LABEL_COLUMN: &str = "label";

/// Display budgets for the sentiment section.
#[derive(Debug, Clone, Copy)]
pub struct SentimentOptions {
    /// How many train rows to keep as sample previews
    pub sample_texts: usize,
    /// Preview truncation budget in characters
    pub preview_chars: usize,
    /// Ratio above which the label distribution counts as imbalanced
    pub imbalance_threshold: f64,
}

impl Default for SentimentOptions {
    fn default() -> Self {
        Self {
            sample_texts: 3,
            preview_chars: 120,
            imbalance_threshold: 2.0,
        }
    }
}

struct SplitData {
    report: SplitReport,
    labels: CountTable,
    samples: Vec<SampleText>,
}

/// Analyze one language directory across the given splits.
///
/// The first split in `splits` (conventionally `train`) contributes the
/// sample previews.
pub fn analyze_sentiment_corpus(
    name: &str,
    dir: &Path,
    splits: &[String],
    options: SentimentOptions,
) -> Result<SentimentReport> {
    let mut split_reports = Vec::new();
    let mut label_totals = CountTable::new();
    let mut total_samples = 0;
    let mut sample_texts = Vec::new();

    for (i, split) in splits.iter().enumerate() {
        let path = dir.join(format!("{split}.csv"));
        if !io::file_exists(&path) {
            log::debug!("split file {} not present, skipping", path.display());
            continue;
        }
        let keep_samples = if i == 0 { options.sample_texts } else { 0 };
        let data = analyze_split(split, &path, keep_samples, options.preview_chars)?;

        total_samples += data.report.samples;
        label_totals.merge(&data.labels);
        if sample_texts.is_empty() {
            sample_texts = data.samples;
        }
        split_reports.push(data.report);
    }

    let imbalance = check_imbalance(&label_totals, options.imbalance_threshold);

    Ok(SentimentReport {
        name: name.to_string(),
        splits: split_reports,
        total_samples,
        label_totals: label_totals.most_common(),
        imbalance,
        sample_texts,
    })
}

fn analyze_split(
    split: &str,
    path: &Path,
    keep_samples: usize,
    preview_chars: usize,
) -> Result<SplitData> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ProbeError::parse(path, e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| ProbeError::parse(path, e.to_string()))?
        .clone();
    let text_idx = find_column(&headers, TEXT_COLUMN, path)?;
    let label_idx = find_column(&headers, LABEL_COLUMN, path)?;

    let mut labels = CountTable::new();
    let mut word_counts: Vec<u64> = Vec::new();
    let mut samples = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line());
            match line {
                Some(n) => ProbeError::parse_at_line(path, n, e.to_string()),
                None => ProbeError::parse(path, e.to_string()),
            }
        })?;
        let text = record.get(text_idx).unwrap_or("");
        let label = record.get(label_idx).unwrap_or("");

        labels.increment(label);
        word_counts.push(text.split_whitespace().count() as u64);

        if samples.len() < keep_samples {
            samples.push(SampleText {
                label: label.to_string(),
                preview: truncate_preview(text, preview_chars),
            });
        }
    }

    Ok(SplitData {
        report: SplitReport {
            split: split.to_string(),
            samples: word_counts.len() as u64,
            label_counts: labels.most_common(),
            text_length: length_stats(&word_counts),
        },
        labels,
        samples,
    })
}

fn find_column(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ProbeError::missing_column(name, path).into())
}

/// Truncate on a char boundary, appending an ellipsis when shortened.
fn truncate_preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Per-label counts across splits sum to the total sample count.
pub fn label_sum(report: &SentimentReport) -> u64 {
    report.label_totals.iter().map(|t: &TagCount| t.count).sum()
}
