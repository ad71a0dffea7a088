pub mod stats;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use stats::{ImbalanceCheck, LengthStats};

/// Top-level result of one probe run over a dataset base directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DatasetReport {
    pub base_path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub ner: Vec<NerCorpusReport>,
    pub sentiment: Option<SentimentReport>,
    pub languages: Option<LanguageOverview>,
    /// Missing corpus directories, surfaced by every writer
    pub warnings: Vec<String>,
}

impl DatasetReport {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            timestamp: Utc::now(),
            ner: Vec::new(),
            sentiment: None,
            languages: None,
            warnings: Vec::new(),
        }
    }

    /// One summary row per analyzed corpus, NER corpora first.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        let mut rows = Vec::new();
        for corpus in &self.ner {
            rows.push(SummaryRow {
                name: corpus.name.clone(),
                kind: CorpusKind::Ner,
                size: corpus.total_tokens,
                unit: "tokens".to_string(),
                labels: corpus
                    .entity_types
                    .iter()
                    .map(|t| t.name.clone())
                    .collect(),
            });
        }
        if let Some(sentiment) = &self.sentiment {
            rows.push(SummaryRow {
                name: sentiment.name.clone(),
                kind: CorpusKind::Sentiment,
                size: sentiment.total_samples,
                unit: "samples".to_string(),
                labels: sentiment
                    .label_totals
                    .iter()
                    .map(|t| t.name.clone())
                    .collect(),
            });
        }
        rows
    }
}

/// Aggregate statistics for one BIO-tagged token corpus.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NerCorpusReport {
    pub name: String,
    pub file_count: usize,
    pub total_tokens: u64,
    pub total_sentences: u64,
    /// Tag distribution, count descending
    pub tag_counts: Vec<TagCount>,
    /// Entity types from B- tags, count descending
    pub entity_types: Vec<TagCount>,
    pub sample_sentences: Vec<Vec<TokenTag>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTag {
    pub token: String,
    pub tag: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: u64,
}

/// Statistics for one labeled text corpus across its splits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentimentReport {
    pub name: String,
    pub splits: Vec<SplitReport>,
    pub total_samples: u64,
    /// Label counts summed over all splits, count descending
    pub label_totals: Vec<TagCount>,
    pub imbalance: Option<ImbalanceCheck>,
    /// Previews of the first train rows
    pub sample_texts: Vec<SampleText>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SplitReport {
    pub split: String,
    pub samples: u64,
    pub label_counts: Vec<TagCount>,
    /// Text length in whitespace-separated words
    pub text_length: LengthStats,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleText {
    pub label: String,
    pub preview: String,
}

/// Train-split sample counts per language directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageOverview {
    /// Sorted by language name
    pub languages: Vec<LanguageCount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub train_samples: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorpusKind {
    Ner,
    Sentiment,
}

impl std::fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusKind::Ner => write!(f, "NER"),
            CorpusKind::Sentiment => write!(f, "Sentiment"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryRow {
    pub name: String,
    pub kind: CorpusKind,
    pub size: u64,
    pub unit: String,
    pub labels: Vec<String>,
}
