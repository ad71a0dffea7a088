// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    DatasetReport, LanguageCount, LanguageOverview, NerCorpusReport, SampleText, SentimentReport,
    SplitReport, SummaryRow, TagCount, TokenTag,
};

pub use crate::core::stats::{imbalance_ratio, length_stats, CountTable, ImbalanceCheck, LengthStats};

pub use crate::analyzers::{
    languages::scan_language_overview, ner::analyze_ner_corpus, sentiment::analyze_sentiment_corpus,
};

pub use crate::config::ProbeConfig;
pub use crate::errors::ProbeError;
pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
