//! `.dataprobe.toml` configuration.
//!
//! Every field has a serde default so a partial (or absent) config file
//! works; the defaults describe the IndoLEM + NusaX layout the probe was
//! originally written for.

use crate::errors::ProbeError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".dataprobe.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub ner: NerConfig,

    #[serde(default)]
    pub sentiment: SentimentConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the BIO-tagged corpora live, relative to the base path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NerConfig {
    #[serde(default = "default_ner_root")]
    pub root: PathBuf,

    /// Corpus subdirectories under the root
    #[serde(default = "default_ner_corpora")]
    pub corpora: Vec<String>,
}

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            root: default_ner_root(),
            corpora: default_ner_corpora(),
        }
    }
}

/// Where the sentiment corpora live, relative to the base path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    #[serde(default = "default_sentiment_root")]
    pub root: PathBuf,

    /// Language directory given the per-split treatment
    #[serde(default = "default_sentiment_language")]
    pub language: String,

    #[serde(default = "default_sentiment_splits")]
    pub splits: Vec<String>,

    /// max/min label ratio above which the distribution is flagged
    #[serde(default = "default_imbalance_threshold")]
    pub imbalance_threshold: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            root: default_sentiment_root(),
            language: default_sentiment_language(),
            splits: default_sentiment_splits(),
            imbalance_threshold: default_imbalance_threshold(),
        }
    }
}

/// Sample and preview budgets for report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_sample_sentences")]
    pub sample_sentences: usize,

    #[serde(default = "default_sample_texts")]
    pub sample_texts: usize,

    /// Tokens shown of a sample sentence before it is elided
    #[serde(default = "default_sentence_preview_tokens")]
    pub sentence_preview_tokens: usize,

    #[serde(default = "default_text_preview_chars")]
    pub text_preview_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sample_sentences: default_sample_sentences(),
            sample_texts: default_sample_texts(),
            sentence_preview_tokens: default_sentence_preview_tokens(),
            text_preview_chars: default_text_preview_chars(),
        }
    }
}

fn default_ner_root() -> PathBuf {
    PathBuf::from("indolem_ner/indolem/ner/data")
}
fn default_ner_corpora() -> Vec<String> {
    vec!["nerugm".to_string(), "nerui".to_string()]
}
fn default_sentiment_root() -> PathBuf {
    PathBuf::from("nusax_sentiment/nusax/datasets/sentiment")
}
fn default_sentiment_language() -> String {
    "indonesian".to_string()
}
fn default_sentiment_splits() -> Vec<String> {
    vec!["train".to_string(), "valid".to_string(), "test".to_string()]
}
fn default_imbalance_threshold() -> f64 {
    2.0
}
fn default_sample_sentences() -> usize {
    3
}
fn default_sample_texts() -> usize {
    3
}
fn default_sentence_preview_tokens() -> usize {
    15
}
fn default_text_preview_chars() -> usize {
    120
}

impl ProbeConfig {
    /// Load from an explicit path, or from `.dataprobe.toml` next to the
    /// dataset base path, falling back to defaults when neither exists.
    pub fn load(explicit: Option<&Path>, base_path: &Path) -> Result<Self> {
        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let local = base_path.join(CONFIG_FILE_NAME);
                local.is_file().then_some(local)
            }
        };

        let config = match candidate {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                let content = crate::io::read_file(&path)?;
                let config: ProbeConfig = toml::from_str(&content)
                    .map_err(|e| ProbeError::config(format!("{}: {e}", path.display())))?;
                config
            }
            None => ProbeConfig::default(),
        };

        config.validate().map_err(ProbeError::config)?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.sentiment.imbalance_threshold <= 0.0 {
            return Err(format!(
                "imbalance_threshold must be positive, got {}",
                self.sentiment.imbalance_threshold
            ));
        }
        if self.sentiment.splits.is_empty() {
            return Err("at least one sentiment split must be configured".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_describe_the_reference_layout() {
        let config = ProbeConfig::default();
        assert_eq!(config.ner.corpora, vec!["nerugm", "nerui"]);
        assert_eq!(config.sentiment.language, "indonesian");
        assert_eq!(config.sentiment.imbalance_threshold, 2.0);
        assert_eq!(config.display.text_preview_chars, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: ProbeConfig = toml::from_str(indoc! {r#"
            [sentiment]
            language = "javanese"
        "#})
        .unwrap();
        assert_eq!(config.sentiment.language, "javanese");
        assert_eq!(config.sentiment.splits, vec!["train", "valid", "test"]);
        assert_eq!(config.ner.corpora, vec!["nerugm", "nerui"]);
    }

    #[test]
    fn load_prefers_explicit_path() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("probe.toml");
        fs::write(&explicit, "[ner]\ncorpora = [\"custom\"]\n").unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[ner]\ncorpora = [\"local\"]\n",
        )
        .unwrap();

        let config = ProbeConfig::load(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.ner.corpora, vec!["custom"]);
    }

    #[test]
    fn load_finds_config_next_to_base_path() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[sentiment]\nimbalance_threshold = 3.5\n",
        )
        .unwrap();

        let config = ProbeConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.sentiment.imbalance_threshold, 3.5);
    }

    #[test]
    fn load_without_any_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ProbeConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.sentiment.language, "indonesian");
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let config: ProbeConfig = toml::from_str(indoc! {r#"
            [sentiment]
            imbalance_threshold = 0.0
        "#})
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_split_list() {
        let config: ProbeConfig = toml::from_str(indoc! {r#"
            [sentiment]
            splits = []
        "#})
        .unwrap();
        assert!(config.validate().is_err());
    }
}
