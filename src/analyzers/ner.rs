//! BIO-tagged token corpus statistics.
//!
//! A corpus is a flat directory of TSV files, one token per line
//! (`token<TAB>tag`, extra columns ignored), blank line marking a sentence
//! boundary. Every file in the directory is aggregated into one report;
//! the fold/split structure is not distinguished.

use crate::core::stats::CountTable;
use crate::core::{NerCorpusReport, TokenTag};
use crate::errors::ProbeError;
use crate::io;
use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Single-pass accumulator over token lines.
///
/// Feed lines in file order via `consume_line`; call `finish_file` at each
/// file boundary so a trailing sentence without a final blank line still
/// counts.
#[derive(Debug, Default)]
pub struct NerAccumulator {
    total_tokens: u64,
    total_sentences: u64,
    tag_counts: CountTable,
    entity_types: CountTable,
    samples: Vec<Vec<TokenTag>>,
    max_samples: usize,
    current_sentence: Vec<TokenTag>,
}

impl NerAccumulator {
    pub fn new(max_samples: usize) -> Self {
        Self {
            max_samples,
            ..Self::default()
        }
    }

    pub fn consume_line(&mut self, line: &str) {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            self.flush_sentence();
            return;
        }
        let mut parts = line.split('\t');
        let (Some(token), Some(tag)) = (parts.next(), parts.next()) else {
            // Fewer than two fields: not a token record, sentence continues
            return;
        };
        self.total_tokens += 1;
        self.tag_counts.increment(tag);
        if let Some(entity) = tag.strip_prefix("B-") {
            self.entity_types.increment(entity);
        }
        self.current_sentence.push(TokenTag {
            token: token.to_string(),
            tag: tag.to_string(),
        });
    }

    pub fn finish_file(&mut self) {
        self.flush_sentence();
    }

    fn flush_sentence(&mut self) {
        if self.current_sentence.is_empty() {
            return;
        }
        self.total_sentences += 1;
        let sentence = std::mem::take(&mut self.current_sentence);
        if self.samples.len() < self.max_samples {
            self.samples.push(sentence);
        }
    }

    pub fn into_report(self, name: &str, file_count: usize) -> NerCorpusReport {
        NerCorpusReport {
            name: name.to_string(),
            file_count,
            total_tokens: self.total_tokens,
            total_sentences: self.total_sentences,
            tag_counts: self.tag_counts.most_common(),
            entity_types: self.entity_types.most_common(),
            sample_sentences: self.samples,
        }
    }
}

/// Aggregate all `*.tsv` files under `dir` into one corpus report.
pub fn analyze_ner_corpus(name: &str, dir: &Path, max_samples: usize) -> Result<NerCorpusReport> {
    let files = io::list_files_with_extension(dir, "tsv")?;
    let mut acc = NerAccumulator::new(max_samples);

    for path in &files {
        log::debug!("reading NER file {}", path.display());
        let file = File::open(path).map_err(|e| ProbeError::io(path, e))?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line.map_err(|e| ProbeError::io(path, e))?;
            acc.consume_line(&line);
        }
        acc.finish_file();
    }

    Ok(acc.into_report(name, files.len()))
}
