//! Multi-language sentiment overview.
//!
//! Each language is a subdirectory of the sentiment root; a language is
//! listed when it has a `train.csv`, with its row count (header excluded).

use crate::core::{LanguageCount, LanguageOverview};
use crate::errors::ProbeError;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub fn scan_language_overview(root: &Path) -> Result<LanguageOverview> {
    let mut languages = Vec::new();

    for lang_dir in io::list_subdirectories(root)? {
        let train_file = lang_dir.join("train.csv");
        if !io::file_exists(&train_file) {
            continue;
        }
        let name = lang_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let train_samples = count_rows(&train_file)?;
        languages.push(LanguageCount {
            language: name,
            train_samples,
        });
    }

    Ok(LanguageOverview { languages })
}

/// Data rows in a headered CSV file.
fn count_rows(path: &Path) -> Result<u64> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ProbeError::parse(path, e.to_string()))?;

    let mut rows = 0;
    for record in reader.records() {
        record.map_err(|e| ProbeError::parse(path, e.to_string()))?;
        rows += 1;
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_languages_with_train_files_sorted() {
        let root = TempDir::new().unwrap();
        for (lang, rows) in [("javanese", 3), ("acehnese", 2), ("balinese", 0)] {
            let dir = root.path().join(lang);
            fs::create_dir(&dir).unwrap();
            let mut content = String::from("id,text,label\n");
            for i in 0..rows {
                content.push_str(&format!("{i},teks {i},neutral\n"));
            }
            fs::write(dir.join("train.csv"), content).unwrap();
        }
        // directory without train.csv is skipped
        fs::create_dir(root.path().join("empty")).unwrap();

        let overview = scan_language_overview(root.path()).unwrap();
        let entries: Vec<(&str, u64)> = overview
            .languages
            .iter()
            .map(|l| (l.language.as_str(), l.train_samples))
            .collect();
        assert_eq!(
            entries,
            vec![("acehnese", 2), ("balinese", 0), ("javanese", 3)]
        );
    }

    #[test]
    fn empty_root_yields_empty_overview() {
        let root = TempDir::new().unwrap();
        let overview = scan_language_overview(root.path()).unwrap();
        assert!(overview.languages.is_empty());
    }
}
