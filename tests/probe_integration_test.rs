use dataprobe::commands::analyze::probe_datasets;
use dataprobe::config::{DisplayConfig, ProbeConfig};
use dataprobe::formatting::FormattingConfig;
use dataprobe::io::output::{JsonWriter, MarkdownWriter, ReportWriter, TerminalWriter};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_full_layout(base: &Path, config: &ProbeConfig) {
    for corpus in &config.ner.corpora {
        let dir = base.join(&config.ner.root).join(corpus);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("train.01.tsv"),
            "Budi\tB-PERSON\nke\tO\nSleman\tB-LOCATION\n\nhujan\tO\n",
        )
        .unwrap();
    }

    let sentiment_root = base.join(&config.sentiment.root);
    for (lang, rows) in [
        ("indonesian", vec![("positive", 3), ("negative", 1)]),
        ("javanese", vec![("neutral", 2)]),
    ] {
        let dir = sentiment_root.join(lang);
        fs::create_dir_all(&dir).unwrap();
        let mut train = String::from("id,text,label\n");
        let mut i = 0;
        for (label, n) in &rows {
            for _ in 0..*n {
                train.push_str(&format!("{i},contoh teks nomor {i},{label}\n"));
                i += 1;
            }
        }
        fs::write(dir.join("train.csv"), train).unwrap();
    }
    // valid split only for the analyzed language
    fs::write(
        sentiment_root.join("indonesian/valid.csv"),
        "id,text,label\n9,lumayan saja sih,neutral\n",
    )
    .unwrap();
}

#[test]
fn full_layout_produces_every_section() {
    let base = TempDir::new().unwrap();
    let config = ProbeConfig::default();
    write_full_layout(base.path(), &config);

    let report = probe_datasets(base.path(), &config).unwrap();

    assert!(report.warnings.is_empty());
    assert_eq!(report.ner.len(), 2);
    assert_eq!(report.ner[0].name, "nerugm");
    assert_eq!(report.ner[0].total_tokens, 4);
    assert_eq!(report.ner[0].total_sentences, 2);

    let sentiment = report.sentiment.as_ref().unwrap();
    assert_eq!(sentiment.total_samples, 5);
    let label_sum: u64 = sentiment.label_totals.iter().map(|t| t.count).sum();
    assert_eq!(label_sum, sentiment.total_samples);

    let check = sentiment.imbalance.unwrap();
    assert_eq!(check.ratio, 3.0);
    assert!(check.imbalanced);

    let overview = report.languages.as_ref().unwrap();
    let langs: Vec<&str> = overview
        .languages
        .iter()
        .map(|l| l.language.as_str())
        .collect();
    assert_eq!(langs, vec!["indonesian", "javanese"]);
    assert_eq!(overview.languages[0].train_samples, 4);

    assert_eq!(report.summary_rows().len(), 3);
}

#[test]
fn empty_base_directory_warns_and_reports_zero_counts() {
    let base = TempDir::new().unwrap();
    let config = ProbeConfig::default();

    let report = probe_datasets(base.path(), &config).unwrap();

    assert!(!report.warnings.is_empty());
    assert!(report.ner.is_empty());
    assert!(report.sentiment.is_none());
    assert!(report.summary_rows().is_empty());

    // every writer still renders without error
    let mut buf = Vec::new();
    TerminalWriter::new(
        &mut buf,
        FormattingConfig::plain(),
        DisplayConfig::default(),
    )
    .write_report(&report)
    .unwrap();
    let output = String::from_utf8(buf).unwrap();
    assert!(output.contains("[WARN] nerugm not found"));

    let mut buf = Vec::new();
    MarkdownWriter::new(&mut buf).write_report(&report).unwrap();
    assert!(String::from_utf8(buf).unwrap().contains("## Warnings"));

    let mut buf = Vec::new();
    JsonWriter::new(&mut buf).write_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert!(value["warnings"].as_array().unwrap().len() >= 2);
}

#[test]
fn terminal_output_matches_the_report_shape() {
    let base = TempDir::new().unwrap();
    let config = ProbeConfig::default();
    write_full_layout(base.path(), &config);

    let report = probe_datasets(base.path(), &config).unwrap();

    let mut buf = Vec::new();
    TerminalWriter::new(
        &mut buf,
        FormattingConfig::plain(),
        DisplayConfig::default(),
    )
    .write_report(&report)
    .unwrap();
    let output = String::from_utf8(buf).unwrap();

    assert!(output.contains("── NERUGM ──"));
    assert!(output.contains("── NERUI ──"));
    assert!(output.contains("── TRAIN split ──"));
    assert!(output.contains("── VALID split ──"));
    assert!(output.contains("[WARN] Significant class imbalance detected!"));
    assert!(output.contains("Languages available: 2"));
    assert!(output.contains("4. Summary"));
}

#[test]
fn json_report_round_trips_through_serde() {
    let base = TempDir::new().unwrap();
    let config = ProbeConfig::default();
    write_full_layout(base.path(), &config);

    let report = probe_datasets(base.path(), &config).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let parsed: dataprobe::DatasetReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.ner.len(), report.ner.len());
    assert_eq!(
        parsed.sentiment.unwrap().total_samples,
        report.sentiment.unwrap().total_samples
    );
}
