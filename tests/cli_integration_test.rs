use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn dataprobe() -> Command {
    Command::cargo_bin("dataprobe").unwrap()
}

fn stdout_of(output: std::process::Output) -> String {
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn help_lists_subcommands() {
    let output = dataprobe().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(output);
    assert!(stdout.contains("analyze"));
    assert!(stdout.contains("init"));
}

#[test]
fn analyze_empty_directory_succeeds_with_warnings() {
    let base = TempDir::new().unwrap();

    let output = dataprobe()
        .args(["analyze", "--plain"])
        .arg(base.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(output);
    assert!(stdout.contains("[WARN] nerugm not found"));
    assert!(stdout.contains("1. NER Corpora"));
}

#[test]
fn analyze_writes_json_to_output_file() {
    let base = TempDir::new().unwrap();
    let ner_dir = base.path().join("indolem_ner/indolem/ner/data/nerugm");
    fs::create_dir_all(&ner_dir).unwrap();
    fs::write(ner_dir.join("train.01.tsv"), "Budi\tB-PERSON\n\n").unwrap();

    let out_file = base.path().join("report.json");
    let output = dataprobe()
        .args(["analyze", "--format", "json", "--output"])
        .arg(&out_file)
        .arg(base.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_file).unwrap()).unwrap();
    assert_eq!(value["ner"][0]["total_tokens"], 1);
    assert_eq!(value["ner"][0]["name"], "nerugm");
}

#[test]
fn init_creates_config_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();

    let output = dataprobe().arg("init").current_dir(dir.path()).output().unwrap();
    assert!(output.status.success());
    assert!(dir.path().join(".dataprobe.toml").exists());

    let output = dataprobe().arg("init").current_dir(dir.path()).output().unwrap();
    assert!(!output.status.success());

    let output = dataprobe()
        .args(["init", "--force"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn invalid_config_fails_with_error() {
    let base = TempDir::new().unwrap();
    let config = base.path().join("bad.toml");
    fs::write(&config, "[sentiment]\nimbalance_threshold = -1.0\n").unwrap();

    let output = dataprobe()
        .args(["analyze", "--config"])
        .arg(&config)
        .arg(base.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}
