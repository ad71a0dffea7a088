use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Dataprobe Configuration

[ner]
root = "indolem_ner/indolem/ner/data"
corpora = ["nerugm", "nerui"]

[sentiment]
root = "nusax_sentiment/nusax/datasets/sentiment"
language = "indonesian"
splits = ["train", "valid", "test"]
imbalance_threshold = 2.0

[display]
sample_sentences = 3
sample_texts = 3
sentence_preview_tokens = 15
text_preview_chars = 120
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
