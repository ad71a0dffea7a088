//! Report writers for the three output formats.

use crate::config::DisplayConfig;
use crate::core::stats::percentage;
use crate::core::{DatasetReport, NerCorpusReport, SentimentReport};
use crate::errors::ProbeError;
use crate::formatting::{ColoredFormatter, FormattingConfig};
use anyhow::Result;
use comfy_table::{presets, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &DatasetReport) -> Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    formatting: FormattingConfig,
    display: &DisplayConfig,
) -> Result<Box<dyn ReportWriter>> {
    let destination: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path).map_err(|e| ProbeError::io(path, e))?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(
            destination,
            formatting,
            display.clone(),
        )),
    })
}

/// Insert thousands separators: 1234567 -> "1,234,567".
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_ratio(ratio: f64) -> String {
    if ratio.is_infinite() {
        "inf".to_string()
    } else {
        format!("{ratio:.2}")
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DatasetReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Markdown
// ---------------------------------------------------------------------------

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &DatasetReport) -> Result<()> {
        self.write_header(report)?;
        self.write_warnings(report)?;
        for corpus in &report.ner {
            self.write_ner_section(corpus)?;
        }
        if let Some(sentiment) = &report.sentiment {
            self.write_sentiment_section(sentiment)?;
        }
        self.write_language_section(report)?;
        self.write_summary(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &DatasetReport) -> Result<()> {
        writeln!(self.writer, "# Dataset Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Base path: `{}`", report.base_path.display())?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_warnings(&mut self, report: &DatasetReport) -> Result<()> {
        if report.warnings.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Warnings")?;
        writeln!(self.writer)?;
        for warning in &report.warnings {
            writeln!(self.writer, "- {warning}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ner_section(&mut self, corpus: &NerCorpusReport) -> Result<()> {
        writeln!(self.writer, "## NER Corpus: {}", corpus.name)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Files: {}", corpus.file_count)?;
        writeln!(
            self.writer,
            "- Total tokens: {}",
            group_digits(corpus.total_tokens)
        )?;
        writeln!(
            self.writer,
            "- Total sentences: {}",
            group_digits(corpus.total_sentences)
        )?;
        writeln!(self.writer)?;

        if !corpus.tag_counts.is_empty() {
            writeln!(self.writer, "| Tag | Count | Share |")?;
            writeln!(self.writer, "|-----|------:|------:|")?;
            for tag in &corpus.tag_counts {
                writeln!(
                    self.writer,
                    "| {} | {} | {:.1}% |",
                    tag.name,
                    group_digits(tag.count),
                    percentage(tag.count, corpus.total_tokens)
                )?;
            }
            writeln!(self.writer)?;
        }

        if !corpus.entity_types.is_empty() {
            writeln!(self.writer, "| Entity type | B- tags |")?;
            writeln!(self.writer, "|-------------|--------:|")?;
            for etype in &corpus.entity_types {
                writeln!(
                    self.writer,
                    "| {} | {} |",
                    etype.name,
                    group_digits(etype.count)
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_sentiment_section(&mut self, sentiment: &SentimentReport) -> Result<()> {
        writeln!(self.writer, "## Sentiment Corpus: {}", sentiment.name)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Split | Samples | Min words | Avg words | Max words |"
        )?;
        writeln!(
            self.writer,
            "|-------|--------:|----------:|----------:|----------:|"
        )?;
        for split in &sentiment.splits {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.0} | {} |",
                split.split,
                group_digits(split.samples),
                split.text_length.min,
                split.text_length.mean,
                split.text_length.max
            )?;
        }
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "Total samples: {}",
            group_digits(sentiment.total_samples)
        )?;
        writeln!(self.writer)?;
        if !sentiment.label_totals.is_empty() {
            writeln!(self.writer, "| Label | Count | Share |")?;
            writeln!(self.writer, "|-------|------:|------:|")?;
            for label in &sentiment.label_totals {
                writeln!(
                    self.writer,
                    "| {} | {} | {:.1}% |",
                    label.name,
                    group_digits(label.count),
                    percentage(label.count, sentiment.total_samples)
                )?;
            }
            writeln!(self.writer)?;
        }

        if let Some(check) = &sentiment.imbalance {
            let verdict = if check.imbalanced {
                "significant class imbalance"
            } else {
                "classes relatively balanced"
            };
            writeln!(
                self.writer,
                "Class imbalance ratio (max/min): {} — {}",
                format_ratio(check.ratio),
                verdict
            )?;
            writeln!(self.writer)?;
        }

        if !sentiment.sample_texts.is_empty() {
            writeln!(self.writer, "Sample texts:")?;
            writeln!(self.writer)?;
            for sample in &sentiment.sample_texts {
                writeln!(self.writer, "- **{}**: {}", sample.label, sample.preview)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_language_section(&mut self, report: &DatasetReport) -> Result<()> {
        let Some(overview) = &report.languages else {
            return Ok(());
        };
        writeln!(self.writer, "## Languages Overview")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Languages available: {}",
            overview.languages.len()
        )?;
        writeln!(self.writer)?;
        if !overview.languages.is_empty() {
            writeln!(self.writer, "| Language | Train samples |")?;
            writeln!(self.writer, "|----------|--------------:|")?;
            for lang in &overview.languages {
                writeln!(
                    self.writer,
                    "| {} | {} |",
                    lang.language,
                    group_digits(lang.train_samples)
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &DatasetReport) -> Result<()> {
        let rows = report.summary_rows();
        if rows.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Dataset | Type | Size | Labels/Tags |")?;
        writeln!(self.writer, "|---------|------|-----:|-------------|")?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} {} | {} |",
                row.name,
                row.kind,
                group_digits(row.size),
                row.unit,
                row.labels.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    display: DisplayConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig, display: DisplayConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
            display,
        }
    }

    fn banner(&mut self, index: usize, title: &str) -> Result<()> {
        let line = "=".repeat(80);
        writeln!(self.writer, "{}", self.formatter.dim(&line))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.header(&format!(" {index}. {title}"))
        )?;
        writeln!(self.writer, "{}", self.formatter.dim(&line))?;
        Ok(())
    }

    fn write_warnings(&mut self, report: &DatasetReport) -> Result<()> {
        for warning in &report.warnings {
            let mark = self.formatter.emoji("⚠", "[WARN]");
            let line = format!("  {mark} {warning}");
            writeln!(self.writer, "{}", self.formatter.warning(&line))?;
        }
        Ok(())
    }

    fn write_ner_section(&mut self, corpus: &NerCorpusReport) -> Result<()> {
        writeln!(self.writer)?;
        let title = format!("  ── {} ──", corpus.name.to_uppercase());
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        writeln!(self.writer, "  Files: {} TSV files", corpus.file_count)?;
        writeln!(
            self.writer,
            "  Total tokens: {}",
            group_digits(corpus.total_tokens)
        )?;
        writeln!(
            self.writer,
            "  Total sentences: {}",
            group_digits(corpus.total_sentences)
        )?;

        if !corpus.tag_counts.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "  Tag distribution:")?;
            for tag in &corpus.tag_counts {
                writeln!(
                    self.writer,
                    "    {:20}  {:>8}  ({:5.1}%)",
                    tag.name,
                    group_digits(tag.count),
                    percentage(tag.count, corpus.total_tokens)
                )?;
            }
        }

        if !corpus.entity_types.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "  Entity types (B- tag count):")?;
            for etype in &corpus.entity_types {
                writeln!(
                    self.writer,
                    "    {:20}  {:>6}",
                    etype.name,
                    group_digits(etype.count)
                )?;
            }
        }

        if let Some(sentence) = corpus.sample_sentences.first() {
            writeln!(self.writer)?;
            writeln!(self.writer, "  Sample sentence:")?;
            let budget = self.display.sentence_preview_tokens;
            for token_tag in sentence.iter().take(budget) {
                writeln!(
                    self.writer,
                    "    {:20}  {}",
                    token_tag.token, token_tag.tag
                )?;
            }
            if sentence.len() > budget {
                let elision = format!("    ... ({} tokens total)", sentence.len());
                writeln!(self.writer, "{}", self.formatter.dim(&elision))?;
            }
        }
        Ok(())
    }

    fn write_sentiment_section(&mut self, sentiment: &SentimentReport) -> Result<()> {
        for split in &sentiment.splits {
            writeln!(self.writer)?;
            let title = format!("  ── {} split ──", split.split.to_uppercase());
            writeln!(self.writer, "{}", self.formatter.header(&title))?;
            writeln!(self.writer, "  Samples: {}", group_digits(split.samples))?;
            writeln!(self.writer, "  Label distribution:")?;
            for label in &split.label_counts {
                writeln!(
                    self.writer,
                    "    {:12}  {:>5}  ({:.1}%)",
                    label.name,
                    group_digits(label.count),
                    percentage(label.count, split.samples)
                )?;
            }
            writeln!(
                self.writer,
                "  Text length (words): min={}, avg={:.0}, max={}",
                split.text_length.min, split.text_length.mean, split.text_length.max
            )?;
        }

        writeln!(self.writer)?;
        let title = "  ── TOTAL across all splits ──";
        writeln!(self.writer, "{}", self.formatter.header(title))?;
        writeln!(
            self.writer,
            "  Total samples: {}",
            group_digits(sentiment.total_samples)
        )?;
        for label in &sentiment.label_totals {
            writeln!(
                self.writer,
                "    {:12}  {:>5}  ({:.1}%)",
                label.name,
                group_digits(label.count),
                percentage(label.count, sentiment.total_samples)
            )?;
        }

        if let Some(check) = &sentiment.imbalance {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "  Class imbalance ratio (max/min): {}",
                format_ratio(check.ratio)
            )?;
            if check.imbalanced {
                let mark = self.formatter.emoji("⚠", "[WARN]");
                let line = format!("  {mark} Significant class imbalance detected!");
                writeln!(self.writer, "{}", self.formatter.warning(&line))?;
            } else {
                let mark = self.formatter.emoji("✓", "[OK]");
                let line = format!("  {mark} Classes are relatively balanced");
                writeln!(self.writer, "{}", self.formatter.success(&line))?;
            }
        }

        if !sentiment.sample_texts.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "  Sample texts:")?;
            for sample in &sentiment.sample_texts {
                writeln!(
                    self.writer,
                    "    [{:>8}] {}",
                    sample.label, sample.preview
                )?;
            }
        }
        Ok(())
    }

    fn write_language_section(&mut self, report: &DatasetReport) -> Result<()> {
        let Some(overview) = &report.languages else {
            return Ok(());
        };
        writeln!(
            self.writer,
            "  Languages available: {}",
            overview.languages.len()
        )?;
        for lang in &overview.languages {
            writeln!(
                self.writer,
                "    {:15}  {:>5} train samples",
                lang.language,
                group_digits(lang.train_samples)
            )?;
        }
        Ok(())
    }

    fn write_summary(&mut self, report: &DatasetReport) -> Result<()> {
        let rows = report.summary_rows();
        if rows.is_empty() {
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_header(vec!["Dataset", "Type", "Size", "Labels/Tags"]);
        for row in rows {
            table.add_row(vec![
                row.name,
                row.kind.to_string(),
                format!("{} {}", group_digits(row.size), row.unit),
                row.labels.join(", "),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &DatasetReport) -> Result<()> {
        self.banner(1, "NER Corpora")?;
        self.write_warnings(report)?;
        for corpus in &report.ner {
            self.write_ner_section(corpus)?;
        }

        if let Some(sentiment) = &report.sentiment {
            writeln!(self.writer)?;
            self.banner(2, &format!("Sentiment Corpus ({})", sentiment.name))?;
            self.write_sentiment_section(sentiment)?;
        }

        if report.languages.is_some() {
            writeln!(self.writer)?;
            self.banner(3, "Sentiment Languages Overview")?;
            self.write_language_section(report)?;
        }

        if !report.summary_rows().is_empty() {
            writeln!(self.writer)?;
            self.banner(4, "Summary")?;
            self.write_summary(report)?;
        }
        Ok(())
    }
}
