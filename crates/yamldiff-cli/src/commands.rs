use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use colored::Colorize;
use serde::Serialize;
use tracing::{debug, error};
use yamldiff_diff::{diff_documents, DiffStatus, DocumentDiff};
use yamldiff_types::{load, Document};

use crate::cli::{Cli, ColorChoice, OutputFormat};
use crate::settings::Settings;

const USAGE: &str = "Usage: yaml-diff [OPTIONS] <FILE_A> <FILE_B>";

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Ok([file_a, file_b]) = <[PathBuf; 2]>::try_from(cli.files.clone()) else {
        println!("{USAGE}");
        return Ok(ExitCode::FAILURE);
    };

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_flags(&cli);
    debug!(?settings, "resolved settings");

    apply_color(cli.color);

    let left = read_documents(&file_a);
    let right = read_documents(&file_b);
    let diffs = diff_documents(&left, &right, settings.diff);
    let shown: Vec<&DocumentDiff<'_>> = diffs
        .iter()
        .filter(|d| !(settings.quiet && d.is_same()))
        .collect();

    let mut out = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => write_text(&mut out, &file_a, &file_b, &shown, settings.quiet)?,
        OutputFormat::Json => write_json(&mut out, &shown)?,
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn apply_color(choice: ColorChoice) {
    let enabled = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    colored::control::set_override(enabled);
}

/// Read and parse one side. Failures are logged and the side is treated as
/// empty input.
fn read_documents(path: &Path) -> Vec<Document> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!(path = %path.display(), %err, "failed to read file");
            return Vec::new();
        }
    };
    load(&text).unwrap_or_else(|err| {
        error!(path = %path.display(), %err, "failed to parse YAML");
        Vec::new()
    })
}

fn write_text<W: Write>(
    out: &mut W,
    file_a: &Path,
    file_b: &Path,
    diffs: &[&DocumentDiff<'_>],
    quiet: bool,
) -> io::Result<()> {
    if !quiet {
        writeln!(out, "{}", format!("--- {}", file_a.display()).bold())?;
        writeln!(out, "{}", format!("+++ {}", file_b.display()).bold())?;
        writeln!(out)?;
    }
    for diff in diffs {
        for line in diff.render().lines() {
            writeln!(out, "{}", paint(line))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn paint(line: &str) -> String {
    match line.as_bytes().first() {
        Some(b'-') => line.red().to_string(),
        Some(b'+') => line.green().to_string(),
        _ => line.to_string(),
    }
}

#[derive(Serialize)]
struct ReportEntry {
    status: DiffStatus,
    weight: usize,
    left: Option<String>,
    right: Option<String>,
    diff: String,
}

impl From<&DocumentDiff<'_>> for ReportEntry {
    fn from(d: &DocumentDiff<'_>) -> Self {
        Self {
            status: d.status(),
            weight: d.weight(),
            left: d.left.map(|id| id.to_string()),
            right: d.right.map(|id| id.to_string()),
            diff: d.render(),
        }
    }
}

fn write_json<W: Write>(out: &mut W, diffs: &[&DocumentDiff<'_>]) -> anyhow::Result<()> {
    let report: Vec<ReportEntry> = diffs.iter().map(|d| ReportEntry::from(*d)).collect();
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
