//! Reading course URLs from a CSV input table.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Reads the URLs in `column` of the CSV file at `path`, in row order.
pub fn read_urls(path: impl AsRef<Path>, column: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    debug!("Reading URLs from: {}", path.display());

    if is_spreadsheet(path) {
        anyhow::bail!(
            "Input {} looks like an Excel workbook; only CSV is supported. \
             Export the sheet to CSV and pass that file instead.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    parse_urls(&content, column)
        .with_context(|| format!("Failed to read URLs from: {}", path.display()))
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "xlsx" | "xlsm" | "xls"))
}

/// Extracts the URLs in `column` from CSV text. Blank cells are skipped.
pub fn parse_urls(content: &str, column: &str) -> Result<Vec<String>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = parse_records(content).into_iter();

    let header = records.next().context("Input has no header row")?;
    let index = header
        .iter()
        .position(|name| name.trim() == column)
        .with_context(|| format!("Column '{}' not found in input", column))?;

    let mut urls = Vec::new();
    for (row, record) in records.enumerate() {
        match record.get(index).map(|cell| cell.trim()) {
            Some(url) if !url.is_empty() => urls.push(url.to_string()),
            _ => warn!("Row {}: no URL in column '{}', skipping", row + 2, column),
        }
    }

    debug!("Read {} URLs from column '{}'", urls.len(), column);
    Ok(urls)
}

/// Splits CSV text into records, honoring quoted fields.
fn parse_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    // Drop fully blank lines
    records.retain(|r| !(r.len() == 1 && r[0].trim().is_empty()));
    records
}
