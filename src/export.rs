//! CSV export of a rendered report.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// File name offered for the export.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "spacing-token-audit.csv";

pub const CSV_MIME_TYPE: &str = "text/csv";

/// How cells are escaped when joined into CSV text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum CsvQuoting {
    /// Quote cells containing `,`, `"`, CR or LF (RFC 4180).
    #[default]
    Minimal,
    /// Join cells verbatim. Cells containing delimiters produce malformed rows.
    None,
}

impl From<CsvQuoting> for QuoteStyle {
    fn from(quoting: CsvQuoting) -> Self {
        match quoting {
            CsvQuoting::Minimal => QuoteStyle::Necessary,
            CsvQuoting::None => QuoteStyle::Never,
        }
    }
}

/// Join cells with `,` and rows with `\n`. No trailing newline.
pub fn serialize<R, C>(rows: &[R], quoting: CsvQuoting) -> Result<String>
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(quoting.into())
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row.as_ref().iter().map(|cell| cell.as_ref()))
            .context("Failed to encode CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to flush CSV: {}", err.error()))?;
    let mut text = String::from_utf8(bytes).context("CSV output is not valid UTF-8")?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub file_path: String,
    pub mime_type: String,
    /// Data rows, excluding the header.
    pub row_count: usize,
}

/// Serialize `rows` and write them to `path`, creating parent directories.
pub fn write_csv<R, C>(path: &Path, rows: &[R], quoting: CsvQuoting) -> Result<ExportSummary>
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, serialize(rows, quoting)?)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(ExportSummary {
        file_path: path.to_string_lossy().to_string(),
        mime_type: CSV_MIME_TYPE.to_string(),
        row_count: rows.len().saturating_sub(1),
    })
}
