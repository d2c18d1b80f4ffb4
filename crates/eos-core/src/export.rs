//! Export — writes filter results as a plain-text table or JSON lines.
//!
//! Used by headless mode. Writers take any [`std::io::Write`] so tests can
//! render into a `Vec<u8>`.

use crate::filter::NO_MATCHES_MESSAGE;
use crate::types::{Column, Engineer};
use std::io::Write;
use thiserror::Error;

const COLUMN_GAP: &str = "  ";

/// Output format for headless results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned columns with a header row.
    #[default]
    Table,
    /// One JSON object per line, using the dataset keys.
    Jsonl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format {0:?} (expected table or jsonl)")]
pub struct FormatParseError(pub String);

impl std::str::FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "jsonl" | "json" => Ok(OutputFormat::Jsonl),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

/// Write `rows` in the requested format.
pub fn write<'a, W, I>(out: &mut W, format: OutputFormat, rows: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Engineer>,
{
    match format {
        OutputFormat::Table => write_table(out, rows),
        OutputFormat::Jsonl => write_jsonl(out, rows),
    }
}

/// Aligned plain-text table. An empty result prints [`NO_MATCHES_MESSAGE`]
/// under the header instead of an empty body.
pub fn write_table<'a, W, I>(out: &mut W, rows: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Engineer>,
{
    let rows: Vec<&Engineer> = rows.into_iter().collect();

    let widths: Vec<usize> = Column::ALL
        .iter()
        .map(|&col| {
            rows.iter()
                .map(|r| r.column(col).chars().count())
                .chain(std::iter::once(col.header().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
    write_row(out, &header, &widths)?;

    if rows.is_empty() {
        writeln!(out, "{NO_MATCHES_MESSAGE}")?;
        return Ok(());
    }

    for r in rows {
        let cells: Vec<&str> = Column::ALL.iter().map(|&c| r.column(c)).collect();
        write_row(out, &cells, &widths)?;
    }
    Ok(())
}

/// One JSON object per record. An empty result writes nothing.
pub fn write_jsonl<'a, W, I>(out: &mut W, rows: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Engineer>,
{
    for r in rows {
        serde_json::to_writer(&mut *out, r)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[&str], widths: &[usize]) -> std::io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    writeln!(out, "{}", line.trim_end())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
