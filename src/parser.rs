//! CSV loader and row parser for the medal table.
//!
//! The format is simpler than RFC 4180: a double quote toggles
//! quoted mode and is dropped from the field, commas inside quotes do not
//! split, and there are no escaped quote pairs. Every field is trimmed.

use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, info};

use crate::error::DatasetError;
use crate::record::{OlympicRecord, normalize};

/// One data row keyed by canonical field name, in header order.
pub type Row = IndexMap<String, String>;

/// Header spellings with a fixed canonical key. Anything else is lower-cased.
static HEADER_MAP: &[(&str, &str)] = &[
    ("City", "city"),
    ("Year", "year"),
    ("Sport", "sport"),
    ("Discipline", "discipline"),
    ("Event", "event"),
    ("Athlete", "athlete"),
    ("Gender", "gender"),
    ("Country_Code", "country_code"),
    ("Country", "country"),
    ("Event_gender", "event_gender"),
    ("Medal", "medal"),
];

/// Row counts collected while parsing, for logging.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// Non-blank lines after the header.
    pub data_lines: usize,
    /// Lines with fewer fields than headers.
    pub short_rows: usize,
    /// Lines with more fields than headers (kept, extra fields ignored).
    pub truncated_rows: usize,
    /// Rows the normalizer refused (bad year, missing field, unknown medal).
    pub rejected_rows: usize,
    /// Records handed to the aggregations.
    pub records: usize,
}

impl ParseReport {
    /// Rows excluded from every aggregate.
    pub fn skipped(&self) -> usize {
        self.short_rows + self.rejected_rows
    }
}

/// Canonical header names plus the rows that had enough fields.
#[derive(Debug, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub report: ParseReport,
}

/// Normalized records ready for aggregation.
#[derive(Debug, Default)]
pub struct Dataset {
    pub records: Vec<OlympicRecord>,
    pub report: ParseReport,
}

/// Maps a raw header to its canonical key.
pub fn canonical_header(raw: &str) -> String {
    HEADER_MAP
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, key)| key.to_string())
        .unwrap_or_else(|| raw.to_lowercase())
}

/// Splits one line into trimmed fields, honouring quoted commas.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Splits raw CSV text into canonical rows.
///
/// The first non-blank line is the header. Blank lines are ignored, rows
/// shorter than the header are dropped and longer rows are cut to the
/// header length.
pub fn parse_rows(raw: &str) -> ParsedCsv {
    let mut lines = raw.split('\n').filter(|l| !l.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return ParsedCsv::default();
    };

    let headers: Vec<String> = split_line(header_line)
        .iter()
        .map(|h| canonical_header(h))
        .collect();

    let mut report = ParseReport::default();
    let mut rows = Vec::new();

    for line in lines {
        report.data_lines += 1;

        let values = split_line(line);
        if values.len() < headers.len() {
            report.short_rows += 1;
            continue;
        }
        if values.len() > headers.len() {
            report.truncated_rows += 1;
        }

        let row: Row = headers.iter().cloned().zip(values).collect();
        rows.push(row);
    }

    ParsedCsv {
        headers,
        rows,
        report,
    }
}

/// Parses raw CSV text into normalized records.
///
/// This is the single entry point every aggregation consumes.
pub fn parse(raw: &str) -> Dataset {
    let ParsedCsv {
        rows, mut report, ..
    } = parse_rows(raw);

    let records: Vec<OlympicRecord> = rows.iter().filter_map(normalize).collect();

    report.rejected_rows = rows.len() - records.len();
    report.records = records.len();

    Dataset { records, report }
}

/// Reads and parses the CSV file at `path`.
///
/// # Errors
///
/// [`DatasetError::SourceMissing`] if the file does not exist,
/// [`DatasetError::SourceEmpty`] if it has no data rows after the header and
/// [`DatasetError::Io`] if it cannot be read.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::SourceMissing {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = raw.len(), "Source file read");

    let dataset = parse(&raw);
    if dataset.report.data_lines == 0 {
        return Err(DatasetError::SourceEmpty {
            path: path.to_path_buf(),
        });
    }

    info!(
        data_lines = dataset.report.data_lines,
        records = dataset.report.records,
        skipped = dataset.report.skipped(),
        truncated = dataset.report.truncated_rows,
        "Dataset parsed"
    );

    Ok(dataset)
}
