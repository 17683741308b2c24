//! Rendering of view payloads.
//!
//! Supports pretty JSON to any writer, JSON files on disk (optionally
//! gzip-compressed) and CSV export of normalized records.

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::record::OlympicRecord;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn print_json<W: Write>(mut writer: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Gzip-compresses a byte buffer.
pub fn gzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Writes `value` as compact JSON to `path`, creating parent directories.
pub fn write_json_file(path: &Path, value: &impl Serialize, compress: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let body = serde_json::to_vec(value)?;
    let body = if compress { gzip(&body)? } else { body };

    fs::write(path, &body).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = body.len(), "Wrote JSON file");
    Ok(())
}

/// Writes records as CSV with a header row.
pub fn write_records_csv<'a, W: Write>(
    writer: W,
    records: impl IntoIterator<Item = &'a OlympicRecord>,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    for record in records {
        writer.serialize(CsvRecord::from(record))?;
    }
    writer.flush()?;

    Ok(())
}

/// Flat CSV shape: optional columns become empty cells so every row has
/// the same width.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRecord<'a> {
    city: &'a str,
    year: i32,
    sport: &'a str,
    discipline: &'a str,
    event: &'a str,
    athlete: &'a str,
    gender: &'a str,
    country_code: &'a str,
    country: &'a str,
    event_gender: &'a str,
    medal: crate::record::Medal,
}

impl<'a> From<&'a OlympicRecord> for CsvRecord<'a> {
    fn from(r: &'a OlympicRecord) -> Self {
        CsvRecord {
            city: &r.city,
            year: r.year,
            sport: &r.sport,
            discipline: &r.discipline,
            event: &r.event,
            athlete: &r.athlete,
            gender: r.gender.as_str(),
            country_code: r.country_code.as_deref().unwrap_or(""),
            country: &r.country,
            event_gender: r.event_gender.as_deref().unwrap_or(""),
            medal: r.medal,
        }
    }
}
