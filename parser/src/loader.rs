use crate::types::{BikeModel, LoadError, ProductionRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Timestamp shapes accepted when the value carries no timezone offset.
/// The literal clock value is kept and tagged UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Load the production dataset from disk. A missing file is the only hard
/// failure; everything else that can go wrong with a row is a silent skip.
pub fn load_production_file(path: impl AsRef<Path>) -> Result<Vec<ProductionRecord>, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);
    let records = parse_production_rows(reader)?;
    info!("Loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parse production rows from any reader, in file order.
///
/// Expected column layout, comma- or whitespace-separated:
/// `[PartitionKey, RowKey, ProductionTime, itemsProduced, itemsProduced@type]`
/// where RowKey is the production date and columns 2 and 4 are discarded.
/// Rows that fail any parse step are dropped, never surfaced as errors.
pub fn parse_production_rows<R: BufRead>(reader: R) -> Result<Vec<ProductionRecord>, LoadError> {
    let mut records = Vec::new();
    let mut first_line = true;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // Comma is the primary delimiter; fall back to whitespace columns
        // only when the comma split comes up short.
        let mut parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 5 {
            parts = line.split_whitespace().collect();
        }

        // Header sniffing applies to the first non-blank line only. A first
        // line that does not look like a header is attempted as data.
        if first_line {
            first_line = false;
            if parts.len() >= 2 && parts[0].to_lowercase().contains("partitionkey") {
                debug!("Skipping header line: {}", line);
                continue;
            }
        }

        if parts.len() < 5 {
            debug!("Skipping row with {} fields: {}", parts.len(), line);
            continue;
        }

        let key_field = clean(parts[0]);
        let row_key = clean(parts[1]);
        let items_field = clean(parts[3]);

        let Ok(code) = key_field.parse::<i32>() else {
            debug!("Skipping row with non-numeric partition key: {}", key_field);
            continue;
        };
        let model = BikeModel::from_code(code);

        let Some(date) = parse_row_timestamp(row_key) else {
            debug!("Skipping row with unparseable timestamp: {}", row_key);
            continue;
        };

        let Ok(items_produced) = items_field.parse::<u32>() else {
            debug!("Skipping row with invalid items count: {}", items_field);
            continue;
        };

        records.push(ProductionRecord {
            date,
            model,
            items_produced,
        });
    }

    Ok(records)
}

/// Strip surrounding whitespace, then any enclosing double quotes.
fn clean(field: &str) -> &str {
    field.trim().trim_matches('"')
}

/// First attempt treats the value as timezone-aware and normalizes to UTC;
/// the fallback takes the literal clock value as-is.
fn parse_row_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
