use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, error};
use serde_json::{Map, Value as JsonValue};

use super::model::{render, Format, Payload};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a payload from a file.  Dispatch by extension.
///
/// * `.json` – any JSON value (object, array or scalar)
/// * `.csv`  – array of objects, one per row, keyed by the header row
/// * other   – the whole file as a string
pub fn load(path: &Path) -> Result<Payload> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let format = Format::from_path(path);
    let result = match format {
        Format::Json => load_json(path),
        Format::Csv => load_csv(path),
        Format::Text => load_text(path),
    };

    match &result {
        Ok(payload) => debug!("Loaded {} from {} ({format})", describe(payload), path.display()),
        Err(e) => error!("Failed to load data: {e}"),
    }
    result
}

/// Write `payload` to `path`, creating or truncating the file.
///
/// * `.json` – pretty-printed, 2-space indentation
/// * `.csv`  – header row plus one line per record; the payload must be a
///   non-empty array of objects sharing one key set
/// * other   – strings verbatim, anything else as compact JSON text
pub fn save(payload: &Payload, path: &Path) -> Result<()> {
    let format = Format::from_path(path);
    let result = match format {
        Format::Json => save_json(payload, path),
        Format::Csv => save_csv(payload, path),
        Format::Text => save_text(payload, path),
    };

    match &result {
        Ok(()) => debug!("Saved {} to {} ({format})", describe(payload), path.display()),
        Err(e) => error!("Failed to save data: {e}"),
    }
    result
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Payload> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::format(path, e))
}

fn save_json(payload: &Payload, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, payload).map_err(|e| Error::io(path, e.into()))?;
    writer.flush().map_err(|e| Error::io(path, e))
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Header row gives the keys; every cell stays a string (no type guessing).
fn load_csv(path: &Path) -> Result<Payload> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        let row: Map<String, JsonValue> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), JsonValue::String(value.to_string())))
            .collect();
        rows.push(JsonValue::Object(row));
    }

    Ok(JsonValue::Array(rows))
}

fn save_csv(payload: &Payload, path: &Path) -> Result<()> {
    let (header, rows) = tabular(payload)?;

    let mut writer = csv::Writer::from_path(path).map_err(|e| csv_error(path, e))?;
    writer.write_record(&header).map_err(|e| csv_error(path, e))?;
    for row in rows {
        let cells: Vec<String> = header
            .iter()
            .map(|key| row.get(key).map(render).unwrap_or_default())
            .collect();
        writer.write_record(&cells).map_err(|e| csv_error(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))
}

/// Check that `payload` is a non-empty array of objects with identical key
/// sets. Returns the header (first row's key order) and the rows.
fn tabular(payload: &Payload) -> Result<(Vec<String>, Vec<&Map<String, JsonValue>>)> {
    let items = match payload.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => {
            return Err(Error::UnsupportedPayload(
                "CSV output needs a non-empty list of records".to_string(),
            ))
        }
    };

    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let row = item
            .as_object()
            .ok_or_else(|| Error::UnsupportedPayload(format!("CSV row {i} is not a record")))?;
        rows.push(row);
    }

    let header: Vec<String> = rows[0].keys().cloned().collect();
    for (i, row) in rows.iter().enumerate().skip(1) {
        let same_keys = row.len() == header.len() && header.iter().all(|k| row.contains_key(k));
        if !same_keys {
            return Err(Error::UnsupportedPayload(format!(
                "CSV row {i} has different keys than the header"
            )));
        }
    }

    Ok((header, rows))
}

fn csv_error(path: &Path, err: csv::Error) -> Error {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => Error::io(path, source),
        _ => Error::format(path, message),
    }
}

// ---------------------------------------------------------------------------
// Raw text
// ---------------------------------------------------------------------------

fn load_text(path: &Path) -> Result<Payload> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(JsonValue::String(text))
}

fn save_text(payload: &Payload, path: &Path) -> Result<()> {
    std::fs::write(path, render(payload)).map_err(|e| Error::io(path, e))
}

/// Short summary for log lines.
fn describe(payload: &Payload) -> String {
    match payload {
        JsonValue::Array(items) => format!("{} items", items.len()),
        JsonValue::Object(map) => format!("record with {} keys", map.len()),
        JsonValue::String(s) => format!("{} bytes of text", s.len()),
        _ => "scalar".to_string(),
    }
}
