use std::fmt;
use std::path::Path;

use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// Payload – the value flowing through the pipeline
// ---------------------------------------------------------------------------

/// In-memory payload: a mapping (JSON object / CSV row), a sequence, or raw
/// text held as a JSON string. Scalars read from `.json` files pass through
/// untouched.
///
/// Objects keep their source key order (`serde_json` is built with
/// `preserve_order`), so CSV headers round-trip in the order they were read.
pub type Payload = JsonValue;

/// Render a value as plain text.
///
/// Strings render as themselves (no quotes); everything else renders as its
/// compact JSON text, e.g. `1`, `true`, `null`, `{"a":1}`.
pub fn render(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Format – resolved once from a file extension
// ---------------------------------------------------------------------------

/// On-disk representation, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
    /// Anything that is not `.json` or `.csv`, including no extension at all.
    Text,
}

impl Format {
    /// Resolve the format of `path` from its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Format::Json,
            "csv" => Format::Csv,
            _ => Format::Text,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Text => write!(f, "text"),
        }
    }
}
