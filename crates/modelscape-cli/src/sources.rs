//! Local entity and glossary sources.
//!
//! Entities come from a JSON array of objects, one per catalog row. The
//! glossary comes from a two-column `term,definition` CSV export with a
//! header row.

use std::path::Path;
use std::sync::LazyLock;

use modelscape_types::{Entity, Glossary, GlossaryEntry};
use regex::Regex;
use serde_json::{Map, Value};

/// Errors reading a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("entity row {index}: {source}")]
    Row {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("glossary CSV: {0}")]
    Csv(String),
}

/// Columns the engines read as text even when a sheet exports them as numbers.
const TEXT_COLUMNS: [&str; 4] = ["name", "date", "org", "category"];

pub fn load_entities(path: impl AsRef<Path>) -> Result<Vec<Entity>, SourceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let entities = parse_entities(&text)?;
    tracing::info!(path = %path.display(), count = entities.len(), "loaded entities");
    Ok(entities)
}

/// Parse a JSON array of entity rows.
///
/// A row without a usable `id` gets its 1-based position. Rows with an empty
/// name are dropped.
pub fn parse_entities(json: &str) -> Result<Vec<Entity>, SourceError> {
    let rows: Vec<Value> = serde_json::from_str(json)?;
    let mut entities = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let row = match row {
            Value::Object(map) => Value::Object(normalize_row(index, map)),
            other => other,
        };
        let entity: Entity =
            serde_json::from_value(row).map_err(|source| SourceError::Row { index, source })?;
        if entity.name.trim().is_empty() {
            tracing::warn!(index, id = %entity.id, "skipping entity row without a name");
            continue;
        }
        entities.push(entity);
    }
    Ok(entities)
}

fn normalize_row(index: usize, mut row: Map<String, Value>) -> Map<String, Value> {
    let missing_id = match row.get("id") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    };
    if missing_id {
        row.insert("id".into(), Value::from(index as i64 + 1));
    }

    for column in TEXT_COLUMNS {
        match row.get(column) {
            Some(Value::Null) => {
                row.remove(column);
            }
            Some(v @ (Value::Number(_) | Value::Bool(_))) => {
                let text = v.to_string();
                row.insert(column.into(), Value::String(text));
            }
            _ => {}
        }
    }
    row
}

pub fn load_glossary(path: impl AsRef<Path>) -> Result<Glossary, SourceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let glossary = parse_glossary(&text)?;
    tracing::info!(path = %path.display(), terms = glossary.len(), "loaded glossary");
    Ok(glossary)
}

static QUOTED_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"([^"]*(?:""[^"]*)*)"\s*,\s*"?([^"]*(?:""[^"]*)*)"?$"#)
        .expect("static glossary row pattern")
});

/// Parse a `term,definition` CSV export. The first line is a header.
///
/// A quoted first field may contain commas and `""` escapes. Otherwise the
/// row splits at its first comma, and a fully quoted definition is unquoted.
/// Rows missing either half are skipped. Later rows replace earlier ones
/// with the same term, ignoring case.
pub fn parse_glossary(csv: &str) -> Result<Glossary, SourceError> {
    let mut lines = csv.split('\n');
    match lines.next() {
        Some(header) if !header.trim().is_empty() => {}
        _ => return Err(SourceError::Csv("missing header row".into())),
    }

    let mut glossary = Glossary::new();
    for (offset, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_glossary_row(line) {
            Some((term, definition)) => glossary.insert(GlossaryEntry::new(term, definition)),
            None => tracing::debug!(line = offset + 2, "skipping glossary row"),
        }
    }
    Ok(glossary)
}

fn parse_glossary_row(line: &str) -> Option<(String, String)> {
    let (term, definition) = if line.starts_with('"') {
        let caps = QUOTED_ROW.captures(line)?;
        (unescape(&caps[1]), unescape(&caps[2]))
    } else {
        let comma = line.find(',').filter(|&i| i > 0)?;
        let term = line[..comma].trim().to_string();
        let definition = line[comma + 1..].trim();
        // A lone `"` both opens and closes, leaving nothing.
        match definition.strip_prefix('"') {
            Some(rest) if definition.ends_with('"') => {
                (term, unescape(rest.strip_suffix('"').unwrap_or(rest)))
            }
            _ => (term, definition.to_string()),
        }
    };

    if term.is_empty() || definition.is_empty() {
        return None;
    }
    Some((term, definition))
}

fn unescape(field: &str) -> String {
    field.replace("\"\"", "\"")
}
