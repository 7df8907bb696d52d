use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::normalize::normalize_record;
use super::types::PlayerRecord;

/// The document could not be read as a player collection at all.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array or object of player records, found {found}")]
    NotACollection { found: &'static str },
}

/// Parse a player document: a JSON array of records, or an object whose
/// values are records (keys double as player ids).
pub fn parse_players(json: &str) -> Result<Vec<PlayerRecord>, InputError> {
    let value: Value = serde_json::from_str(json)?;
    players_from_value(&value)
}

/// Same as `parse_players` for an already-decoded document.
pub fn players_from_value(value: &Value) -> Result<Vec<PlayerRecord>, InputError> {
    let entries: Vec<(Option<&str>, &Value)> = match value {
        Value::Array(items) => items.iter().map(|v| (None, v)).collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (Some(k.as_str()), v)).collect(),
        other => {
            return Err(InputError::NotACollection {
                found: json_type_name(other),
            })
        }
    };

    let mut players = Vec::with_capacity(entries.len());
    for (index, (key, entry)) in entries.into_iter().enumerate() {
        match normalize_record(entry, key) {
            Some(record) => players.push(record),
            None => log::debug!(
                "Skipping entry {} ({}): not a player object",
                key.map(str::to_string).unwrap_or_else(|| index.to_string()),
                json_type_name(entry)
            ),
        }
    }
    Ok(players)
}

/// Read a player document from a file, or from stdin when `path` is None or "-".
///
/// Read failures are plain IO errors; a readable but malformed document
/// surfaces as an `InputError` inside the returned error chain.
pub fn load_players(path: Option<&Path>) -> Result<Vec<PlayerRecord>> {
    let (content, source) = match path {
        Some(p) if p != Path::new("-") => {
            let content = fs::read_to_string(p)
                .with_context(|| format!("Failed to read player file at {}", p.display()))?;
            (content, p.display().to_string())
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read players from stdin")?;
            (content, "stdin".to_string())
        }
    };

    let players = parse_players(&content)
        .with_context(|| format!("Failed to parse players from {}", source))?;
    log::debug!("Loaded {} player records from {}", players.len(), source);
    Ok(players)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
