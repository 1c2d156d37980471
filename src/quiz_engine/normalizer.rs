//! Turns raw JSON records into a validated, id-keyed [`Dataset`].
//!
//! Normalization never fails as a whole: a record that is not an object,
//! has no usable `TYPE`, or repeats an id already taken is dropped and the
//! rest of the batch goes on. Only reading or parsing the source can fail.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::{Dataset, Entry},
};

const ID_KEYS: [&str; 2] = ["id", "ID"];
const TYPE_KEY: &str = "TYPE";

/// Normalize a loosely typed record list. A non-array yields an empty dataset.
pub fn normalize(raw: &Value) -> Dataset {
    let Some(records) = raw.as_array() else {
        tracing::debug!("dataset source is not an array, treating it as empty");
        return Dataset::default();
    };

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let Some(entry) = normalize_record(record, index as u64 + 1) else {
            continue;
        };
        if seen.insert(entry.id) {
            entries.push(entry);
        }
    }

    let dropped = records.len() - entries.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = entries.len(), "dropped malformed records");
    }
    Dataset { entries }
}

fn normalize_record(record: &Value, ordinal: u64) -> Option<Entry> {
    let object = record.as_object()?;

    let raw_id = ID_KEYS
        .iter()
        .find_map(|key| object.get(*key).filter(|v| !v.is_null()));
    let id = raw_id.and_then(coerce_id).unwrap_or(ordinal);

    let entry_type = object.get(TYPE_KEY).map(type_label).unwrap_or_default();
    if entry_type.is_empty() {
        return None;
    }

    let fields: Map<String, Value> = object
        .iter()
        .filter(|(key, _)| !ID_KEYS.contains(&key.as_str()) && key.as_str() != TYPE_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(Entry { id, entry_type, fields })
}

/// Numeric value of an id, if it is a finite non-negative integer.
fn coerce_id(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(n) => {
            if let Some(exact) = n.as_u64() {
                return Some(exact);
            }
            n.as_f64()?
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    let valid = number.is_finite()
        && number >= 0.0
        && number.fract() == 0.0
        && number <= u64::MAX as f64;
    valid.then_some(number as u64)
}

fn type_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b)   => b.to_string(),
        _                => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Dataset {
    /// Normalize an already parsed JSON value.
    pub fn from_json_value(raw: &Value) -> Self {
        normalize(raw)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(source)?;
        Ok(normalize(&raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Value = serde_json::from_reader(reader)?;
        Ok(normalize(&raw))
    }

    /// Read and normalize a JSON file. I/O and parse errors are returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), entries = dataset.len(), "loaded dataset");
        Ok(dataset)
    }
}
