//! Persisted learner preferences.
//!
//! The store is read leniently: every recognized key is parsed on its own,
//! and a key with the wrong shape is ignored without affecting the others.
//! A missing or unparseable store yields empty preferences, so the engine
//! falls back to [`QuizConfig`] defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::quiz_engine::{
    config::{QuizConfig, DEFAULT_TYPES},
    error::{QuizError, Result},
};

pub const MIN_DELAY_SECS: f64 = 1.0;
pub const MAX_DELAY_SECS: f64 = 30.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_next: Option<bool>,
    /// Seconds, within `MIN_DELAY_SECS..=MAX_DELAY_SECS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_next_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_on_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_types: Option<Vec<String>>,
}

impl Preferences {
    /// Pick out the recognized keys of a stored object.
    pub fn from_value(raw: &Value) -> Self {
        let Some(object) = raw.as_object() else {
            return Preferences::default();
        };
        Preferences {
            auto_next: object.get("autoNext").and_then(Value::as_bool),
            auto_next_delay: object.get("autoNextDelay").and_then(delay_secs),
            flip_on_correct: object.get("flipOnCorrect").and_then(Value::as_bool),
            default_types: object.get("defaultTypes").and_then(type_list),
        }
    }

    pub fn from_json_str(source: &str) -> Self {
        match serde_json::from_str::<Value>(source) {
            Ok(raw) => Self::from_value(&raw),
            Err(err) => {
                tracing::warn!(%err, "ignoring unparseable preferences");
                Preferences::default()
            }
        }
    }

    /// Read the store at `path`. Missing or broken stores yield defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no stored preferences");
                Preferences::default()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable preferences");
                Preferences::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Snapshot the persisted subset of a config.
    pub fn from_config(config: &QuizConfig) -> Self {
        Preferences {
            auto_next: Some(config.auto_next.enabled),
            auto_next_delay: Some(config.auto_next.delay.as_secs_f64()),
            flip_on_correct: Some(config.flip_on_correct),
            default_types: Some(config.default_types.clone()),
        }
    }

    /// Overlay the stored values onto `config`.
    pub fn apply(&self, config: &mut QuizConfig) {
        if let Some(enabled) = self.auto_next {
            config.auto_next.enabled = enabled;
        }
        if let Some(secs) = self.auto_next_delay {
            config.auto_next.delay = Duration::from_secs_f64(clamp_delay(secs));
        }
        if let Some(flip) = self.flip_on_correct {
            config.flip_on_correct = flip;
        }
        if let Some(types) = &self.default_types {
            config.default_types = sanitize_types(types.iter().map(String::as_str));
        }
    }
}

fn clamp_delay(secs: f64) -> f64 {
    secs.clamp(MIN_DELAY_SECS, MAX_DELAY_SECS)
}

fn delay_secs(value: &Value) -> Option<f64> {
    let secs = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    secs.is_finite().then(|| clamp_delay(secs))
}

fn type_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(sanitize_types(items.iter().filter_map(Value::as_str)))
}

/// Trimmed non-empty labels, or the built-in list if none survive.
pub fn sanitize_types<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let types: Vec<String> = raw
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if types.is_empty() {
        DEFAULT_TYPES.iter().map(|t| t.to_string()).collect()
    } else {
        types
    }
}
