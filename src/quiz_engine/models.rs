use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// One of the three fields a round can ask with or answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Vietnamese,
    Chinese,
    Pinyin,
}

impl Field {
    /// Every ask-capable field, in canonical order.
    pub const ALL: [Field; 3] = [Field::Vietnamese, Field::Chinese, Field::Pinyin];

    /// Source record keys for this field, most preferred first.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Field::Vietnamese => &["VIETNAMESE"],
            Field::Chinese    => &["SIMPLIFIED", "CHINESE"],
            Field::Pinyin     => &["PINYIN"],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Vietnamese => write!(f, "Vietnamese"),
            Field::Chinese    => write!(f, "Chinese"),
            Field::Pinyin     => write!(f, "Pinyin"),
        }
    }
}

/// Key of the optional free-form example sentence.
pub const EXAMPLE_KEY: &str = "EXAMPLE";

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One normalized vocabulary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    #[serde(rename = "TYPE")]
    pub entry_type: String,
    /// Every other source field, untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entry {
    /// Text of `field`, or an empty string when the record lacks it.
    pub fn text(&self, field: Field) -> Cow<'_, str> {
        field
            .keys()
            .iter()
            .find_map(|key| self.fields.get(*key).filter(|v| !v.is_null()))
            .map(render)
            .unwrap_or(Cow::Borrowed(""))
    }

    pub fn example(&self) -> Cow<'_, str> {
        self.fields.get(EXAMPLE_KEY).map(render).unwrap_or(Cow::Borrowed(""))
    }
}

fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b)   => Cow::Owned(b.to_string()),
        _                => Cow::Borrowed(""),
    }
}

/// The normalized, immutable entry list a session draws from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub(crate) entries: Vec<Entry>,
}

impl Dataset {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

// ---------------------------------------------------------------------------
// Rounds
// ---------------------------------------------------------------------------

/// The prompt of one round. Replaced, never mutated, when the round ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub correct: Entry,
    pub ask: Field,
    pub answer: Field,
    pub instruction: &'static str,
}

impl Question {
    /// The text shown as the prompt.
    pub fn prompt(&self) -> Cow<'_, str> {
        self.correct.text(self.ask)
    }

    pub fn correct_id(&self) -> u64 {
        self.correct.id
    }
}

/// A question together with the choices offered for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Round {
    pub question: Question,
    pub options: Vec<Entry>,
}

impl Round {
    /// Label of an option, rendered from the answer field.
    pub fn label<'a>(&self, option: &'a Entry) -> Cow<'a, str> {
        option.text(self.question.answer)
    }

    pub fn has_option(&self, id: u64) -> bool {
        self.options.iter().any(|o| o.id == id)
    }
}
