//! Request and response envelopes of the literature API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Optional generation settings merged into the `/generate` body.
///
/// Known fields are omitted when unset; anything in `extra` is sent as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presets {
    /// e.g. Tang poetry, haiku, modern verse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poem_style: Option<String>,
    /// e.g. mystery, romance, fantasy, science fiction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub novel_genre: Option<String>,
    /// e.g. serious, humour, lyrical
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// Output language code, e.g. `en`, `zh-TW`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Full locale, e.g. `en-GB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Presets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poem_style(mut self, value: impl Into<String>) -> Self {
        self.poem_style = Some(value.into());
        self
    }

    pub fn novel_genre(mut self, value: impl Into<String>) -> Self {
        self.novel_genre = Some(value.into());
        self
    }

    pub fn tone(mut self, value: impl Into<String>) -> Self {
        self.tone = Some(value.into());
        self
    }

    pub fn lang(mut self, value: impl Into<String>) -> Self {
        self.lang = Some(value.into());
        self
    }

    pub fn locale(mut self, value: impl Into<String>) -> Self {
        self.locale = Some(value.into());
        self
    }

    /// Pass an arbitrary field through to the request body
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Literary transformation of a repository, returned by `/generate` and `/example`.
///
/// Holds the response body exactly as the server sent it; any JSON decodes.
/// The accessors read the usual text fields and yield `None` when a field is
/// missing or not a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiteraryWork(Value);

impl LiteraryWork {
    pub fn repo_url(&self) -> Option<&str> {
        self.text("repo_url")
    }

    pub fn insight_report(&self) -> Option<&str> {
        self.text("insight_report")
    }

    pub fn poem(&self) -> Option<&str> {
        self.text("poem")
    }

    pub fn novel(&self) -> Option<&str> {
        self.text("novel")
    }

    /// Any field of the envelope
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}

impl From<Value> for LiteraryWork {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message of a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `/chat`; unset `lang`/`locale` are sent as `null`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub conversation_history: &'a [ChatTurn],
    pub lang: Option<&'a str>,
    pub locale: Option<&'a str>,
}

/// Build the `/generate` body: `url` first, then every preset field.
///
/// A preset named `url` replaces the positional one.
pub fn generate_body(url: &str, presets: &Presets) -> serde_json::Result<Value> {
    let mut body = Map::new();
    body.insert("url".to_string(), Value::String(url.to_string()));

    if let Value::Object(fields) = serde_json::to_value(presets)? {
        body.extend(fields);
    }

    Ok(Value::Object(body))
}

/// Extract `.response` from a chat envelope; absent, `null` or non-string is `None`
pub fn chat_reply(envelope: &Value) -> Option<String> {
    envelope
        .get("response")
        .and_then(Value::as_str)
        .map(str::to_string)
}
