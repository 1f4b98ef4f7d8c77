//! Emotion classifier client
//!
//! The presenter talks to the classifier only through [`EmotionClassifier`].
//! Two implementations exist:
//! - [`HttpClassifier`]: POSTs `{"text": ...}` to the configured `/predict` endpoint
//! - [`DemoClassifier`]: offline keyword scorer used by demo mode
//!
//! Wire format (JSON):
//! ```text
//! request:  {"text": "I am really happy!"}
//! success:  {"emotions": {"joy": 0.92, "excitement": 0.85}}
//! failure:  {"error": "model unavailable"}   (any non-2xx, body optional)
//! ```

mod demo;
mod http;

pub use demo::DemoClassifier;
pub use http::HttpClassifier;

use futures::future::BoxFuture;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Request / response envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Payload sent to the classifier. Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    /// Build a request from raw user input.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }
}

/// Emotion name → probability, in the order the classifier sent them.
///
/// Probabilities are expected in `[0, 1]` but are neither validated nor
/// clamped here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionScores(Vec<(String, f64)>);

impl EmotionScores {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, p)| (name.as_str(), *p))
    }
}

impl FromIterator<(String, f64)> for EmotionScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// serde_json maps are key-sorted without `preserve_order`, so the map is
// walked by hand to keep the response order for tie-breaking.
impl<'de> Deserialize<'de> for EmotionScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoresVisitor;

        impl<'de> Visitor<'de> for ScoresVisitor {
            type Value = EmotionScores;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of emotion names to probabilities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, probability)) = map.next_entry::<String, f64>()? {
                    entries.push((name, probability));
                }
                Ok(EmotionScores(entries))
            }
        }

        deserializer.deserialize_map(ScoresVisitor)
    }
}

impl Serialize for EmotionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, probability) in &self.0 {
            map.serialize_entry(name, probability)?;
        }
        map.end()
    }
}

/// Successful `/predict` body. Absent or `null` emotions mean "nothing detected".
#[derive(Debug, Deserialize)]
pub(crate) struct PredictResponse {
    #[serde(default)]
    pub emotions: Option<EmotionScores>,
}

/// Error body the classifier may attach to a non-2xx response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: serde_json::Value,
}

/// Text for a truthy `error` value; `null`, `false`, `0` and `""` yield nothing
fn error_text(value: serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors surfaced by a classifier call
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// Request never produced an HTTP response (connection refused, DNS, timeout)
    Transport(String),
    /// Non-2xx response. `message` comes from the body's `error` field when parsable.
    Server {
        status: u16,
        status_text: String,
        message: Option<String>,
    },
    /// 2xx response whose body was not the expected envelope
    MalformedResponse(String),
}

impl ClassifierError {
    /// Build a server error from a non-2xx status and its raw body.
    ///
    /// An unparsable body, or one whose `error` field is missing or falsy,
    /// falls back to the generic status-line message. Other values are shown
    /// as text, whitespace included.
    pub fn from_error_body(status: u16, status_text: &str, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| error_text(b.error));

        if message.is_none() {
            tracing::debug!("Error body for status {} was not usable JSON", status);
        }

        Self::Server {
            status,
            status_text: status_text.to_string(),
            message,
        }
    }

    /// Message shown in the inline error panel
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(msg) => msg.clone(),
            Self::Server {
                message: Some(msg), ..
            } => msg.clone(),
            Self::Server {
                status,
                status_text,
                message: None,
            } => format!("Server error: {} {}", status, status_text)
                .trim_end()
                .to_string(),
            Self::MalformedResponse(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Transport error: {}", msg),
            Self::Server { status, .. } => {
                write!(f, "Classifier error ({}): {}", status, self.user_message())
            }
            Self::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}

// ─────────────────────────────────────────────────────────────────────────────
// Classifier trait
// ─────────────────────────────────────────────────────────────────────────────

/// Anything that can score a piece of text.
///
/// The returned future is `'static` so the UI loop can spawn it and keep
/// drawing while the request is in flight.
pub trait EmotionClassifier: Send + Sync {
    /// Short name for logs and the title bar
    fn name(&self) -> &'static str;

    /// Score one request. No retries, no de-duplication.
    fn predict(
        &self,
        request: AnalysisRequest,
    ) -> BoxFuture<'static, Result<EmotionScores, ClassifierError>>;
}
