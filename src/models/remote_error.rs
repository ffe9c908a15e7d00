//! Error-shaped response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An error reported by the service in the response body, e.g.
/// `{"type": "Error", "error": "NotFound", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    /// Error class such as `NotFound`, `BadArgument` or `Throttled`.
    pub error: String,

    /// Human-readable explanation.
    #[serde(default)]
    pub message: Option<String>,
}

impl RemoteError {
    /// Recognize an error body. Returns `None` for anything that is not an
    /// object with `type == "Error"`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.get("type").and_then(Value::as_str) != Some("Error") {
            return None;
        }

        Some(Self {
            error: value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Error")
                .to_string(),
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    pub fn is_throttled(&self) -> bool {
        self.error == "Throttled"
    }

    pub fn is_not_found(&self) -> bool {
        self.error == "NotFound"
    }
}
