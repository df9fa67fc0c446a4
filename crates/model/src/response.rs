use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::extract_text;

/// A raw payload returned by the completion service.
///
/// The shape of the payload has changed across service versions, so no
/// structure is assumed here. Use [`CompletionResponse::text`] to pull the
/// answer out of it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionResponse(Value);

impl CompletionResponse {
    /// Wraps a raw payload.
    #[inline]
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Returns the raw payload.
    #[inline]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the response and returns the raw payload.
    #[inline]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Extracts the best-effort plain text answer, which may be empty.
    #[inline]
    pub fn text(&self) -> String {
        extract_text(&self.0)
    }
}

impl From<Value> for CompletionResponse {
    #[inline]
    fn from(value: Value) -> Self {
        Self(value)
    }
}
