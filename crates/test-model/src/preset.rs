use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The preset response for an assistant step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetResponse {
    /// The raw payload returned to the caller.
    pub payload: Value,
    /// If set, the request will fail in the first `failures` attempts.
    /// `Some(0)` means the request will fail infinitely.
    pub failures: Option<u64>,
}

impl PresetResponse {
    /// Creates a `PresetResponse` with the specified raw payload.
    #[inline]
    pub fn with_payload(payload: Value) -> Self {
        Self {
            payload,
            failures: None,
        }
    }

    /// Creates a `PresetResponse` carrying a flat `output_text` field.
    #[inline]
    pub fn with_output_text<S: Into<String>>(text: S) -> Self {
        Self::with_payload(json!({ "output_text": text.into() }))
    }

    /// Creates a `PresetResponse` carrying `output` blocks, one per
    /// element, each block made of the given parts.
    pub fn with_output_blocks<B, P>(blocks: B) -> Self
    where
        B: IntoIterator<Item = P>,
        P: IntoIterator<Item = &'static str>,
    {
        let output: Vec<_> = blocks
            .into_iter()
            .map(|parts| {
                let content: Vec<_> = parts
                    .into_iter()
                    .map(|text| json!({ "type": "output_text", "text": text }))
                    .collect();
                json!({ "type": "message", "content": content })
            })
            .collect();
        Self::with_payload(json!({ "output": output }))
    }

    /// Sets failure times before a successful response. `0` means the
    /// response will always be a failure.
    #[inline]
    pub fn with_failures(mut self, failures: u64) -> Self {
        self.failures = Some(failures);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let response =
            PresetResponse::with_output_blocks([["Knock, ", "knock."]])
                .with_failures(2);

        let serialized = serde_json::to_string(&response).unwrap();
        let deserialized: PresetResponse =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(response, deserialized);
        assert_eq!(
            deserialized.payload["output"][0]["content"][1]["text"],
            "knock."
        );
    }
}
