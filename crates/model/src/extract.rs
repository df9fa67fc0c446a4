use serde_json::Value;

/// Pulls plain text out of a completion payload.
///
/// The service has shipped several envelope shapes over time, so this tries
/// them in order and returns the first non-empty text:
///
/// 1. a flat `output_text` string;
/// 2. an `output` array of blocks, each with a `content` array of parts.
///    Part texts are joined without a separator, block texts with a single
///    space;
/// 3. the nested `data[0].content[0].text` path.
///
/// The result is always trimmed. An empty string means the payload carries
/// no usable text, which is not an error at this layer.
pub fn extract_text(response: &Value) -> String {
    if let Some(text) = response.get("output_text").and_then(Value::as_str) {
        let text = text.trim();
        if !text.is_empty() {
            return text.to_owned();
        }
    }

    if let Some(blocks) = response.get("output").and_then(Value::as_array) {
        let combined = blocks
            .iter()
            .map(block_text)
            .collect::<Vec<_>>()
            .join(" ");
        let combined = combined.trim();
        if !combined.is_empty() {
            return combined.to_owned();
        }
    }

    let nested = response
        .pointer("/data/0/content/0/text")
        .and_then(Value::as_str)
        .map(str::trim);
    if let Some(text) = nested {
        if !text.is_empty() {
            return text.to_owned();
        }
    }

    String::new()
}

fn block_text(block: &Value) -> String {
    let Some(parts) = block.get("content").and_then(Value::as_array) else {
        return String::new();
    };
    parts
        .iter()
        .map(|part| part.get("text").and_then(Value::as_str).unwrap_or(""))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_flat_text_wins() {
        let response = json!({
            "output_text": "  Why did the cat sit on the computer?  ",
            "output": [{ "content": [{ "text": "ignored" }] }],
        });
        assert_eq!(
            extract_text(&response),
            "Why did the cat sit on the computer?"
        );
    }

    #[test]
    fn test_blank_flat_text_falls_through() {
        let response = json!({
            "output_text": "   ",
            "output": [{ "content": [{ "text": "From blocks" }] }],
        });
        assert_eq!(extract_text(&response), "From blocks");
    }

    #[test]
    fn test_output_blocks() {
        let response = json!({
            "output": [
                {
                    "type": "message",
                    "content": [
                        { "type": "output_text", "text": "Knock, " },
                        { "type": "output_text", "text": "knock." },
                    ],
                },
                { "type": "reasoning" },
                {
                    "content": [
                        { "type": "refusal", "refusal": "nope" },
                        { "type": "output_text", "text": "Who's there? " },
                    ],
                },
            ],
        });
        // The block without content still contributes a separator.
        assert_eq!(extract_text(&response), "Knock, knock.  Who's there?");
    }

    #[test]
    fn test_non_string_parts_are_skipped() {
        let response = json!({
            "output": [{ "content": [{ "text": 42 }, { "text": "Pun" }, null] }],
        });
        assert_eq!(extract_text(&response), "Pun");
    }

    #[test]
    fn test_nested_data_path() {
        let response = json!({
            "output": [{ "content": [] }],
            "data": [{ "content": [{ "text": "\nA nested joke\n" }] }],
        });
        assert_eq!(extract_text(&response), "A nested joke");
    }

    #[test]
    fn test_no_text() {
        assert_eq!(extract_text(&json!({})), "");
        assert_eq!(extract_text(&Value::Null), "");
        assert_eq!(extract_text(&json!("just a string")), "");
        assert_eq!(extract_text(&json!({ "output_text": 12 })), "");
        assert_eq!(
            extract_text(&json!({
                "output": "not an array",
                "data": [{ "content": [{ "text": "  " }] }],
            })),
            ""
        );
    }
}
