use serde::{Deserialize, Serialize};

/// The author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that steer the whole conversation.
    System,
    /// Input from the user.
    User,
    /// A reply produced by the service.
    Assistant,
}

/// A single text segment of a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentPart {
    /// The text of this part.
    pub text: String,
}

/// A complete message.
///
/// Content is kept as parts to mirror the multi-part content blocks of
/// the service, but for this crate it is just text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote this message.
    pub role: Role,
    /// The ordered content parts.
    pub content: Vec<ContentPart>,
}

impl Message {
    /// Creates a single-part message.
    #[inline]
    pub fn new<S: Into<String>>(role: Role, text: S) -> Self {
        Self {
            role,
            content: vec![ContentPart { text: text.into() }],
        }
    }

    /// Creates a system message.
    #[inline]
    pub fn system<S: Into<String>>(text: S) -> Self {
        Self::new(Role::System, text)
    }

    /// Creates a user message.
    #[inline]
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self::new(Role::User, text)
    }

    /// Creates an assistant message.
    #[inline]
    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self::new(Role::Assistant, text)
    }

    /// Returns the concatenated text of all parts.
    pub fn text(&self) -> String {
        self.content.iter().map(|p| p.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_parts() {
        let msg = Message {
            role: Role::Assistant,
            content: vec![
                ContentPart {
                    text: "Knock, ".to_owned(),
                },
                ContentPart {
                    text: "knock.".to_owned(),
                },
            ],
        };
        assert_eq!(msg.text(), "Knock, knock.");
        assert_eq!(Message::user("Hi").text(), "Hi");
    }
}
