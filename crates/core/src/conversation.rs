//! Conversation-related types.

use comedian_model::Message;

/// The ordered history of a conversation.
///
/// The first message is always the system message the agent was built
/// with. It survives resets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    #[inline]
    pub(crate) fn new<S: Into<String>>(system_prompt: S) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Returns all messages in conversational order.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages, system message included.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the transcript has no messages, which never
    /// happens for a transcript owned by an agent.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the system message.
    #[inline]
    pub fn system_message(&self) -> &Message {
        &self.messages[0]
    }

    /// Returns the most recent message.
    #[inline]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[inline]
    pub(crate) fn push(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    #[inline]
    pub(crate) fn truncate_to_system(&mut self) {
        self.messages.truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use comedian_model::Role;

    use super::*;

    #[test]
    fn test_reset_keeps_system_message() {
        let mut transcript = Transcript::new("Be funny");
        transcript.push(Message::user("Cats"));
        transcript.push(Message::assistant("Meow"));
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.last().unwrap().role, Role::Assistant);

        transcript.truncate_to_system();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.system_message().role, Role::System);
        assert_eq!(transcript.system_message().text(), "Be funny");

        transcript.truncate_to_system();
        assert_eq!(transcript.len(), 1);
    }
}
