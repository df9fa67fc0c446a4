//! One-off joke requests that keep no state on this side.

use comedian_core::model::{CompletionRequest, Message, RequestOptions};
use comedian_core::{Error, ModelClient};

/// Builds the prompt asking for a joke about `topic`.
#[inline]
pub fn joke_prompt(topic: &str) -> String {
    format!("Tell me a short, family-friendly joke about {topic}.")
}

/// Asks a model for a single joke. Nothing is remembered between calls.
pub async fn one_shot_joke(
    client: &ModelClient,
    model: &str,
    topic: &str,
) -> Result<String, Error> {
    let topic = checked_topic(topic)?;
    let request =
        CompletionRequest::for_model(model, vec![Message::user(joke_prompt(topic))]);
    client.complete(request).await
}

/// Asks a hosted agent for a joke.
///
/// When `session_id` is given, the service keeps the conversation on its
/// side, so the agent recalls earlier topics of the same session.
pub async fn agent_joke(
    client: &ModelClient,
    agent_id: &str,
    session_id: Option<&str>,
    topic: &str,
) -> Result<String, Error> {
    let topic = checked_topic(topic)?;
    if agent_id.trim().is_empty() {
        return Err(Error::InvalidArgument("agent id is required"));
    }
    let mut options = RequestOptions::default();
    if let Some(session_id) = session_id {
        options = options.with_session_id(session_id);
    }
    let request = CompletionRequest::for_agent(
        agent_id.trim(),
        vec![Message::user(joke_prompt(topic))],
    )
    .with_options(options);
    client.complete(request).await
}

pub(crate) fn checked_topic(topic: &str) -> Result<&str, Error> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(Error::InvalidArgument("topic is required"));
    }
    Ok(topic)
}

#[cfg(test)]
mod tests {
    use comedian_core::model::Target;
    use comedian_test_model::{PresetResponse, TestModelProvider};

    use super::*;

    fn single_reply(text: &str) -> TestModelProvider {
        let mut provider = TestModelProvider::default();
        provider.add_user_input_step();
        provider.add_assistant_response_step(PresetResponse::with_output_text(
            text,
        ));
        provider
    }

    #[tokio::test]
    async fn test_one_shot_joke() {
        let provider = single_reply("Why was the cat sitting on the computer?");
        let probe = provider.clone();
        let client = ModelClient::new(provider);

        let joke = one_shot_joke(&client, "gpt-4o-mini", "  cats ").await.unwrap();
        assert_eq!(joke, "Why was the cat sitting on the computer?");

        let requests = probe.received_requests();
        assert_eq!(requests[0].target, Target::Model("gpt-4o-mini".to_owned()));
        assert_eq!(
            requests[0].messages[0].text(),
            "Tell me a short, family-friendly joke about cats."
        );
    }

    #[tokio::test]
    async fn test_agent_joke_forwards_session() {
        let provider = single_reply("Bark-ery.");
        let probe = provider.clone();
        let client = ModelClient::new(provider);

        let joke = agent_joke(&client, "agent_1", Some("sess_1"), "bread")
            .await
            .unwrap();
        assert_eq!(joke, "Bark-ery.");

        let requests = probe.received_requests();
        assert_eq!(requests[0].target, Target::Agent("agent_1".to_owned()));
        assert_eq!(requests[0].options.session_id.as_deref(), Some("sess_1"));
        assert_eq!(requests[0].options.workflow_id, None);
    }

    #[tokio::test]
    async fn test_rejects_blank_input() {
        let provider = single_reply("unused");
        let probe = provider.clone();
        let client = ModelClient::new(provider);

        let err = one_shot_joke(&client, "m", "   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let err = agent_joke(&client, "", None, "cats").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(probe.received_requests().is_empty());
    }
}
