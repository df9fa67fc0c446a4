use comedian_core::{Agent, AgentBuilder, Error, ModelClient};

use crate::jokes::{checked_topic, joke_prompt};

/// The name the comedian performs under.
pub const COMEDIAN_NAME: &str = "ComedianBot";

/// Instructions the comedian is built with.
pub const COMEDIAN_INSTRUCTIONS: &str = "You are a warm stand-up comedian. \
Tell short, family-friendly jokes, one at a time, in no more than three \
sentences. Remember the topics you already joked about and call back to them \
when it fits.";

/// The ComedianBot: an in-memory agent that remembers the whole routine.
///
/// The last topic is kept per instance, so two comedians never share it.
#[derive(Debug)]
pub struct Comedian {
    agent: Agent,
    last_topic: Option<String>,
}

impl Comedian {
    /// Creates a comedian using the given client and model.
    pub fn new(model_client: ModelClient, model: &str) -> Result<Self, Error> {
        let agent = AgentBuilder::with_model_client(model_client)
            .with_name(COMEDIAN_NAME)
            .with_instructions(COMEDIAN_INSTRUCTIONS)
            .with_model(model)
            .build()?;
        Ok(Self {
            agent,
            last_topic: None,
        })
    }

    /// Asks for a joke about `topic`, keeping the routine going.
    pub async fn joke_about(&mut self, topic: &str) -> Result<String, Error> {
        let topic = checked_topic(topic)?;
        let joke = self.agent.respond(&joke_prompt(topic)).await?;
        self.last_topic = Some(topic.to_owned());
        Ok(joke)
    }

    /// Sends a free-form message as part of the routine. The last topic is
    /// left alone.
    #[inline]
    pub async fn chat(&mut self, message: &str) -> Result<String, Error> {
        self.agent.respond(message).await
    }

    /// Returns the topic of the last joke told.
    #[inline]
    pub fn last_topic(&self) -> Option<&str> {
        self.last_topic.as_deref()
    }

    /// Starts a new routine.
    pub fn reset(&mut self) {
        self.agent.reset();
        self.last_topic = None;
    }

    /// Returns the underlying agent.
    #[inline]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}
