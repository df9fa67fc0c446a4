mod builder;

use std::fmt::{self, Debug};

use comedian_model::{CompletionRequest, Message, RequestOptions, Target};

use crate::Error;
use crate::conversation::Transcript;
use crate::model_client::ModelClient;
use crate::tool::Tool;
pub use builder::AgentBuilder;

/// Where an agent is in its conversational arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AgentStage {
    /// Just built or reset. The transcript only holds the system message.
    #[default]
    Fresh,
    /// At least one turn completed since the last reset.
    Active,
}

/// Immutable configuration of an [`Agent`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AgentConfig {
    pub(crate) name: String,
    pub(crate) instructions: String,
    pub(crate) model: String,
    pub(crate) options: RequestOptions,
}

impl AgentConfig {
    /// Returns the agent name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the instructions the agent was built with.
    #[inline]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Returns the model identifier requests are addressed to.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the options sent with every request.
    #[inline]
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    fn system_prompt(&self) -> String {
        format!("{}\nYou are performing as {}.", self.instructions, self.name)
    }
}

/// An agent instance, which keeps a transcript of the conversation and
/// replays it to the completion service on every turn.
///
/// `respond` takes `&mut self`, so one agent handles at most one turn at a
/// time. To share an agent between tasks, put it behind an async mutex;
/// to run conversations concurrently, build one agent per conversation.
pub struct Agent {
    config: AgentConfig,
    model_client: ModelClient,
    transcript: Transcript,
    tools: Vec<Box<dyn Tool>>,
    stage: AgentStage,
}

impl Agent {
    fn from_builder_parts(
        config: AgentConfig,
        model_client: ModelClient,
        tools: Vec<Box<dyn Tool>>,
    ) -> Self {
        let transcript = Transcript::new(config.system_prompt());
        Self {
            config,
            model_client,
            transcript,
            tools,
            stage: AgentStage::Fresh,
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Returns the conversation so far.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the current stage.
    #[inline]
    pub fn stage(&self) -> AgentStage {
        self.stage
    }

    /// Returns the names of the registered tools.
    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name())
    }

    /// Registers a tool. Registered tools have no effect on the
    /// conversation yet.
    #[inline]
    pub fn use_tool<T: Tool>(&mut self, tool: T) -> &mut Self {
        debug!("registered tool {}", tool.name());
        self.tools.push(Box::new(tool));
        self
    }

    /// Drops every turn and keeps only the system message.
    ///
    /// The configuration and tools are retained.
    pub fn reset(&mut self) {
        self.transcript.truncate_to_system();
        self.stage = AgentStage::Fresh;
        debug!("agent {} reset", self.config.name);
    }

    /// Sends a prompt while keeping the conversational context, and
    /// returns the reply text.
    ///
    /// The user turn is recorded before the service is called and stays in
    /// the transcript even if the call fails or yields no text. A retry
    /// therefore sends the failed turn again, followed by the new one.
    pub async fn respond(&mut self, prompt: &str) -> Result<String, Error> {
        if prompt.is_empty() {
            return Err(Error::InvalidArgument("agent prompt is required"));
        }
        if !self.model_client.has_credential() {
            return Err(Error::MissingCredential);
        }

        self.transcript.push(Message::user(prompt));

        let request = self.build_request();
        debug!(
            "agent {} sending {} messages",
            self.config.name,
            request.messages.len()
        );
        let text = self.model_client.fetch_text(request).await?;

        self.transcript.push(Message::assistant(text.clone()));
        self.stage = AgentStage::Active;
        Ok(text)
    }

    fn build_request(&self) -> CompletionRequest {
        CompletionRequest {
            target: Target::Model(self.config.model.clone()),
            messages: self.transcript.messages().to_vec(),
            options: self.config.options.clone(),
        }
    }
}

impl Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("config", &self.config)
            .field("transcript", &self.transcript)
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}
