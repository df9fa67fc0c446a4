use comedian_model::{CompletionProvider, RequestOptions};

use super::{Agent, AgentConfig};
use crate::Error;
use crate::model_client::ModelClient;
use crate::tool::Tool;

const DEFAULT_NAME: &str = "Agent";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// [`Agent`] builder.
pub struct AgentBuilder {
    model_client: ModelClient,
    name: Option<String>,
    instructions: Option<String>,
    model: Option<String>,
    options: RequestOptions,
    tools: Vec<Box<dyn Tool>>,
}

impl AgentBuilder {
    /// Creates a new builder with the specified completion provider.
    #[inline]
    pub fn with_model_provider<P: CompletionProvider + 'static>(
        provider: P,
    ) -> Self {
        Self::with_model_client(ModelClient::new(provider))
    }

    /// Creates a new builder sharing an existing model client.
    #[inline]
    pub fn with_model_client(model_client: ModelClient) -> Self {
        Self {
            model_client,
            name: None,
            instructions: None,
            model: None,
            options: RequestOptions::default(),
            tools: vec![],
        }
    }

    /// Sets the agent name. Defaults to `Agent`.
    #[inline]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the instructions. Required.
    #[inline]
    pub fn with_instructions<S: Into<String>>(mut self, instructions: S) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Sets the model identifier. Defaults to `gpt-4o-mini`.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the options sent with every request.
    #[inline]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Registers a tool.
    #[inline]
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        self.tools.push(Box::new(tool));
        self
    }

    /// Builds the agent.
    ///
    /// Fails if no instructions were given, or they are blank.
    pub fn build(self) -> Result<Agent, Error> {
        let Some(instructions) =
            self.instructions.filter(|i| !i.trim().is_empty())
        else {
            return Err(Error::Configuration(
                "agent instructions are required".to_owned(),
            ));
        };
        let config = AgentConfig {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_owned()),
            instructions,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            options: self.options,
        };
        Ok(Agent::from_builder_parts(
            config,
            self.model_client,
            self.tools,
        ))
    }
}
