use crate::message::Message;

/// A request to be sent to the completion service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompletionRequest {
    /// What the request is addressed to.
    pub target: Target,
    /// The input messages, in conversational order.
    pub messages: Vec<Message>,
    /// Optional request settings.
    pub options: RequestOptions,
}

impl CompletionRequest {
    /// Creates a request for a plain model completion.
    #[inline]
    pub fn for_model<S: Into<String>>(model: S, messages: Vec<Message>) -> Self {
        Self {
            target: Target::Model(model.into()),
            messages,
            options: RequestOptions::default(),
        }
    }

    /// Creates a request for a hosted agent.
    #[inline]
    pub fn for_agent<S: Into<String>>(agent_id: S, messages: Vec<Message>) -> Self {
        Self {
            target: Target::Agent(agent_id.into()),
            messages,
            options: RequestOptions::default(),
        }
    }

    /// Replaces the request options.
    #[inline]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }
}

/// The receiver of a completion request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// A model, by its identifier.
    Model(String),
    /// A hosted agent, by its id. The agent decides which model to use.
    Agent(String),
}

/// Optional settings that travel with a request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RequestOptions {
    /// A server-side conversation identifier.
    ///
    /// Reusing it lets the service recall prior turns without the client
    /// resending the full history.
    pub session_id: Option<String>,
    /// An identifier used only to correlate traces on the service side.
    /// It has no effect on the answer.
    pub workflow_id: Option<String>,
}

impl RequestOptions {
    /// Sets the session identifier.
    #[inline]
    pub fn with_session_id<S: Into<String>>(mut self, session_id: S) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Sets the workflow identifier.
    #[inline]
    pub fn with_workflow_id<S: Into<String>>(mut self, workflow_id: S) -> Self {
        self.workflow_id = Some(workflow_id.into());
        self
    }
}
