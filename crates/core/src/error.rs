use comedian_model::{ErrorKind, ProviderError};
use thiserror::Error;

/// Errors surfaced by the agent and the model client.
///
/// Nothing is retried internally; every failure reaches the immediate
/// caller as one of these kinds.
#[derive(Debug, Error)]
pub enum Error {
    /// The agent configuration is invalid. Nothing was built.
    #[error("invalid agent configuration: {0}")]
    Configuration(String),

    /// An argument was rejected before any state was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// No credential could be resolved for the completion service.
    #[error("missing OPENAI_API_KEY environment variable")]
    MissingCredential,

    /// The service answered, but the payload carried no text.
    #[error("completion response did not contain text content")]
    EmptyResponse,

    /// The completion service call failed.
    #[error("completion request failed: {0}")]
    Transport(Box<dyn ProviderError>),
}

impl Error {
    /// Returns the provider error kind if this is a transport failure.
    #[inline]
    pub fn transport_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Transport(err) => Some(err.kind()),
            _ => None,
        }
    }
}
