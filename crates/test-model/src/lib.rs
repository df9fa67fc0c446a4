//! A local scripted completion provider for testing purpose.

mod preset;

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use comedian_model::{
    CompletionProvider, CompletionRequest, CompletionResponse, ErrorKind,
    ProviderError,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: &'static str,
    kind: ErrorKind,
}

impl Error {
    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Clone)]
enum ConversationStep {
    System,
    UserInput,
    AssistantResponse(PresetResponse),
}

/// A local fake completion provider for testing purpose.
///
/// Before sending requests, you need to setup the conversation script, which
/// is how the provider should respond to a request. The step is selected by
/// the number of messages in the request: a request carrying `n` messages is
/// answered by the `n`-th step (zero-based), which must be an assistant
/// response. If there are no enough steps in the script, an error will be
/// returned.
///
/// Clones share the failure counters and the request log.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    conversation_script: Vec<ConversationStep>,
    delay: Option<Duration>,
    without_credential: bool,
    attempts: Arc<Mutex<HashMap<usize, u64>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_system_step(&mut self) {
        self.conversation_script.push(ConversationStep::System);
    }

    #[inline]
    pub fn add_user_input_step(&mut self) {
        self.conversation_script.push(ConversationStep::UserInput);
    }

    #[inline]
    pub fn add_assistant_response_step(&mut self, preset: PresetResponse) {
        self.conversation_script
            .push(ConversationStep::AssistantResponse(preset));
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Makes [`CompletionProvider::has_credential`] report whether a
    /// credential is available.
    #[inline]
    pub fn set_credential(&mut self, available: bool) {
        self.without_credential = !available;
    }

    /// Returns every request received so far, in order.
    pub fn received_requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn answer(&self, req: &CompletionRequest) -> Result<CompletionResponse, Error> {
        let step_idx = req.messages.len();
        let Some(step) = self.conversation_script.get(step_idx) else {
            return Err(Error {
                message: "no enough steps",
                kind: ErrorKind::Other,
            });
        };
        let preset = match step {
            ConversationStep::System | ConversationStep::UserInput => {
                return Err(Error {
                    message: "not an assistant response step",
                    kind: ErrorKind::Moderated,
                });
            }
            ConversationStep::AssistantResponse(preset) => preset,
        };

        if let Some(failures) = preset.failures {
            let mut attempts =
                self.attempts.lock().unwrap_or_else(PoisonError::into_inner);
            let attempt = attempts.entry(step_idx).or_default();
            *attempt += 1;
            if failures == 0 || *attempt <= failures {
                return Err(Error {
                    message: "preset failure",
                    kind: ErrorKind::RateLimitExceeded,
                });
            }
        }

        Ok(CompletionResponse::from_value(preset.payload.clone()))
    }
}

impl CompletionProvider for TestModelProvider {
    type Error = crate::Error;

    #[inline]
    fn has_credential(&self) -> bool {
        !self.without_credential
    }

    fn create(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, Self::Error>> + Send + 'static
    {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(req.clone());
        let result = self.answer(req);
        let delay = self.delay.unwrap_or(Duration::from_millis(1));
        async move {
            sleep(delay).await;
            result
        }
    }
}
