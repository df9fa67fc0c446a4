use std::error::Error;

use crate::error::ErrorKind;
use crate::request::CompletionRequest;
use crate::response::CompletionResponse;

/// The error type for a completion provider.
pub trait ProviderError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that represents a completion service, which takes a whole
/// conversation and answers with a single payload.
///
/// Once the provider is created, it should behave like a stateless object.
/// It can still have internal state, but callers should not rely on it,
/// and the provider should be prepared for being dropped anytime.
pub trait CompletionProvider: Send + Sync {
    /// The error type that may be returned by the provider.
    type Error: ProviderError;

    /// Returns whether a credential can be resolved for the next request.
    ///
    /// Callers check this before mutating any state, so a provider without
    /// a credential never sees a request.
    fn has_credential(&self) -> bool {
        true
    }

    /// Sends one request to the service.
    ///
    /// This is a single round trip. Implementations must not retry
    /// internally; failures are surfaced to the caller unchanged.
    fn create(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, Self::Error>> + Send + 'static;
}
