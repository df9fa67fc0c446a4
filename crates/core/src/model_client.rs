use std::pin::Pin;
use std::sync::Arc;

use comedian_model::{
    CompletionProvider, CompletionRequest, CompletionResponse, ProviderError,
};
use tracing::Instrument;

use crate::Error;

type SendRequestResult = Result<CompletionResponse, Box<dyn ProviderError>>;
type BoxedSendRequestFuture =
    Pin<Box<dyn Future<Output = SendRequestResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(CompletionRequest) -> BoxedSendRequestFuture + Send + Sync>;
type CredentialFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// A wrapper around a completion provider that provides a type-erased
/// interface for the other modules.
///
/// Cloning is cheap, and clones share the same provider.
#[derive(Clone)]
pub struct ModelClient {
    handler_fn: HandlerFn,
    credential_fn: CredentialFn,
}

impl ModelClient {
    /// Wraps a provider.
    #[inline]
    pub fn new<P: CompletionProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `ModelClient` doesn't have a
        // generic parameter and we don't want it either.
        let provider = Arc::new(provider);
        let handler_fn: HandlerFn = {
            let provider = Arc::clone(&provider);
            Arc::new(move |req: CompletionRequest| {
                let fut = provider.create(&req);
                Box::pin(
                    async move {
                        trace!("got a request: {:?}", req);
                        match fut.await {
                            Ok(resp) => {
                                trace!("finished a request");
                                Ok(resp)
                            }
                            Err(err) => {
                                error!("got an error: {err:?}");
                                Err(Box::new(err) as Box<dyn ProviderError>)
                            }
                        }
                    }
                    .instrument(trace_span!("model client req")),
                ) as BoxedSendRequestFuture
            })
        };
        let credential_fn: CredentialFn =
            Arc::new(move || provider.has_credential());
        Self {
            handler_fn,
            credential_fn,
        }
    }

    /// Returns whether the provider can resolve a credential.
    #[inline]
    pub fn has_credential(&self) -> bool {
        (self.credential_fn)()
    }

    /// Sends a request and returns the raw response.
    #[inline]
    pub async fn send_request(
        &self,
        req: CompletionRequest,
    ) -> Result<CompletionResponse, Box<dyn ProviderError>> {
        (self.handler_fn)(req).await
    }

    /// Sends a one-off request and returns the extracted text.
    ///
    /// This is the stateless counterpart of
    /// [`Agent::respond`](crate::Agent::respond): nothing is remembered
    /// between calls.
    pub async fn complete(&self, req: CompletionRequest) -> Result<String, Error> {
        if !self.has_credential() {
            return Err(Error::MissingCredential);
        }
        self.fetch_text(req).await
    }

    pub(crate) async fn fetch_text(
        &self,
        req: CompletionRequest,
    ) -> Result<String, Error> {
        let resp = self.send_request(req).await.map_err(Error::Transport)?;
        let text = resp.text();
        if text.is_empty() {
            warn!("response carried no text: {}", resp.as_value());
            return Err(Error::EmptyResponse);
        }
        Ok(text)
    }
}
