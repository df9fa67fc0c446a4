use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::future::ready;

use comedian_model::{
    CompletionProvider, CompletionRequest, CompletionResponse, ErrorKind,
    Message, ProviderError, Role,
};
use serde_json::json;

#[derive(Debug)]
struct FakeProviderError(ErrorKind);

impl Display for FakeProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for FakeProviderError {}

impl ProviderError for FakeProviderError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// Echoes the last user message back, split into one block per word.
struct EchoProvider;

impl CompletionProvider for EchoProvider {
    type Error = FakeProviderError;

    fn create(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, Self::Error>> + Send + 'static
    {
        let result = 'blk: {
            let Some(last) = req.messages.last() else {
                break 'blk Err(FakeProviderError(ErrorKind::Other));
            };
            if last.role != Role::User {
                break 'blk Err(FakeProviderError(ErrorKind::Moderated));
            }

            let blocks: Vec<_> = format!("You said {}", last.text())
                .split(' ')
                .map(|word| json!({ "content": [{ "text": word }] }))
                .collect();
            Ok(CompletionResponse::from_value(json!({ "output": blocks })))
        };
        ready(result)
    }
}

#[tokio::test]
async fn test_completion() {
    let provider = EchoProvider;
    assert!(provider.has_credential());

    let req = CompletionRequest::for_model(
        "echo",
        vec![Message::system("Repeat"), Message::user("Good morning")],
    );
    let resp = provider.create(&req).await.unwrap();
    assert_eq!(resp.text(), "You said Good morning");
}

#[tokio::test]
async fn test_error() {
    let provider = EchoProvider;

    let req = CompletionRequest::for_model("echo", vec![]);
    let err = provider.create(&req).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);

    let req =
        CompletionRequest::for_model("echo", vec![Message::system("Repeat")]);
    let err = provider.create(&req).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Moderated);
}
