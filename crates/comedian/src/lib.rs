//! ComedianBot: a joke-telling assistant built on a hosted completion
//! service.
//!
//! The crate includes a CLI for chatting in the terminal and, with the
//! `server` feature, an HTTP gateway serving the same jokes as JSON.

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

mod bot;
pub mod jokes;
#[cfg(feature = "server")]
pub mod server;

pub use bot::{COMEDIAN_INSTRUCTIONS, COMEDIAN_NAME, Comedian};

/// Re-exports of [`comedian_core`] crate.
pub mod core {
    pub use comedian_core::*;
}

/// Builds a model client talking to the OpenAI Responses API.
///
/// Without an explicit key, `OPENAI_API_KEY` is read when requests are sent.
pub fn openai_client(
    api_key: Option<String>,
    base_url: Option<String>,
) -> comedian_core::ModelClient {
    use comedian_openai_model::{OpenAIConfigBuilder, OpenAIProvider};

    let mut builder = match api_key {
        Some(api_key) => OpenAIConfigBuilder::with_api_key(api_key),
        None => OpenAIConfigBuilder::new(),
    };
    if let Some(base_url) = base_url {
        builder = builder.with_base_url(base_url);
    }
    comedian_core::ModelClient::new(OpenAIProvider::new(builder.build()))
}
