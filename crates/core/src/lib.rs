//! Core logic: the conversational agent, its transcript and the client it
//! talks to the completion service through.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod agent;
pub mod conversation;
mod error;
mod model_client;
pub mod tool;

pub use agent::{Agent, AgentBuilder, AgentConfig, AgentStage};
pub use error::Error;
pub use model_client::ModelClient;

/// Re-exports of [`comedian_model`] crate.
pub mod model {
    pub use comedian_model::*;
}
