//! An abstraction layer over hosted completion services.
//!
//! This crate establishes the protocol between the agent and a completion
//! service: what a request looks like, what the service hands back, and how
//! plain text is pulled out of whatever envelope the service returned.
//!
//! Apart from text extraction, types in this crate don't define any
//! behavior. They are the constraints that provider implementors should
//! adhere to.

#![deny(missing_docs)]

mod error;
mod extract;
mod message;
mod provider;
mod request;
mod response;

pub use error::*;
pub use extract::extract_text;
pub use message::*;
pub use provider::*;
pub use request::*;
pub use response::*;
