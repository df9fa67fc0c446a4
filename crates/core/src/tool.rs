//! Tool registration.
//!
//! Tools are opaque capability handles. An agent keeps the tools it has
//! been given, but nothing calls them yet.

/// A capability that can be registered to an agent.
pub trait Tool: Send + Sync + 'static {
    /// Returns the name of the tool.
    fn name(&self) -> &str;

    /// Returns the description of the tool.
    fn description(&self) -> &str {
        ""
    }
}
