//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the callable `fetch`, `search` and `translate` tools
//! - **prompts**: prompt templates served to clients

pub mod prompts;
pub mod tools;
