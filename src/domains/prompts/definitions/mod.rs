//! Prompt definitions module.
//!
//! Each prompt lives in its own file and implements `PromptDefinition`.

use rmcp::model::PromptArgument;

pub mod optimize_prompt;

pub use optimize_prompt::OptimizePrompt;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}
