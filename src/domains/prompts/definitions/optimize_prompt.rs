//! Prompt optimization prompt.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Wraps a user's prompt in guidance for making it more effective.
pub struct OptimizePrompt;

impl PromptDefinition for OptimizePrompt {
    const NAME: &'static str = "optimize_prompt";
    const DESCRIPTION: &'static str =
        "Optimize and improve user prompts for better AI interactions";

    fn template() -> &'static str {
        "I'll help you optimize this prompt for better AI interactions:

Original prompt: {{original_prompt}}

Optimized version:
1. Be specific and clear about what you want
2. Include relevant context and constraints
3. Specify the desired format for the response
4. Use examples when helpful
5. Break complex requests into steps

Here's your improved prompt:

{{original_prompt}}

Please provide a detailed response with specific examples and clear explanations."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "original_prompt".to_string(),
            title: None,
            description: Some("The original prompt to optimize".to_string()),
            required: Some(true),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_prompt_metadata() {
        assert_eq!(OptimizePrompt::NAME, "optimize_prompt");
        assert_eq!(OptimizePrompt::template().matches("{{original_prompt}}").count(), 2);

        let args = OptimizePrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "original_prompt");
        assert_eq!(args[0].required, Some(true));
    }
}
