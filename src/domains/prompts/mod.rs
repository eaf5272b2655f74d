//! Prompts domain module.
//!
//! Prompts are template messages that clients fetch by name and fill in
//! with arguments.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and rendering
//! - `templates.rs` - `{{variable}}` substitution

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::get_all_prompts;
pub use service::PromptService;
pub use templates::PromptTemplate;
