//! Jina AI tools.
//!
//! - `fetch`: read a web page through the Jina reader
//! - `search`: search the web through Jina search
//!
//! Both share one `JinaClient`, built at startup from configuration.

pub mod client;
pub mod fetch;
pub mod search;

pub use client::{JinaClient, JinaEndpoint};
pub use fetch::{FetchParams, FetchTool};
pub use search::{SearchParams, SearchTool};
