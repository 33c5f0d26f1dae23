//! Generation Pipeline Module
//!
//! The response-materialization pipeline: prompt construction, upstream
//! completion, section parsing, and on-disk project layout.
//!
//! # Stages
//! - Prompt Builder: form fields -> generation query (pure)
//! - Completion Client: query -> raw model text (upstream boundary)
//! - Response Parser: raw text -> `{html, css, js}` file set (pure, total)
//! - Project Materializer: file set -> unique project directory

mod client;
mod materializer;
mod parser;
mod prompt;


// Re-export public types
pub use client::{CompletionClient, OpenAiClient};
pub use materializer::{Project, ProjectMaterializer};
pub use parser::{clean_code, parse_response, FileSet};
pub use prompt::{build_prompt, SYSTEM_INSTRUCTION};
