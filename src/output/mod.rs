//! Tree formatting and display
//!
//! This module provides formatters for rendering a built tree:
//! - Box-drawing tree
//! - Indented list
//! - Markdown list
//! - Mermaid graph
//!
//! All formatters are pure functions of the tree and never touch the
//! filesystem.

mod config;
mod format;
mod indent;
mod markdown;
mod mermaid;
mod tree;
mod utils;

pub mod icons;

pub use config::OutputConfig;
pub use format::OutputFormat;
pub use indent::IndentFormatter;
pub use markdown::MarkdownFormatter;
pub use mermaid::MermaidFormatter;
pub use tree::TreeFormatter;
pub use utils::entry_label;
