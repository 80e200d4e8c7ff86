//! treex - render a directory hierarchy as a tree, indented list,
//! markdown list or mermaid graph

pub mod config;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use output::{OutputConfig, OutputFormat};
pub use tree::{Filter, TreeNode, TreeWalker, WalkerConfig};
