//! Markdown output formatting
//!
//! This module provides `MarkdownFormatter` which outputs the tree as a
//! nested markdown list, suitable for documentation or LLM context.

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::utils::entry_label;

/// Markdown output formatter - outputs tree as nested markdown list.
///
/// Nesting follows the recursion level, not the depth stored on each node.
pub struct MarkdownFormatter {
    config: OutputConfig,
}

impl MarkdownFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.format_node(node, 0, &mut output);
        output
    }

    fn format_node(&self, node: &TreeNode, level: usize, output: &mut String) {
        output.push_str(&"  ".repeat(level));
        output.push_str("- ");
        output.push_str(&entry_label(node, self.config.use_icons));
        output.push('\n');

        for child in &node.children {
            self.format_node(child, level + 1, output);
        }
    }
}
