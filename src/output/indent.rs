//! Indented list formatter

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::utils::entry_label;

/// Formats each node on its own line, indented by its stored depth.
pub struct IndentFormatter {
    config: OutputConfig,
}

impl IndentFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.format_node(node, &mut output);
        output
    }

    fn format_node(&self, node: &TreeNode, output: &mut String) {
        output.push_str(&" ".repeat(node.depth * self.config.indent_width));
        output.push_str(&entry_label(node, self.config.use_icons));
        output.push('\n');

        for child in &node.children {
            self.format_node(child, output);
        }
    }
}
