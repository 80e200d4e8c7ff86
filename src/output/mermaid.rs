//! Mermaid graph output
//!
//! Nodes are numbered `N1`, `N2`, ... in pre-order. Each node declares its
//! label and every non-root node gets one edge from its parent.

use crate::tree::TreeNode;

const HEADER: &str = "graph TD";

/// Formatter for Mermaid flowchart output.
#[derive(Default)]
pub struct MermaidFormatter;

impl MermaidFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        output.push_str(HEADER);
        output.push('\n');
        self.format_node(node, None, 1, &mut output);
        output
    }

    fn format_node(
        &self,
        node: &TreeNode,
        parent_id: Option<usize>,
        id: usize,
        output: &mut String,
    ) {
        let slash = if node.is_dir { "/" } else { "" };
        output.push_str(&format!("    N{}[{}{}]\n", id, node.name, slash));
        if let Some(parent) = parent_id {
            output.push_str(&format!("    N{} --> N{}\n", parent, id));
        }

        let mut child_id = id + 1;
        for child in &node.children {
            self.format_node(child, Some(id), child_id, output);
            child_id += child.count();
        }
    }
}
