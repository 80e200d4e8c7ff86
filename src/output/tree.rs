//! Box-drawing tree formatter
//!
//! This module provides `TreeFormatter` which formats a complete `TreeNode`
//! tree into the conventional `├──`/`└──` layout.

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::utils::{child_prefix, entry_label};

/// Formatter for box-drawing tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.format_node(node, &mut output, "", true);
        output
    }

    fn format_node(&self, node: &TreeNode, output: &mut String, prefix: &str, is_last: bool) {
        // Only the root sits at depth 0 and gets no connector
        let is_root = node.depth == 0;

        output.push_str(prefix);
        if !is_root {
            output.push_str(if is_last { "└── " } else { "├── " });
        }
        output.push_str(&entry_label(node, self.config.use_icons));
        output.push('\n');

        let new_prefix = if is_root {
            prefix.to_string()
        } else {
            child_prefix(prefix, is_last)
        };

        for (i, child) in node.children.iter().enumerate() {
            let child_is_last = i == node.children.len() - 1;
            self.format_node(child, output, &new_prefix, child_is_last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TreeNode {
        TreeNode::dir(
            "root",
            0,
            vec![
                TreeNode::dir("dir1", 1, vec![TreeNode::file("file2.go", 2)]),
                TreeNode::file("file1.txt", 1),
            ],
        )
    }

    #[test]
    fn test_format_output() {
        let output = TreeFormatter::new(OutputConfig::default()).format(&sample_tree());
        assert_eq!(
            output,
            "root/\n├── dir1/\n│   └── file2.go\n└── file1.txt\n"
        );
    }

    #[test]
    fn test_root_has_no_connector() {
        let output = TreeFormatter::new(OutputConfig::default()).format(&sample_tree());
        let first = output.lines().next().unwrap();
        assert_eq!(first, "root/");
    }

    #[test]
    fn test_last_child_gets_blank_continuation() {
        let tree = TreeNode::dir(
            "root",
            0,
            vec![
                TreeNode::file("a.txt", 1),
                TreeNode::dir(
                    "last",
                    1,
                    vec![
                        TreeNode::dir("inner", 2, vec![TreeNode::file("x.rs", 3)]),
                        TreeNode::file("y.rs", 2),
                    ],
                ),
            ],
        );
        let output = TreeFormatter::new(OutputConfig::default()).format(&tree);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "root/",
                "├── a.txt",
                "└── last/",
                "    ├── inner/",
                "    │   └── x.rs",
                "    └── y.rs",
            ]
        );
    }

    #[test]
    fn test_icons() {
        let output =
            TreeFormatter::new(OutputConfig::default().with_icons(true)).format(&sample_tree());
        assert!(output.contains("📁 root/"));
        assert!(output.contains("├── 📁 dir1/"));
        assert!(output.contains("│   └── 🔹 file2.go"));
        assert!(output.contains("└── 📄 file1.txt"));
    }

    #[test]
    fn test_empty_directory() {
        let tree = TreeNode::dir("empty", 0, vec![]);
        let output = TreeFormatter::new(OutputConfig::default()).format(&tree);
        assert_eq!(output, "empty/\n");
    }
}
