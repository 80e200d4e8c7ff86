//! Shared helpers for the renderers

use crate::tree::TreeNode;

use super::icons::icon_for;

/// Display label for a node: the name, a trailing `/` for directories, and
/// the file-type symbol in front when icons are enabled.
pub fn entry_label(node: &TreeNode, use_icons: bool) -> String {
    let mut label = String::new();
    if use_icons {
        label.push_str(icon_for(&node.name, node.is_dir));
        label.push(' ');
    }
    label.push_str(&node.name);
    if node.is_dir {
        label.push('/');
    }
    label
}

/// Prefix handed to the children of a node in the box-drawing tree.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}
