//! In-memory tree representation

/// One filesystem entry in a built tree.
///
/// Files never have children. A directory with no children may also be a
/// truncated node emitted at the depth limit, standing in for a subtree
/// that was not read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub is_dir: bool,
    /// Nesting level used by the indented renderer. Directories store their
    /// enumeration level minus one; files store the level of the directory
    /// listing that produced them.
    pub depth: usize,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn dir(name: impl Into<String>, depth: usize, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            depth,
            children,
        }
    }

    pub fn file(name: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            depth,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Pre-order traversal returned by [`TreeNode::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a TreeNode {
    type Item = &'a TreeNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
