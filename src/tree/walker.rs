//! TreeWalker - builds the full tree in memory

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::config::WalkerConfig;
use super::filter::Filter;
use super::node::TreeNode;
use super::utils::{base_name, relative_path};

/// Tree walker that reads a directory hierarchy into a [`TreeNode`].
///
/// Any directory that cannot be listed aborts the walk; no partial tree
/// is returned.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: Filter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            filter: Filter::default(),
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Walk `root`. The root node is named after its path relative to
    /// `base`, which is normally the working directory.
    pub fn walk(&self, root: &Path, base: &Path) -> Result<TreeNode> {
        let base = base.to_string_lossy();
        self.walk_dir(root, 1, &base)
    }

    fn walk_dir(&self, path: &Path, depth: usize, base: &str) -> Result<TreeNode> {
        if self.config.is_truncated(depth) {
            log::debug!("depth limit reached at {}", path.display());
            return Ok(TreeNode::dir(base_name(path), depth - 1, Vec::new()));
        }

        log::trace!("reading {}", path.display());
        let mut entries = fs::read_dir(path)
            .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
            .map_err(|source| Error::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
        entries.sort_by_key(|entry| entry.file_name());

        let relative = relative_path(&path.to_string_lossy(), base);
        let node_name = if depth > 1 {
            base_name(path)
        } else {
            relative.clone()
        };

        let mut children = Vec::new();
        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();

            if self.config.hide_hidden && name.starts_with('.') {
                log::debug!("skipping hidden entry {}", name);
                continue;
            }

            let file_type = entry.file_type().map_err(|source| Error::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
            let is_dir = file_type.is_dir();

            let rel_path = if relative.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", relative, name)
            };

            if self.filter.should_exclude(&name, is_dir, &rel_path) {
                log::debug!("excluding {}", rel_path);
                continue;
            }

            if is_dir {
                children.push(self.walk_dir(&entry.path(), depth + 1, base)?);
            } else if !self.config.dirs_only {
                children.push(TreeNode::file(name, depth));
            }
        }

        Ok(TreeNode::dir(node_name, depth - 1, children))
    }
}
