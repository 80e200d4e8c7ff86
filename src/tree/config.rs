//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Deepest level to enumerate; `None` means unlimited.
    /// The root directory is level 1.
    pub max_depth: Option<usize>,
    /// Skip every entry whose name starts with `.`
    pub hide_hidden: bool,
    pub dirs_only: bool,
}

impl WalkerConfig {
    /// Convert a signed depth limit where zero or negative means unlimited.
    pub fn max_depth_from(limit: i64) -> Option<usize> {
        usize::try_from(limit).ok().filter(|&n| n > 0)
    }

    pub fn with_max_depth(mut self, limit: i64) -> Self {
        self.max_depth = Self::max_depth_from(limit);
        self
    }

    /// True when a directory at `depth` lies past the limit and must not be read.
    pub fn is_truncated(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}
