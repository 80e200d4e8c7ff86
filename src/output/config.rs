//! Output configuration types

const DEFAULT_INDENT_WIDTH: usize = 4;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Prefix each entry with a file-type symbol
    pub use_icons: bool,
    /// Spaces per depth level in the indented list
    pub indent_width: usize,
}

impl OutputConfig {
    pub fn with_icons(mut self, use_icons: bool) -> Self {
        self.use_icons = use_icons;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_icons: false,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}
