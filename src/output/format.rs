//! Output format selection

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::indent::IndentFormatter;
use super::markdown::MarkdownFormatter;
use super::mermaid::MermaidFormatter;
use super::tree::TreeFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Tree,
    Indent,
    Markdown,
    Mermaid,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Tree,
        OutputFormat::Indent,
        OutputFormat::Markdown,
        OutputFormat::Mermaid,
    ];

    /// Name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Indent => "indent",
            OutputFormat::Markdown => "md",
            OutputFormat::Mermaid => "mermaid",
        }
    }

    /// Render `node` in this format.
    pub fn render(self, node: &TreeNode, config: &OutputConfig) -> String {
        match self {
            OutputFormat::Tree => TreeFormatter::new(config.clone()).format(node),
            OutputFormat::Indent => IndentFormatter::new(config.clone()).format(node),
            OutputFormat::Markdown => MarkdownFormatter::new(config.clone()).format(node),
            OutputFormat::Mermaid => MermaidFormatter::new().format(node),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
