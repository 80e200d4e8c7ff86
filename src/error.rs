//! Error types for tree building and configuration

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building or rendering a tree.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory could not be listed. Aborts the whole build.
    #[error("cannot read directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown output format '{0}' (allowed: tree, indent, md, mermaid)")]
    UnknownFormat(String),

    #[error("failed to read config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file '{}'", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
