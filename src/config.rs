//! Settings file support
//!
//! A TOML file may supply any of the command-line settings. Every key is
//! optional; values given on the command line take precedence.
//!
//! ```toml
//! dir = "src"
//! format = "md"
//! max_depth = 2
//! exclude = "target/, .log"
//! hide_hidden = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub dir: Option<PathBuf>,
    pub format: Option<String>,
    /// Zero or negative means unlimited
    pub max_depth: Option<i64>,
    pub exclude: Option<String>,
    pub hide_hidden: Option<bool>,
    pub dirs_only: Option<bool>,
    pub use_gitignore: Option<bool>,
    pub icons: Option<bool>,
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_full_settings() {
        let content = r#"
            dir = "src"
            format = "mermaid"
            max_depth = -1
            exclude = "target/, .log"
            hide_hidden = true
            dirs_only = false
            use_gitignore = true
            icons = true
            output = "out/tree.md"
        "#;
        let settings = Settings::parse(content, Path::new("treex.toml")).unwrap();
        assert_eq!(settings.dir, Some(PathBuf::from("src")));
        assert_eq!(settings.format.as_deref(), Some("mermaid"));
        assert_eq!(settings.max_depth, Some(-1));
        assert_eq!(settings.exclude.as_deref(), Some("target/, .log"));
        assert_eq!(settings.hide_hidden, Some(true));
        assert_eq!(settings.dirs_only, Some(false));
        assert_eq!(settings.use_gitignore, Some(true));
        assert_eq!(settings.icons, Some(true));
        assert_eq!(settings.output, Some(PathBuf::from("out/tree.md")));
    }

    #[test]
    fn test_empty_settings() {
        let settings = Settings::parse("", Path::new("treex.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::parse("colour = true", Path::new("treex.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("treex.toml");
        fs::write(&path, "format = \"md\"\nmax_depth = 3\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.format.as_deref(), Some("md"));
        assert_eq!(settings.max_depth, Some(3));
    }
}
