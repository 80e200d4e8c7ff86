//! Exclusion rules for tree walking

use std::fs;
use std::path::Path;

use super::utils::match_pattern;

const GITIGNORE_FILE: &str = ".gitignore";

/// Exclusion rule set built from a comma-separated rule string and,
/// optionally, a `.gitignore` file.
///
/// Rules come in three kinds:
/// - directory names (`node_modules/`), matched against directory names
/// - suffixes (`.log`), matched against file names
/// - generic patterns (`temp*`), matched against both the name and the
///   slash-joined relative path of any entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    dir_names: Vec<String>,
    suffixes: Vec<String>,
    patterns: Vec<String>,
    gitignore: bool,
}

impl Filter {
    /// Build a filter from `rules`, merging `.gitignore` from `gitignore_dir`
    /// when given. A missing `.gitignore` adds no rules.
    pub fn new(rules: &str, gitignore_dir: Option<&Path>) -> Self {
        let mut filter = Self::from_rules(rules);
        if let Some(dir) = gitignore_dir {
            filter.load_gitignore(dir);
        }
        filter
    }

    /// Build a filter from a comma-separated rule string only.
    pub fn from_rules(rules: &str) -> Self {
        let mut filter = Self::default();
        if rules.is_empty() {
            return filter;
        }

        for rule in rules.split(',').map(str::trim) {
            if let Some(dir) = rule.strip_suffix('/') {
                filter.dir_names.push(dir.to_string());
            } else if rule.starts_with('.') {
                filter.suffixes.push(rule.to_string());
            } else {
                filter.patterns.push(rule.to_string());
            }
        }

        filter
    }

    fn load_gitignore(&mut self, dir: &Path) {
        let path = dir.join(GITIGNORE_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => self.parse_gitignore(&content),
            Err(e) => log::debug!("no rules loaded from {}: {}", path.display(), e),
        }
    }

    /// Merge `.gitignore`-style lines into this filter.
    ///
    /// Blank lines and `#` comments are skipped. `dir/` becomes a directory
    /// rule, `*.ext` a suffix rule, anything else a generic pattern.
    pub fn parse_gitignore(&mut self, content: &str) {
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(dir) = line.strip_suffix('/') {
                self.dir_names.push(dir.to_string());
            } else if line.starts_with("*.") {
                self.suffixes.push(line[1..].to_string());
            } else {
                self.patterns.push(line.to_string());
            }
        }
        self.gitignore = true;
    }

    /// Check whether an entry should be left out of the tree.
    pub fn should_exclude(&self, name: &str, is_dir: bool, relative_path: &str) -> bool {
        if is_dir {
            for dir in &self.dir_names {
                if match_pattern(name, dir) {
                    return true;
                }
            }
        } else {
            for suffix in &self.suffixes {
                if name.ends_with(suffix.as_str()) {
                    return true;
                }
            }
        }

        for pattern in &self.patterns {
            if match_pattern(relative_path, pattern) || match_pattern(name, pattern) {
                return true;
            }
        }
        false
    }

    /// Whether `.gitignore` rules were merged in.
    pub fn uses_gitignore(&self) -> bool {
        self.gitignore
    }

    pub fn is_empty(&self) -> bool {
        self.dir_names.is_empty() && self.suffixes.is_empty() && self.patterns.is_empty()
    }

    pub fn dir_names(&self) -> &[String] {
        &self.dir_names
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
