//! Source file classification.

use std::path::Path;

use glob::Pattern;

use crate::error::ScanError;

const FEATURE_SUFFIX: &str = ".feature";
const RST_SUFFIX: &str = ".rst";
const MARKDOWN_SUFFIX: &str = ".md";

/// Gherkin feature document.
pub fn is_feature_file(name: &str) -> bool {
    has_suffix(name, FEATURE_SUFFIX)
}

/// reStructuredText prose, inlined into the table of contents.
pub fn is_rst_file(name: &str) -> bool {
    has_suffix(name, RST_SUFFIX)
}

/// Markdown prose, copied and referenced with its extension.
pub fn is_markdown_file(name: &str) -> bool {
    has_suffix(name, MARKDOWN_SUFFIX)
}

/// Any file the tree builder knows how to process.
pub fn is_source_file(name: &str) -> bool {
    is_feature_file(name) || is_rst_file(name) || is_markdown_file(name)
}

pub(crate) fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

pub(crate) fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

fn has_suffix(name: &str, suffix: &str) -> bool {
    name.to_lowercase().ends_with(suffix)
}

/// Shell-style patterns for paths that must be left out.
///
/// Directories are matched on their full path, files on their name.
/// `*` also matches `/`.
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
    patterns: Vec<Pattern>,
}

impl ExcludePatterns {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ScanError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref()).map_err(|source| ScanError::InvalidPattern {
                    pattern: p.as_ref().to_owned(),
                    source,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn matches_path(&self, path: &Path) -> bool {
        self.patterns.iter().any(|p| p.matches_path(path))
    }
}
