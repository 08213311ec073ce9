//! URL resolvers for tags and steps.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("Invalid pattern for resolver '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown URL resolver '{0}'")]
    Unknown(String),
}

/// Maps a tag or step text to a URL.
pub trait UrlResolver: Send + Sync {
    /// Return the URL for `text`, or `None` to render it as plain text.
    fn resolve(&self, text: &str) -> Option<String>;
}

impl<F> UrlResolver for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn resolve(&self, text: &str) -> Option<String> {
        self(text)
    }
}

/// Resolver driven by a regular expression and a URL template.
///
/// The template may refer to capture groups as `$1`, `${1}` or `${name}`.
///
/// # Example
///
/// ```
/// use gherkindoc_render::{TemplateResolver, UrlResolver};
///
/// let jira = TemplateResolver::new(
///     "jira",
///     r"^(PROJ-\d+)$",
///     "https://jira.example.com/browse/${1}",
/// )
/// .unwrap();
/// assert_eq!(
///     jira.resolve("PROJ-42").as_deref(),
///     Some("https://jira.example.com/browse/PROJ-42")
/// );
/// assert_eq!(jira.resolve("smoke"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    pattern: Regex,
    url: String,
}

impl TemplateResolver {
    pub fn new(name: &str, pattern: &str, url: &str) -> Result<Self, ResolverError> {
        let pattern = Regex::new(pattern).map_err(|source| ResolverError::InvalidPattern {
            name: name.to_owned(),
            source,
        })?;
        Ok(Self {
            pattern,
            url: url.to_owned(),
        })
    }
}

impl UrlResolver for TemplateResolver {
    fn resolve(&self, text: &str) -> Option<String> {
        let captures = self.pattern.captures(text)?;
        let mut url = String::new();
        captures.expand(&self.url, &mut url);
        (!url.is_empty()).then_some(url)
    }
}

/// Named resolvers available for selection from configuration.
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    resolvers: BTreeMap<String, Arc<dyn UrlResolver>>,
}

impl ResolverRegistry {
    /// Register `resolver` under `name`, replacing any previous one.
    pub fn register(&mut self, name: &str, resolver: Arc<dyn UrlResolver>) {
        self.resolvers.insert(name.to_owned(), resolver);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn UrlResolver>, ResolverError> {
        self.resolvers
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| ResolverError::Unknown(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
