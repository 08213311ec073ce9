//! Decoration of background steps folded into scenarios.

use std::fmt;
use std::sync::Arc;

const PLACEHOLDER: &str = "{}";

#[derive(Debug, thiserror::Error)]
pub enum DecorationError {
    #[error("Step format '{template}' must contain exactly one '{{}}' placeholder, found {found}")]
    PlaceholderCount { template: String, found: usize },
}

/// How an integrated background step is wrapped before it is written.
#[derive(Clone, Default)]
pub enum StepDecoration {
    /// Written unchanged.
    #[default]
    Plain,
    /// Surrounded by literal text.
    Template { prefix: String, suffix: String },
    /// Arbitrary transformation supplied by the embedding program.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl StepDecoration {
    /// Parse a format such as `*{}*` into a decoration.
    pub fn from_template(template: &str) -> Result<Self, DecorationError> {
        let found = template.matches(PLACEHOLDER).count();
        let Some((prefix, suffix)) = template.split_once(PLACEHOLDER).filter(|_| found == 1) else {
            return Err(DecorationError::PlaceholderCount {
                template: template.to_owned(),
                found,
            });
        };
        if prefix.is_empty() && suffix.is_empty() {
            return Ok(Self::Plain);
        }
        Ok(Self::Template {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
        })
    }

    #[must_use]
    pub fn apply(&self, step: &str) -> String {
        match self {
            Self::Plain => step.to_owned(),
            Self::Template { prefix, suffix } => format!("{prefix}{step}{suffix}"),
            Self::Custom(decorate) => decorate(step),
        }
    }
}

impl fmt::Debug for StepDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("Plain"),
            Self::Template { prefix, suffix } => f
                .debug_struct("Template")
                .field("prefix", prefix)
                .field("suffix", suffix)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
