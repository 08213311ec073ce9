//! Feature parser abstraction.

use std::path::{Path, PathBuf};

use crate::adapter::{GherkinParser, PytestBddParser};
use crate::model::Feature;

/// Names accepted by [`parser_by_name`].
pub const PARSER_NAMES: [&str; 2] = [GherkinParser::NAME, PytestBddParser::NAME];

/// Errors produced while reading feature documents.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file could not be read or is not valid Gherkin.
    #[error("Failed to parse {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    /// No parser is registered under the requested name.
    #[error("Unknown parser '{0}' (available: gherkin, pytest-bdd)")]
    UnknownParser(String),
}

/// Turns one source file into the common [`Feature`] model.
///
/// Implementations map their backend's quirks onto the model once, while
/// parsing, so consumers never need to know which backend was used.
pub trait FeatureParser: Send + Sync {
    /// Name used to select this parser from configuration.
    fn name(&self) -> &'static str;

    fn parse(&self, source: &Path) -> Result<Feature, ParseError>;
}

/// Look up a parser by its configuration name.
pub fn parser_by_name(name: &str) -> Result<Box<dyn FeatureParser>, ParseError> {
    match name {
        GherkinParser::NAME => Ok(Box::new(GherkinParser)),
        PytestBddParser::NAME => Ok(Box::new(PytestBddParser)),
        other => Err(ParseError::UnknownParser(other.to_owned())),
    }
}
