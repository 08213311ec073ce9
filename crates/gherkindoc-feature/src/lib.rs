//! Feature document model for gherkindoc.
//!
//! Parsed `.feature` files are converted once into the plain structs of
//! [`model`], independent of which [`FeatureParser`] produced them.
//! [`TagFilter`] selects the scenarios and examples tables that should be
//! documented for a given include/exclude tag selection.

mod adapter;
mod filter;
pub mod model;
mod parser;

pub use adapter::{GherkinParser, PytestBddParser};
pub use filter::TagFilter;
pub use model::{Background, Examples, Feature, Scenario, Statement, Step, Table};
pub use parser::{FeatureParser, PARSER_NAMES, ParseError, parser_by_name};
