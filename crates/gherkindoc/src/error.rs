//! CLI error types.

use gherkindoc_config::ConfigError;
use gherkindoc_feature::ParseError;
use gherkindoc_render::{DecorationError, ResolverError};
use gherkindoc_tree::{BuildError, ScanError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Resolver(#[from] ResolverError),

    #[error("{0}")]
    Decoration(#[from] DecorationError),

    #[error("{0}")]
    Validation(String),
}
