//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod sphinx_config;

pub(crate) use build::BuildArgs;
pub(crate) use sphinx_config::SphinxConfigArgs;
