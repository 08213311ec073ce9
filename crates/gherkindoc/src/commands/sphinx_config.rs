//! `gherkindoc sphinx-config` command implementation.

use std::io::Write;

use clap::Args;

use crate::error::CliError;

const SAMPLE_CONF: &str = include_str!("../../templates/sample-conf.py");

/// Arguments for the sphinx-config command.
#[derive(Args)]
pub(crate) struct SphinxConfigArgs {
    /// Name of the project.
    project: String,

    /// Author of the project.
    author: String,

    /// Version of the project, if any.
    #[arg(long, default_value = "")]
    project_version: String,

    /// Release of the project, if any.
    #[arg(long, default_value = "")]
    release: String,
}

impl SphinxConfigArgs {
    /// Print the sample `conf.py` to stdout.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.render().as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn render(&self) -> String {
        [
            ("%%PROJECT%%", &self.project),
            ("%%AUTHOR%%", &self.author),
            ("%%VERSION%%", &self.project_version),
            ("%%RELEASE%%", &self.release),
        ]
        .into_iter()
        .fold(SAMPLE_CONF.to_owned(), |conf, (placeholder, value)| {
            conf.replace(placeholder, value)
        })
    }
}
