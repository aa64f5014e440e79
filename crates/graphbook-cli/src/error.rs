//! Error type returned by the CLI commands.

use std::io;

use thiserror::Error;

use graphbook::{DiagramName, GraphbookError};

/// Errors produced while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Graphbook(#[from] GraphbookError),

    #[error("{} of {checked} registered diagram(s) failed validation", .failures.len())]
    CheckFailed {
        failures: Vec<(DiagramName, GraphbookError)>,
        checked: usize,
    },
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Graphbook(GraphbookError::Io(err))
    }
}
