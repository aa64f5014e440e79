//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a registry check fails for several diagrams, each failure is rendered
//! independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use graphbook::GraphbookError;

use crate::CliError;

/// Adapter for a single DOT syntax error.
///
/// This adapter wraps a [`GraphbookError::Syntax`] and implements
/// [`MietteDiagnostic`] so the offending DOT source is shown with the reported
/// position highlighted.
pub struct SyntaxAdapter<'a> {
    /// The registered name, if the source came from the registry
    name: Option<&'a str>,
    /// The wrapped error
    err: &'a GraphbookError,
    /// Parser message
    message: &'a str,
    /// DOT source for displaying snippets
    src: &'a str,
}

impl<'a> SyntaxAdapter<'a> {
    /// Create a new syntax adapter, or `None` if `err` is not a syntax error.
    pub fn new(name: Option<&'a str>, err: &'a GraphbookError) -> Option<Self> {
        match err {
            GraphbookError::Syntax { message, src } => Some(Self {
                name,
                err,
                message: message.as_str(),
                src: src.as_str(),
            }),
            _ => None,
        }
    }

    /// The parser's own expectation line (`= expected ...`), if present.
    fn expectation(&self) -> Option<&'a str> {
        self.message
            .lines()
            .find_map(|line| line.trim_start().strip_prefix("= "))
    }
}

impl fmt::Debug for SyntaxAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxAdapter")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for SyntaxAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "invalid DOT syntax in `{name}`"),
            None => write!(f, "invalid DOT syntax"),
        }
    }
}

impl std::error::Error for SyntaxAdapter<'_> {}

impl MietteDiagnostic for SyntaxAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("graphbook::syntax"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self.expectation().unwrap_or(self.message);
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let offset = self.err.syntax_offset()?;
        let length = usize::from(offset < self.src.len());
        let span = SourceSpan::new(offset.into(), length);

        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("unexpected input".to_string()), span),
        )))
    }
}

/// Adapter for non-syntax [`GraphbookError`] variants.
///
/// This adapter handles errors that don't carry source information, such as
/// I/O errors, render errors, and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a GraphbookError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GraphbookError::Io(_) => "graphbook::io",
            GraphbookError::Syntax { .. } => "graphbook::syntax",
            GraphbookError::Render(_) => "graphbook::render",
            GraphbookError::Config(_) => "graphbook::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            GraphbookError::Render(_) => Some(Box::new(
                "make sure Graphviz is installed and the DOT source is valid",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a syntax diagnostic or a plain error, providing a
/// uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A DOT syntax error with source location information.
    Syntax(SyntaxAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl<'a> Reportable<'a> {
    fn new(name: Option<&'a str>, err: &'a GraphbookError) -> Self {
        match SyntaxAdapter::new(name, err) {
            Some(adapter) => Reportable::Syntax(adapter),
            None => Reportable::Error(ErrorAdapter(err)),
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Syntax(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Syntax(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Syntax(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Syntax(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Syntax(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Syntax(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// For [`CliError::CheckFailed`], this returns one [`Reportable`] for each
/// diagram that failed. For other errors, this returns a single [`Reportable`].
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Graphbook(err) => vec![Reportable::new(None, err)],
        CliError::CheckFailed { failures, .. } => failures
            .iter()
            .map(|(name, err)| Reportable::new(Some(name.as_str()), err))
            .collect(),
    }
}
