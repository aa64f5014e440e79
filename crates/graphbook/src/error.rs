//! Error types for Graphbook operations.
//!
//! This module provides the main error type [`GraphbookError`]. Resolving a
//! diagram never fails; these errors only appear once a diagram is parsed,
//! rendered, or written out.

use std::io;

use thiserror::Error;

/// The main error type for Graphbook operations.
///
/// # Diagnostic Variants
///
/// The `Syntax` variant keeps the DOT text that was rejected, so callers can
/// point at the offending line with [`GraphbookError::syntax_location`]. It is
/// produced both by the in-process DOT parser and by Graphviz itself.
#[derive(Debug, Error)]
pub enum GraphbookError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Syntax error: {message}")]
    Syntax { message: String, src: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GraphbookError {
    /// Create a new `Syntax` error with the associated DOT source.
    pub fn new_syntax_error(message: impl Into<String>, src: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
            src: src.into(),
        }
    }

    /// Create a `Render` error from a failed Graphviz invocation.
    pub(crate) fn from_graphviz(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => {
                Self::Render("Graphviz `dot` executable not found on PATH".to_string())
            }
            _ => Self::Render(err.to_string().trim().to_string()),
        }
    }

    /// Create an error from a Graphviz run that only validated the DOT text.
    ///
    /// A missing executable is a `Render` error. Any other failure means
    /// Graphviz rejected `src`, so it becomes a `Syntax` error carrying the
    /// diagnostic Graphviz printed.
    pub(crate) fn from_validation(err: io::Error, src: &str) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            return Self::from_graphviz(err);
        }

        let message = err.to_string();
        let message = message
            .lines()
            .find_map(|line| line.find("syntax error").map(|start| &line[start..]))
            .unwrap_or(message.trim());
        Self::new_syntax_error(message.trim(), src)
    }

    /// Returns the 1-based `(line, column)` a syntax error points at, if known.
    ///
    /// The DOT parser reports positions as ` --> line:column` in its message.
    /// Graphviz only reports `syntax error in line N`, which maps to column 1.
    pub fn syntax_location(&self) -> Option<(usize, usize)> {
        let Self::Syntax { message, .. } = self else {
            return None;
        };

        message.lines().find_map(|line| {
            if let Some(position) = line.trim_start().strip_prefix("-->") {
                let (line, column) = position.trim().split_once(':')?;
                return Some((line.parse().ok()?, column.parse().ok()?));
            }

            let (_, rest) = line.split_once("in line ")?;
            let digits = rest.split(|c: char| !c.is_ascii_digit()).next()?;
            Some((digits.parse().ok()?, 1))
        })
    }

    /// Returns the byte offset into the DOT source a syntax error points at, if known.
    pub fn syntax_offset(&self) -> Option<usize> {
        let Self::Syntax { src, .. } = self else {
            return None;
        };
        let (line, column) = self.syntax_location()?;

        let line_start: usize = src
            .split_inclusive('\n')
            .take(line.checked_sub(1)?)
            .map(str::len)
            .sum();
        let line_text = src.get(line_start..)?.lines().next().unwrap_or_default();
        let column_offset: usize = line_text
            .chars()
            .take(column.saturating_sub(1))
            .map(char::len_utf8)
            .sum();

        Some(line_start + column_offset)
    }
}
