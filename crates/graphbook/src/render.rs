//! Rendering options forwarded to Graphviz.

use std::{fmt, str::FromStr};

use graphviz_rust::cmd::{CommandArg, Format, Layout};
use serde::Deserialize;

use crate::GraphbookError;

/// Graphviz layout engine used to position a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEngine {
    /// Hierarchical layout for directed graphs.
    #[default]
    Dot,
    /// Spring model layout.
    Neato,
    /// Force-directed placement.
    Fdp,
    /// Multiscale force-directed placement for large graphs.
    Sfdp,
    /// Circular layout.
    Circo,
    /// Radial layout.
    Twopi,
}

impl LayoutEngine {
    /// All supported engines.
    pub const ALL: [LayoutEngine; 6] = [
        Self::Dot,
        Self::Neato,
        Self::Fdp,
        Self::Sfdp,
        Self::Circo,
        Self::Twopi,
    ];

    /// Returns the engine name as Graphviz spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Neato => "neato",
            Self::Fdp => "fdp",
            Self::Sfdp => "sfdp",
            Self::Circo => "circo",
            Self::Twopi => "twopi",
        }
    }

    pub(crate) fn to_arg(self) -> CommandArg {
        let layout = match self {
            Self::Dot => Layout::Dot,
            Self::Neato => Layout::Neato,
            Self::Fdp => Layout::Fdp,
            Self::Sfdp => Layout::Sfdp,
            Self::Circo => Layout::Circo,
            Self::Twopi => Layout::Twopi,
        };
        CommandArg::Layout(layout)
    }
}

impl fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutEngine {
    type Err = GraphbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GraphbookError::Config(format!("unknown layout engine `{s}`")))
    }
}

/// Output format produced by Graphviz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Scalable vector graphics.
    #[default]
    Svg,
    /// Portable network graphics.
    Png,
    /// Portable document format.
    Pdf,
    /// JPEG image.
    #[serde(alias = "jpg")]
    Jpeg,
    /// Graphviz JSON with layout information.
    Json,
    /// Plain text layout description.
    Plain,
    /// DOT with layout attributes added.
    Dot,
}

impl OutputFormat {
    /// All supported formats.
    pub const ALL: [OutputFormat; 7] = [
        Self::Svg,
        Self::Png,
        Self::Pdf,
        Self::Jpeg,
        Self::Json,
        Self::Plain,
        Self::Dot,
    ];

    /// Returns the format name as Graphviz spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Jpeg => "jpeg",
            Self::Json => "json",
            Self::Plain => "plain",
            Self::Dot => "dot",
        }
    }

    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Plain => "txt",
            Self::Dot => "gv",
            other => other.as_str(),
        }
    }

    /// Returns `true` if the output is text rather than binary image data.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Svg | Self::Json | Self::Plain | Self::Dot)
    }

    pub(crate) fn to_arg(self) -> CommandArg {
        let format = match self {
            Self::Svg => Format::Svg,
            Self::Png => Format::Png,
            Self::Pdf => Format::Pdf,
            Self::Jpeg => Format::Jpeg,
            Self::Json => Format::Json,
            Self::Plain => Format::Plain,
            Self::Dot => Format::Dot,
        };
        CommandArg::Format(format)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GraphbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("jpg") {
            return Ok(Self::Jpeg);
        }
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GraphbookError::Config(format!("unknown output format `{s}`")))
    }
}
