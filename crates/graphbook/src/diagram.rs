//! The renderable graph returned by resolution.
//!
//! A [`Diagram`] owns resolved DOT text plus the options used to render it.
//! Nothing is parsed when a diagram is created. The DOT parser and the
//! Graphviz executable only run when the diagram is parsed, rendered, or
//! displayed.

use std::{
    ffi::OsString,
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use dot_structures::Graph;
use graphviz_rust::cmd::{CommandArg, Format};
use log::{debug, info, warn};

use graphbook_core::{DiagramDescription, Resolution, Resolved};

use crate::{GraphbookError, LayoutEngine, OutputFormat};

/// A resolved DOT description that can be rendered by Graphviz.
///
/// # Examples
///
/// ```rust,no_run
/// let diagram = graphbook::resolve("recurrent");
///
/// assert_eq!(diagram.name(), Some("recurrent"));
/// let svg = diagram.render_svg().expect("Graphviz should be installed");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    source: DiagramDescription,
    resolution: Resolution,
    engine: LayoutEngine,
    format: OutputFormat,
}

impl Diagram {
    /// Wraps DOT text that did not come from a registry.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: DiagramDescription::from(source.into()),
            resolution: Resolution::Literal,
            engine: LayoutEngine::default(),
            format: OutputFormat::default(),
        }
    }

    /// Wraps the outcome of a registry lookup.
    pub fn from_resolved(resolved: Resolved<'_>) -> Self {
        Self {
            source: resolved.to_description(),
            resolution: resolved.resolution(),
            engine: LayoutEngine::default(),
            format: OutputFormat::default(),
        }
    }

    /// Sets the layout engine.
    pub fn with_engine(mut self, engine: LayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the default output format used by [`Diagram::render`] and [`Diagram::render_to`].
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the DOT text.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Returns how the DOT text was obtained.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Returns the registered name, or `None` for literal DOT.
    pub fn name(&self) -> Option<&str> {
        self.resolution.name().map(|name| name.as_str())
    }

    /// Returns the layout engine.
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Returns the default output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Parses the DOT text into a graph.
    ///
    /// The in-process parser covers a subset of DOT. Anonymous subgraphs such
    /// as `{ rank = same; a; b }` are rejected even though Graphviz renders
    /// them, so a failure here does not prove the text is invalid. Use
    /// [`Diagram::validate`] to ask Graphviz itself.
    ///
    /// # Errors
    ///
    /// Returns [`GraphbookError::Syntax`] if the parser does not accept the text.
    pub fn parse(&self) -> Result<Graph, GraphbookError> {
        graphviz_rust::parse(self.source())
            .map_err(|message| GraphbookError::new_syntax_error(message, self.source()))
    }

    /// Runs Graphviz and returns the raw output in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphbookError::Render`] if Graphviz is missing or rejects the
    /// DOT text.
    pub fn pipe(&self, format: OutputFormat) -> Result<Vec<u8>, GraphbookError> {
        debug!(
            name = self.name().unwrap_or("<literal>"),
            engine = self.engine.as_str(),
            format = format.as_str();
            "Running Graphviz"
        );

        let output = graphviz_rust::exec_dot(
            self.source().to_string(),
            vec![self.engine.to_arg(), format.to_arg()],
        )
        .map_err(GraphbookError::from_graphviz)?;

        debug!(bytes = output.len(); "Graphviz finished");
        Ok(output)
    }

    /// Checks that Graphviz accepts the DOT text without producing an image.
    ///
    /// Graphviz lays the diagram out with the configured engine and emits
    /// canonical DOT, which is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`GraphbookError::Syntax`] if Graphviz rejects the text, or
    /// [`GraphbookError::Render`] if the executable is missing.
    pub fn validate(&self) -> Result<(), GraphbookError> {
        graphviz_rust::exec_dot(
            self.source().to_string(),
            vec![self.engine.to_arg(), CommandArg::Format(Format::Canon)],
        )
        .map_err(|err| GraphbookError::from_validation(err, self.source()))?;

        debug!(name = self.name().unwrap_or("<literal>"); "Graphviz accepted diagram");
        Ok(())
    }

    /// Renders in the diagram's default format.
    ///
    /// # Errors
    ///
    /// See [`Diagram::pipe`].
    pub fn render(&self) -> Result<Vec<u8>, GraphbookError> {
        self.pipe(self.format)
    }

    /// Renders to an SVG string.
    ///
    /// # Errors
    ///
    /// See [`Diagram::pipe`].
    pub fn render_svg(&self) -> Result<String, GraphbookError> {
        let bytes = self.pipe(OutputFormat::Svg)?;
        String::from_utf8(bytes)
            .map_err(|err| GraphbookError::Render(format!("SVG output is not UTF-8: {err}")))
    }

    /// Renders in the default format and writes the result to `path`.
    ///
    /// Unless `path` already ends in the extension of a known output format,
    /// the format's extension is appended, so `v1.2` becomes `v1.2.svg`.
    /// Returns the path that was written.
    ///
    /// # Errors
    ///
    /// Returns a render error from [`Diagram::pipe`] or an I/O error from
    /// writing the file.
    pub fn render_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, GraphbookError> {
        let path = output_path(path.as_ref(), self.format);
        let bytes = self.render()?;
        fs::write(&path, bytes)?;

        info!(path = path.display().to_string(), format = self.format.as_str(); "Diagram rendered");
        Ok(path)
    }

    /// Writes the DOT text itself to `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GraphbookError> {
        let path = path.as_ref();
        fs::write(path, self.source())?;

        info!(path = path.display().to_string(); "Diagram source saved");
        Ok(())
    }

    /// Displays the diagram inline in an evcxr notebook or REPL.
    ///
    /// Renders SVG through Graphviz. If rendering fails, the error and the DOT
    /// text are shown as plain text instead.
    pub fn evcxr_display(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.write_display(&mut out) {
            warn!(err:err; "Failed to write notebook display output");
        }
    }

    fn write_display(&self, out: &mut impl Write) -> io::Result<()> {
        match self.render_svg() {
            Ok(svg) => write_content(out, "image/svg+xml", &svg),
            Err(err) => {
                warn!(err:err; "Falling back to plain text display");
                write_content(out, "text/plain", &format!("{err}\n\n{}", self.source()))
            }
        }
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

/// Writes one evcxr content block.
fn write_content(out: &mut impl Write, mime: &str, body: &str) -> io::Result<()> {
    writeln!(out, "EVCXR_BEGIN_CONTENT {mime}")?;
    writeln!(out, "{body}")?;
    writeln!(out, "EVCXR_END_CONTENT")
}

fn output_path(path: &Path, format: OutputFormat) -> PathBuf {
    let known = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            OutputFormat::ALL
                .iter()
                .any(|format| format.extension().eq_ignore_ascii_case(ext))
        });
    if known {
        return path.to_path_buf();
    }

    let mut file = OsString::from(path.as_os_str());
    file.push(".");
    file.push(format.extension());
    PathBuf::from(file)
}
