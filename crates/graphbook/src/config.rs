//! Configuration types for Graphbook.
//!
//! This module provides configuration structures that control how diagrams
//! are rendered and which extra diagrams are registered. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render settings and custom diagrams.
//! - [`RenderConfig`] - Default [`LayoutEngine`] and [`OutputFormat`] for resolved diagrams.
//!
//! # Example
//!
//! ```
//! # use graphbook::config::AppConfig;
//! # use graphbook::OutputFormat;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.render().format(), OutputFormat::Svg);
//! assert!(config.diagrams().is_empty());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{LayoutEngine, OutputFormat};

/// Top-level configuration combining render settings and custom diagrams.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Extra diagrams, keyed by name, registered on top of the built-in catalog.
    #[serde(default)]
    diagrams: IndexMap<String, String>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render settings and diagrams.
    ///
    /// # Arguments
    ///
    /// * `render` - Default render options.
    /// * `diagrams` - Custom diagrams. A name that matches a built-in entry replaces it.
    pub fn new(render: RenderConfig, diagrams: IndexMap<String, String>) -> Self {
        Self { render, diagrams }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the custom diagrams in definition order.
    pub fn diagrams(&self) -> &IndexMap<String, String> {
        &self.diagrams
    }
}

/// Default render options applied to every resolved diagram.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct RenderConfig {
    /// Default [`LayoutEngine`].
    #[serde(default)]
    engine: LayoutEngine,

    /// Default [`OutputFormat`].
    #[serde(default)]
    format: OutputFormat,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(engine: LayoutEngine, format: OutputFormat) -> Self {
        Self { engine, format }
    }

    /// Returns the default [`LayoutEngine`].
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }

    /// Returns the default [`OutputFormat`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
