//! Graphbook - Named Graphviz diagrams that resolve to renderable graphs.
//!
//! A fixed catalog maps diagram names to hand-authored DOT descriptions.
//! [`resolve`] turns a name into a [`Diagram`]; anything that is not a
//! registered name is treated as DOT text itself. Rendering goes through
//! Graphviz and only happens when asked for.

pub mod config;

mod diagram;
mod error;
mod render;

pub use graphbook_core::{
    Collection, DiagramDescription, DiagramName, Registry, RegistryBuilder, Resolution,
};

pub use diagram::Diagram;
pub use error::GraphbookError;
pub use render::{LayoutEngine, OutputFormat};

use std::borrow::Cow;

use log::{debug, info, warn};

use config::{AppConfig, RenderConfig};

/// Resolves `input` against the built-in catalog.
///
/// If `input` is a registered name the registered DOT text is used, otherwise
/// `input` itself is. This never fails; malformed DOT is reported only when
/// the returned diagram is parsed, validated or rendered.
///
/// # Examples
///
/// ```
/// let known = graphbook::resolve("const-op");
/// assert_eq!(known.name(), Some("const-op"));
///
/// let literal = graphbook::resolve("digraph g { a -> b; }");
/// assert_eq!(literal.source(), "digraph g { a -> b; }");
/// assert_eq!(literal.name(), None);
/// ```
pub fn resolve(input: &str) -> Diagram {
    Diagram::from_resolved(Registry::builtin().resolve(input))
}

/// Resolver for Graphbook diagrams.
///
/// This pairs a registry with default render options. The default resolver
/// uses the built-in catalog; one built from an [`AppConfig`] also registers
/// the configured custom diagrams.
///
/// # Examples
///
/// ```rust
/// use graphbook::{Resolver, config::AppConfig};
///
/// let resolver = Resolver::new(AppConfig::default());
/// let diagram = resolver.resolve("LSTM");
/// assert_eq!(diagram.name(), Some("LSTM"));
///
/// // Or use the built-in catalog directly
/// let resolver = Resolver::default();
/// assert!(resolver.registry().contains("unrolled"));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Cow<'static, Registry>,
    render: RenderConfig,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            registry: Cow::Borrowed(Registry::builtin()),
            render: RenderConfig::default(),
        }
    }
}

impl Resolver {
    /// Create a new resolver with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Render defaults and custom diagrams to register after the built-in catalog
    pub fn new(config: AppConfig) -> Self {
        let registry = if config.diagrams().is_empty() {
            Cow::Borrowed(Registry::builtin())
        } else {
            info!(custom = config.diagrams().len(); "Registering custom diagrams");
            let registry = RegistryBuilder::from_catalog()
                .extend(config.diagrams().clone())
                .build();
            Cow::Owned(registry)
        };

        Self {
            registry,
            render: *config.render(),
        }
    }

    /// Returns the registry this resolver looks names up in.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the default render options.
    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    /// Resolves `input` to a diagram carrying this resolver's render defaults.
    ///
    /// See [`resolve`] for the lookup rules.
    pub fn resolve(&self, input: &str) -> Diagram {
        let resolved = self.registry.resolve(input);
        debug!(registered = resolved.is_registered(); "Resolved diagram input");

        Diagram::from_resolved(resolved)
            .with_engine(self.render.engine())
            .with_format(self.render.format())
    }

    /// Validates every registered diagram with Graphviz and returns the ones
    /// it rejects.
    ///
    /// Resolution itself never validates; this is the opt-in eager check. If
    /// the Graphviz executable is missing, every entry fails with a
    /// [`GraphbookError::Render`] error.
    pub fn check_all(&self) -> Vec<(DiagramName, GraphbookError)> {
        let failures: Vec<_> = self
            .registry
            .iter()
            .filter_map(|(name, _)| {
                self.resolve(name.as_str())
                    .validate()
                    .err()
                    .map(|err| (name.clone(), err))
            })
            .collect();

        if failures.is_empty() {
            info!(checked = self.registry.len(); "All registered diagrams validated");
        } else {
            warn!(failed = failures.len(), checked = self.registry.len(); "Some registered diagrams failed validation");
        }
        failures
    }
}
