//! The diagram registry and its resolution policy.
//!
//! A [`Registry`] is built once through a [`RegistryBuilder`] and is never
//! mutated afterwards. Lookups go through [`Registry::resolve`], which either
//! finds a registered description or hands the input back as literal DOT.
//!
//! # Example
//!
//! ```
//! use graphbook_core::{Registry, Resolution};
//!
//! let registry = Registry::builtin();
//!
//! let known = registry.resolve("const-op");
//! assert!(known.is_registered());
//!
//! let literal = registry.resolve("digraph g { a -> b; }");
//! assert_eq!(literal.source(), "digraph g { a -> b; }");
//! assert_eq!(literal.resolution(), Resolution::Literal);
//! ```

use std::sync::OnceLock;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{Collection, DiagramDescription, DiagramName, catalog::CATALOG};

static BUILTIN: OnceLock<Registry> = OnceLock::new();

/// A registered description together with the collection it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    description: DiagramDescription,
    collection: Collection,
}

impl Entry {
    /// Returns the registered DOT text.
    pub fn description(&self) -> &DiagramDescription {
        &self.description
    }

    /// Returns the collection the entry was registered in.
    pub fn collection(&self) -> Collection {
        self.collection
    }
}

/// Which branch of the resolution policy produced a description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The input matched a registered name.
    Registered(DiagramName),

    /// The input was not a registered name and is used as DOT text itself.
    Literal,
}

impl Resolution {
    /// Returns the matched name, if any.
    pub fn name(&self) -> Option<&DiagramName> {
        match self {
            Self::Registered(name) => Some(name),
            Self::Literal => None,
        }
    }
}

/// The outcome of [`Registry::resolve`], borrowing from the registry or the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// The input named a registered diagram.
    Registered {
        name: &'a DiagramName,
        entry: &'a Entry,
    },

    /// The input is passed through unchanged.
    Literal(&'a str),
}

impl<'a> Resolved<'a> {
    /// Returns the resolved DOT text.
    pub fn source(&self) -> &'a str {
        match self {
            Self::Registered { entry, .. } => entry.description.as_str(),
            Self::Literal(source) => source,
        }
    }

    /// Returns `true` if the input matched a registered name.
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }

    /// Returns the owned [`Resolution`] for this outcome.
    pub fn resolution(&self) -> Resolution {
        match self {
            Self::Registered { name, .. } => Resolution::Registered((*name).clone()),
            Self::Literal(_) => Resolution::Literal,
        }
    }

    /// Returns an owned description, cloning only when the text is not `'static`.
    pub fn to_description(&self) -> DiagramDescription {
        match self {
            Self::Registered { entry, .. } => entry.description.clone(),
            Self::Literal(source) => DiagramDescription::from(source.to_string()),
        }
    }
}

/// Immutable mapping from diagram names to DOT descriptions.
///
/// Iteration follows definition order. When a name is defined twice the later
/// description replaces the earlier one but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: IndexMap<DiagramName, Entry>,
}

impl Registry {
    /// Returns the process-wide registry holding the built-in catalog.
    ///
    /// The registry is built on first access and shared afterwards.
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| RegistryBuilder::from_catalog().build())
    }

    /// Returns the description registered under `name`.
    pub fn get(&self, name: &str) -> Option<&DiagramDescription> {
        self.entries.get(name).map(Entry::description)
    }

    /// Returns the full entry registered under `name`.
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered diagrams.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &DiagramName> {
        self.entries.keys()
    }

    /// Registered entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&DiagramName, &Entry)> {
        self.entries.iter()
    }

    /// Registered entries belonging to `collection`, in definition order.
    pub fn entries_in(
        &self,
        collection: Collection,
    ) -> impl Iterator<Item = (&DiagramName, &Entry)> {
        self.entries
            .iter()
            .filter(move |(_, entry)| entry.collection == collection)
    }

    /// Resolves `input` as a registered name, falling back to the input itself.
    ///
    /// This never fails. Whether the resulting text is valid DOT is left to the
    /// renderer.
    pub fn resolve<'a>(&'a self, input: &'a str) -> Resolved<'a> {
        match self.entries.get_key_value(input) {
            Some((name, entry)) => {
                trace!(name = name.as_str(); "Resolved registered diagram");
                Resolved::Registered { name, entry }
            }
            None => {
                trace!(len = input.len(); "Input is not a registered name, using it as DOT");
                Resolved::Literal(input)
            }
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = (&'a DiagramName, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, DiagramName, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builder for [`Registry`].
///
/// # Examples
///
/// ```
/// use graphbook_core::RegistryBuilder;
///
/// let registry = RegistryBuilder::new()
///     .insert("pair", "digraph { a -> b }")
///     .insert("pair", "digraph { b -> a }")
///     .build();
///
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.get("pair").unwrap(), "digraph { b -> a }");
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: IndexMap<DiagramName, Entry>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled with the built-in catalog.
    pub fn from_catalog() -> Self {
        CATALOG.iter().fold(Self::new(), |builder, entry| {
            builder.insert_in(entry.collection, entry.name, entry.source)
        })
    }

    /// Registers a diagram in the [`Collection::Custom`] collection.
    ///
    /// A later insert under the same name replaces the earlier description.
    pub fn insert(
        self,
        name: impl Into<DiagramName>,
        description: impl Into<DiagramDescription>,
    ) -> Self {
        self.insert_in(Collection::Custom, name, description)
    }

    /// Registers a diagram in the given collection.
    pub fn insert_in(
        mut self,
        collection: Collection,
        name: impl Into<DiagramName>,
        description: impl Into<DiagramDescription>,
    ) -> Self {
        let name = name.into();
        let entry = Entry {
            description: description.into(),
            collection,
        };

        if let Some(previous) = self.entries.insert(name.clone(), entry) {
            debug!(
                name = name.as_str(),
                previous_collection = previous.collection.as_str(),
                collection = collection.as_str();
                "Diagram redefined, keeping the later description"
            );
        }
        self
    }

    /// Registers every `(name, description)` pair in the [`Collection::Custom`] collection.
    pub fn extend<I, N, D>(self, diagrams: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<DiagramName>,
        D: Into<DiagramDescription>,
    {
        diagrams
            .into_iter()
            .fold(self, |builder, (name, description)| {
                builder.insert(name, description)
            })
    }

    /// Freezes the builder into an immutable [`Registry`].
    pub fn build(self) -> Registry {
        debug!(entries = self.entries.len(); "Registry built");
        Registry {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_catalog() {
        let registry = Registry::builtin();

        assert_eq!(registry.len(), CATALOG.len());
        for entry in CATALOG {
            assert_eq!(registry.get(entry.name).unwrap(), entry.source);
            assert_eq!(
                registry.entry(entry.name).unwrap().collection(),
                entry.collection
            );
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Registry::builtin(), Registry::builtin()));
    }

    #[test]
    fn test_names_follow_definition_order() {
        let names: Vec<_> = Registry::builtin().names().map(|n| n.as_str()).collect();
        let expected: Vec<_> = CATALOG.iter().map(|entry| entry.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_resolve_registered() {
        let registry = Registry::builtin();
        let resolved = registry.resolve("add-op");

        assert!(resolved.is_registered());
        assert_eq!(resolved.source(), registry.get("add-op").unwrap().as_str());
        assert_eq!(
            resolved.resolution(),
            Resolution::Registered(DiagramName::new("add-op"))
        );
    }

    #[test]
    fn test_resolve_literal() {
        let registry = Registry::builtin();
        let resolved = registry.resolve("not-a-real-name");

        assert!(!resolved.is_registered());
        assert_eq!(resolved.source(), "not-a-real-name");
        assert_eq!(resolved.resolution(), Resolution::Literal);
        assert_eq!(resolved.resolution().name(), None);
    }

    #[test]
    fn test_resolve_empty_input_is_literal() {
        let resolved = Registry::builtin().resolve("");
        assert_eq!(resolved, Resolved::Literal(""));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = Registry::builtin();
        assert!(registry.contains("LSTM"));
        assert!(!registry.contains("lstm"));
        assert!(!registry.resolve("lstm").is_registered());
    }

    #[test]
    fn test_duplicate_keeps_position_and_last_value() {
        let registry = RegistryBuilder::new()
            .insert("first", "digraph { a }")
            .insert("second", "digraph { b }")
            .insert_in(Collection::Rnn, "first", "digraph { c }")
            .build();

        let names: Vec<_> = registry.names().map(|n| n.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(registry.get("first").unwrap(), "digraph { c }");
        assert_eq!(registry.entry("first").unwrap().collection(), Collection::Rnn);
    }

    #[test]
    fn test_overlay_replaces_builtin() {
        let registry = RegistryBuilder::from_catalog()
            .extend([("const-op", String::from("digraph { replaced }"))])
            .build();

        assert_eq!(registry.len(), CATALOG.len());
        assert_eq!(registry.get("const-op").unwrap(), "digraph { replaced }");
        assert_eq!(
            registry.entry("const-op").unwrap().collection(),
            Collection::Custom
        );
    }

    #[test]
    fn test_entries_in_collection() {
        let registry = Registry::builtin();
        let intro: Vec<_> = registry
            .entries_in(Collection::TensorflowIntro)
            .map(|(name, _)| name.as_str())
            .collect();

        assert_eq!(
            intro,
            ["add-op", "const-op", "simple-graph", "simple-graph-run", "exercise"]
        );
        assert_eq!(registry.entries_in(Collection::Custom).count(), 0);
    }

    #[test]
    fn test_to_description_borrows_registered_text() {
        let registry = Registry::builtin();
        let description = registry.resolve("recurrent").to_description();
        assert_eq!(&description, registry.get("recurrent").unwrap());
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve("add-op"), Resolved::Literal("add-op"));
    }
}
