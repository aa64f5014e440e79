//! Diagram names and descriptions.
//!
//! Both types are thin wrappers around text. Built-in entries borrow their
//! text from the binary, so cloning them never allocates.

use std::{borrow::Borrow, borrow::Cow, fmt};

/// Symbolic name a diagram is registered under.
///
/// Names are compared and hashed exactly like the underlying string, so a
/// registry keyed by [`DiagramName`] can be queried with a plain `&str`.
///
/// # Examples
///
/// ```
/// use graphbook_core::DiagramName;
///
/// let name = DiagramName::new("const-op");
/// assert_eq!(name, "const-op");
/// assert_eq!(name.as_str(), "const-op");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagramName(Cow<'static, str>);

impl DiagramName {
    /// Creates a name from any string-like value.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DiagramName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DiagramName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for DiagramName {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for DiagramName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl PartialEq<str> for DiagramName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for DiagramName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for DiagramName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A block of DOT text describing one graph.
///
/// The text is stored verbatim. Nothing here checks that it is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagramDescription(Cow<'static, str>);

impl DiagramDescription {
    /// Creates a description from any string-like value.
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self(source.into())
    }

    /// Returns the DOT text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the description, returning the underlying text.
    pub fn into_inner(self) -> Cow<'static, str> {
        self.0
    }
}

impl AsRef<str> for DiagramDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for DiagramDescription {
    fn from(source: &'static str) -> Self {
        Self(Cow::Borrowed(source))
    }
}

impl From<String> for DiagramDescription {
    fn from(source: String) -> Self {
        Self(Cow::Owned(source))
    }
}

impl PartialEq<str> for DiagramDescription {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for DiagramDescription {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for DiagramDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
