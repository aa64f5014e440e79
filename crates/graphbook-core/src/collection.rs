//! Collections group registered diagrams by the notebook that uses them.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a collection name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection `{0}` (expected one of: tensorflow-intro, rnn, custom)")]
pub struct UnknownCollection(pub String);

/// The group a registered diagram belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collection {
    /// Dataflow diagrams from the introduction to TensorFlow notebook.
    TensorflowIntro,

    /// Network and cell diagrams from the recurrent neural network notebook.
    Rnn,

    /// Diagrams registered outside the built-in catalog.
    #[default]
    Custom,
}

impl Collection {
    /// All collections, in catalog order.
    pub const ALL: [Collection; 3] = [Self::TensorflowIntro, Self::Rnn, Self::Custom];

    /// Returns the kebab-case name used on the command line and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TensorflowIntro => "tensorflow-intro",
            Self::Rnn => "rnn",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}
