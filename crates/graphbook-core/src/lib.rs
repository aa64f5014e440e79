//! Graphbook Core Types and Definitions
//!
//! This crate provides the diagram registry behind Graphbook. It includes:
//!
//! - **Names and descriptions**: Opaque diagram identifiers and DOT text ([`diagram`] module)
//! - **Collections**: The notebook groups built-in diagrams belong to ([`collection::Collection`])
//! - **Registry**: The immutable name to description mapping and its lookup-or-literal
//!   resolution policy ([`registry`] module)
//!
//! The registry never parses the DOT it stores. Validation belongs to whatever
//! renders the resolved text.

pub mod collection;
pub mod diagram;
pub mod registry;

mod catalog;

pub use collection::Collection;
pub use diagram::{DiagramDescription, DiagramName};
pub use registry::{Registry, RegistryBuilder, Resolution, Resolved};
