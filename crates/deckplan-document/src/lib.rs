//! Deckplan Document Model
//!
//! The typed page-configuration tree behind the storefront visual page
//! builder, together with its Default Schema.
//!
//! # Core Concepts
//!
//! - [`PageConfig`]: the full configuration document, persisted as one unit
//! - [`SectionKey`]: tagged union of the blocks the section-order registry holds
//! - [`DocumentField`]: tagged union of the document's top-level fields
//! - [`FieldPath`]: hierarchical addressing for single-field updates
//! - [`default_schema`]: the complete hard-coded Default Schema
//! - [`DocumentFingerprint`]: cheap "did anything change" checks
//!
//! # Example
//!
//! ```rust,ignore
//! use deckplan_document::{default_schema, SectionKey};
//!
//! let mut doc = default_schema().clone();
//! *doc.enabled_mut(SectionKey::Footer).unwrap() = false;
//! assert!(!doc.is_enabled(SectionKey::Footer));
//! ```

#![warn(unreachable_pub)]

mod defaults;
mod document;
mod fingerprint;
mod id;
mod path;
mod section_key;

pub mod sections;

pub use defaults::default_schema;
pub use document::{DocumentField, PageConfig};
pub use fingerprint::DocumentFingerprint;
pub use id::ItemId;
pub use path::{FieldPath, PathError};
pub use section_key::{SectionKey, UnknownSectionKey};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
