//! Deckplan Reconciler
//!
//! Default-merge reconciliation: combines a persisted (possibly partial or
//! stale) page-configuration fragment with the Default Schema into one
//! complete, shape-correct [`PageConfig`](deckplan_document::PageConfig).
//!
//! # Core Concepts
//!
//! - [`reconcile`]: the schema-driven merge
//! - [`Reconciled`]: complete document plus non-fatal [`MergeIssue`]s
//! - [`ReconcileError`]: the merged tree could not become a document;
//!   callers recover by opening on the Default Schema
//!
//! # Example
//!
//! ```rust,ignore
//! use deckplan_document::default_schema;
//! use deckplan_reconcile::reconcile;
//!
//! let persisted = serde_json::json!({ "hero": { "title": "Sail away" } });
//! let result = reconcile(default_schema(), Some(&persisted))?;
//! assert_eq!(result.document.hero.title, "Sail away");
//! ```

#![warn(unreachable_pub)]

mod error;
mod issue;
mod merge;

pub use error::ReconcileError;
pub use issue::{IssueKind, MergeIssue, ValueKind};
pub use merge::{reconcile, Reconciled};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
