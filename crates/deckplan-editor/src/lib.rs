//! Deckplan Editor
//!
//! The editing-session layer of the visual page builder: one in-memory
//! document per session, path-addressed single-field updates with per-field
//! generation counters, section-order block operations, typed collection
//! editors, and the load/save round trip with defaults fallback.
//!
//! # Core Concepts
//!
//! - [`EditorSession`]: owns the document; every edit runs synchronously
//! - [`MutationError`]: a failed update applies nothing
//! - [`SaveError`]: failed saves keep the local document (optimistic UI)
//!
//! # Example
//!
//! ```rust,ignore
//! use deckplan_editor::EditorSession;
//! use deckplan_document::FieldPath;
//!
//! let mut session = EditorSession::load(&store).await;
//! session.update(&"hero.title".parse()?, "Sail away".into())?;
//! session.save(&store).await?;
//! ```

#![warn(unreachable_pub)]

mod error;
mod mutation;
mod session;

pub use error::{MutationError, SaveError};
pub use session::EditorSession;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
