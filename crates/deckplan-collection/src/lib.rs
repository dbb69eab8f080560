//! Deckplan Ordered-Collection Engine
//!
//! One reusable contract for add/remove/move/reorder operations over any
//! named list of identifiable, orderable records, plus the positional
//! primitives backing the section-order registry.
//!
//! # Core Concepts
//!
//! - [`OrderedItem`]: the `{ id, order, enabled }` contract section lists share
//! - [`ops`]: the CRUD engine; renumbers `order` to `1..=N` after every mutation
//! - [`registry`]: key-list splicing where position *is* the order
//!
//! # Example
//!
//! ```rust,ignore
//! use deckplan_collection::ops;
//!
//! ops::append(&mut footer.menu_items, FooterMenuItem::new());
//! ops::remove(&mut footer.menu_items, "footer-menu-01jd...");
//! assert!(ops::is_contiguous(&footer.menu_items));
//! ```

#![warn(unreachable_pub)]

mod item;

pub mod ops;
pub mod registry;

pub use item::OrderedItem;
pub use ops::Direction;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
