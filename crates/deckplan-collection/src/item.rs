//! Ordered-item trait
//!
//! Defines the [`OrderedItem`] contract shared by every identifiable,
//! orderable record inside a section-level list.

/// Contract for records inside an ordered section list
///
/// Implementors carry `{ id, order, enabled }` alongside their
/// type-specific fields.
///
/// # Invariants
/// - `id` is unique within a list, assigned once at creation, never reused
/// - after every engine operation, `order` values within one list are the
///   contiguous sequence `1..=N` matching array position
pub trait OrderedItem {
    /// Item identity token; comparison is always by this, never by content
    fn id(&self) -> &str;

    /// Current 1-based order value
    fn order(&self) -> u32;

    /// Assign the order value
    fn set_order(&mut self, order: u32);

    /// Whether the item is shown
    fn enabled(&self) -> bool;

    /// Set the shown flag
    fn set_enabled(&mut self, enabled: bool);
}
