//! Ordered-collection operations
//!
//! One engine for every list editor: add, remove, move, reposition, toggle
//! and single-item edits, with order renumbering applied after each
//! mutation. Out-of-range indices and unknown ids are no-ops, never errors;
//! the consuming UI disables controls at the boundary.

use crate::item::OrderedItem;

/// Neighbor direction for a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward index 0
    Up,
    /// Toward the end of the list
    Down,
}

/// Append an item, assigning `order = len + 1`
///
/// Construction of the item itself (fresh id, type-specific defaults,
/// `enabled = true`) is the caller's.
pub fn append<T: OrderedItem>(items: &mut Vec<T>, mut item: T) {
    item.set_order(position_order(items.len()));
    items.push(item);
}

/// Remove the item with the given id, then renumber survivors
///
/// Returns false (and changes nothing) if no item carries the id.
pub fn remove<T: OrderedItem>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    if items.len() == before {
        return false;
    }
    renumber(items);
    true
}

/// Swap the item at `index` with its neighbor, reassigning both orders
///
/// A move past either boundary is a no-op.
pub fn shift<T: OrderedItem>(items: &mut [T], index: usize, direction: Direction) -> bool {
    let neighbor = match direction {
        Direction::Up => {
            if index == 0 || index >= items.len() {
                return false;
            }
            index - 1
        }
        Direction::Down => {
            if index + 1 >= items.len() {
                return false;
            }
            index + 1
        }
    };

    items.swap(index, neighbor);
    items[index].set_order(position_order(index));
    items[neighbor].set_order(position_order(neighbor));
    true
}

/// Remove the item at `from` and reinsert it at `to`, then renumber
///
/// Generalizes [`shift`] to non-adjacent targets (drag-to-position).
/// No-op if either index is out of range.
pub fn reposition<T: OrderedItem>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
        renumber(items);
    }
    true
}

/// Flip `enabled` on the item at `index`; orders are untouched
pub fn toggle_enabled<T: OrderedItem>(items: &mut [T], index: usize) -> bool {
    match items.get_mut(index) {
        Some(item) => {
            let flipped = !item.enabled();
            item.set_enabled(flipped);
            true
        }
        None => false,
    }
}

/// Apply a single-item edit at `index`; all other items are unchanged
pub fn edit<T: OrderedItem>(items: &mut [T], index: usize, f: impl FnOnce(&mut T)) -> bool {
    match items.get_mut(index) {
        Some(item) => {
            f(item);
            true
        }
        None => false,
    }
}

/// Reassign every item's order to its 1-based array position
pub fn renumber<T: OrderedItem>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(position_order(index));
    }
}

/// Check the contiguity invariant: ascending `1..=N` matching positions
#[must_use]
pub fn is_contiguous<T: OrderedItem>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(index, item)| item.order() == position_order(index))
}

#[inline]
fn position_order(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
