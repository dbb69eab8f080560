//! Positional key-list primitives
//!
//! Operations over a flat ordered list of keys, where position in the list
//! *is* the order: entries carry no id or order fields, and the same key
//! may appear any number of times. Used for the section-order registry.

use crate::ops::Direction;

/// Splice a key in at `index` without touching any other entry
///
/// An index past the end appends. Duplicates are allowed; the registry
/// records rendering order and presence, not data.
pub fn insert_at<K>(keys: &mut Vec<K>, key: K, index: usize) {
    let at = index.min(keys.len());
    keys.insert(at, key);
}

/// Remove only the entry at `index`, returning it
///
/// Returns `None` (and changes nothing) if `index` is out of range.
/// Whether the removed key was the last occurrence, and what that means
/// for the underlying section, is the caller's concern.
pub fn remove_at<K>(keys: &mut Vec<K>, index: usize) -> Option<K> {
    if index < keys.len() {
        Some(keys.remove(index))
    } else {
        None
    }
}

/// Swap the entry at `index` with its neighbor
///
/// A move past either boundary is a no-op.
pub fn shift_at<K>(keys: &mut [K], index: usize, direction: Direction) -> bool {
    let neighbor = match direction {
        Direction::Up => {
            if index == 0 || index >= keys.len() {
                return false;
            }
            index - 1
        }
        Direction::Down => {
            if index + 1 >= keys.len() {
                return false;
            }
            index + 1
        }
    };
    keys.swap(index, neighbor);
    true
}

/// Move the entry at `from` to position `to` (drag-to-position)
///
/// No-op if either index is out of range.
pub fn reposition<K>(keys: &mut Vec<K>, from: usize, to: usize) -> bool {
    if from >= keys.len() || to >= keys.len() {
        return false;
    }
    if from != to {
        let key = keys.remove(from);
        keys.insert(to, key);
    }
    true
}
