//! Path-addressed mutation
//!
//! Applies a single-field update at an arbitrary depth of the document.
//! Only the addressed top-level field is serialized and walked; siblings
//! are never touched, which is what lets the session advance exactly one
//! generation counter per update.

use deckplan_document::{DocumentField, FieldPath, PageConfig};
use serde_json::{Map, Value as JsonValue};

use crate::error::MutationError;

/// Apply `value` at `path`, returning the top-level field that changed
///
/// The head segment selects a [`DocumentField`]; remaining segments walk
/// into the field's JSON form, creating empty objects for missing
/// intermediates, and the final key receives `value` verbatim (a
/// primitive, a full sub-object, or a full list). The updated subtree must
/// still decode into the field's typed shape; otherwise nothing is applied.
pub(crate) fn apply_update(
    document: &mut PageConfig,
    path: &FieldPath,
    value: JsonValue,
) -> Result<DocumentField, MutationError> {
    let (head, rest) = path.split_first().ok_or(MutationError::EmptyPath)?;
    let field =
        DocumentField::from_name(head).ok_or_else(|| MutationError::UnknownField(head.to_string()))?;

    if rest.is_empty() {
        // Whole-field replacement, e.g. update(["hero"], hero).
        document
            .set_field_value(field, value)
            .map_err(|source| MutationError::Shape {
                path: path.clone(),
                source,
            })?;
        return Ok(field);
    }

    let mut subtree = document.field_value(field).map_err(MutationError::Encode)?;

    let mut cursor = &mut subtree;
    let (last, intermediates) = match rest.split_last() {
        Some(split) => split,
        None => return Err(MutationError::EmptyPath),
    };
    for segment in intermediates {
        cursor = ensure_object(cursor)
            .entry(segment.clone())
            .or_insert_with(|| JsonValue::Object(Map::new()));
    }
    ensure_object(cursor).insert(last.clone(), value);

    document
        .set_field_value(field, subtree)
        .map_err(|source| MutationError::Shape {
            path: path.clone(),
            source,
        })?;
    Ok(field)
}

/// View a slot as an object, resetting it to `{}` first if it is not one
fn ensure_object(value: &mut JsonValue) -> &mut Map<String, JsonValue> {
    if !value.is_object() {
        *value = JsonValue::Object(Map::new());
    }
    match value {
        JsonValue::Object(map) => map,
        _ => unreachable!("slot was just set to an object"),
    }
}
