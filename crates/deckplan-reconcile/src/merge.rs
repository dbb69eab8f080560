//! Schema-driven default merge
//!
//! Combines a persisted (possibly partial or stale) fragment with the
//! Default Schema into one complete, shape-correct document. The walk is
//! driven by the schema's shape, never the persisted value's: malformed
//! input cannot coerce a field's type, and unknown keys are dropped with a
//! diagnostic instead of surviving into the document.

use deckplan_document::PageConfig;
use serde_json::{Map, Value as JsonValue};

use crate::error::ReconcileError;
use crate::issue::{MergeIssue, ValueKind};

/// Result of a reconcile pass
#[derive(Debug, Clone)]
pub struct Reconciled {
    /// The complete document; every key of the Default Schema, at every
    /// depth, with persisted overrides applied
    pub document: PageConfig,

    /// Non-fatal findings from the shape walk
    pub issues: Vec<MergeIssue>,
}

/// Merge a persisted fragment over the defaults
///
/// Key-wise, recursive:
/// - absent fragment → deep copy of `defaults`, unchanged
/// - ordered lists are **replaced wholesale**: user-curated, order-sensitive
///   content has no meaningful element-wise merge
/// - structured objects merge key-wise; schema keys absent from the
///   fragment keep their defaults
/// - `null` is a concrete value and overwrites
/// - any shape disagreement with the schema keeps the default and records a
///   [`MergeIssue`]
///
/// # Errors
/// Returns [`ReconcileError::Decode`] if the merged tree does not decode
/// into a document; the caller recovers by opening on the defaults.
pub fn reconcile(
    defaults: &PageConfig,
    persisted: Option<&JsonValue>,
) -> Result<Reconciled, ReconcileError> {
    let Some(persisted) = persisted else {
        return Ok(Reconciled {
            document: defaults.clone(),
            issues: Vec::new(),
        });
    };

    let mut accumulator = serde_json::to_value(defaults).map_err(ReconcileError::Encode)?;
    let mut issues = Vec::new();

    if let Some(fragment) = persisted.as_object() {
        if let Some(schema) = accumulator.as_object_mut() {
            merge_object(schema, fragment, &mut Path::root(), &mut issues);
        }
    } else {
        issues.push(MergeIssue::type_mismatch(
            "",
            ValueKind::Object,
            ValueKind::of(persisted),
        ));
    }

    let document = serde_json::from_value(accumulator).map_err(ReconcileError::Decode)?;
    Ok(Reconciled { document, issues })
}

/// Dotted path accumulator for diagnostics
struct Path(Vec<String>);

impl Path {
    fn root() -> Self {
        Self(Vec::new())
    }

    fn current(&self) -> String {
        self.0.join(".")
    }

    fn join(&self, key: &str) -> String {
        if self.0.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.current())
        }
    }

    fn push(&mut self, key: &str) {
        self.0.push(key.to_string());
    }

    fn pop(&mut self) {
        self.0.pop();
    }
}

fn merge_object(
    schema: &mut Map<String, JsonValue>,
    fragment: &Map<String, JsonValue>,
    path: &mut Path,
    issues: &mut Vec<MergeIssue>,
) {
    for (key, persisted_value) in fragment {
        match schema.get_mut(key) {
            None => issues.push(MergeIssue::unknown_field(path.join(key))),
            Some(slot) => {
                path.push(key);
                merge_value(slot, persisted_value, path, issues);
                path.pop();
            }
        }
    }
}

fn merge_value(
    slot: &mut JsonValue,
    persisted: &JsonValue,
    path: &mut Path,
    issues: &mut Vec<MergeIssue>,
) {
    let expected = ValueKind::of(slot);
    let found = ValueKind::of(persisted);

    match (expected, found) {
        // null is a concrete value, not an absence marker
        (_, ValueKind::Null) => *slot = JsonValue::Null,

        // lists replace wholesale, even when shorter than the default
        (ValueKind::Array, ValueKind::Array) => *slot = persisted.clone(),

        (ValueKind::Object, ValueKind::Object) => {
            if let (JsonValue::Object(schema), JsonValue::Object(fragment)) = (slot, persisted) {
                merge_object(schema, fragment, path, issues);
            }
        }

        // primitive override, same shape only
        (a, b) if a == b => *slot = persisted.clone(),

        (expected, found) => {
            issues.push(MergeIssue::type_mismatch(path.current(), expected, found));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueKind;
    use deckplan_document::default_schema;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Recursive key-set equality, objects only (lists are opaque units)
    fn assert_same_keys(expected: &JsonValue, actual: &JsonValue, path: &str) {
        match (expected, actual) {
            (JsonValue::Object(a), JsonValue::Object(b)) => {
                let a_keys: Vec<_> = a.keys().collect();
                let b_keys: Vec<_> = b.keys().collect();
                assert_eq!(a_keys, b_keys, "key set diverged at '{path}'");
                for (key, value) in a {
                    assert_same_keys(value, &b[key], &format!("{path}.{key}"));
                }
            }
            _ => {}
        }
    }

    fn keys_match_defaults(document: &PageConfig) {
        let expected = serde_json::to_value(default_schema()).unwrap();
        let actual = serde_json::to_value(document).unwrap();
        assert_same_keys(&expected, &actual, "");
    }

    #[test]
    fn absent_fragment_yields_defaults() {
        let result = reconcile(default_schema(), None).unwrap();
        assert_eq!(&result.document, default_schema());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn empty_fragment_yields_defaults() {
        let result = reconcile(default_schema(), Some(&json!({}))).unwrap();
        assert_eq!(&result.document, default_schema());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn merge_completeness_for_deep_partial() {
        let fragment = json!({
            "hero": { "title": "X" },
            "footer": { "contactInfo": { "phone": "02-000-0000" } },
        });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();
        assert!(result.issues.is_empty());
        keys_match_defaults(&result.document);
    }

    #[test]
    fn primitive_override_leaves_siblings_default() {
        let fragment = json!({ "hero": { "title": "X" } });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();

        assert_eq!(result.document.hero.title, "X");
        assert_eq!(result.document.hero.subtitle, default_schema().hero.subtitle);
        assert_eq!(result.document.hero.buttons, default_schema().hero.buttons);
    }

    #[test]
    fn arrays_replace_wholesale_even_when_shorter() {
        // Defaults carry three hero buttons; the fragment's two win exactly.
        let fragment = json!({
            "hero": {
                "buttons": [
                    { "text": "B", "link": "/b" },
                    { "text": "C", "link": "/c" },
                ]
            }
        });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();

        let buttons = &result.document.hero.buttons;
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].text, "B");
        assert_eq!(buttons[1].text, "C");
        assert!(buttons[0].background_color.is_none());

        // Sibling scalar kept its default.
        assert_eq!(result.document.hero.title, default_schema().hero.title);
    }

    #[test]
    fn persisted_item_list_replaces_default_items() {
        let fragment = json!({
            "footer": {
                "menuItems": [
                    { "id": "9", "enabled": true, "text": "Only", "urlSlug": "/only", "order": 1 }
                ]
            }
        });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();

        let items = &result.document.footer.menu_items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_str(), "9");
        assert_eq!(result.document.footer.company_name, default_schema().footer.company_name);
    }

    #[test]
    fn null_is_concrete_and_overwrites() {
        let fragment = json!({ "hero": { "logoUrl": null } });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();
        assert!(result.issues.is_empty());
        assert!(result.document.hero.logo_url.is_none());
    }

    #[test]
    fn null_for_required_field_fails_decode() {
        let fragment = json!({ "hero": { "title": null } });
        let result = reconcile(default_schema(), Some(&fragment));
        assert!(matches!(result, Err(ReconcileError::Decode(_))));
    }

    #[test]
    fn enum_string_outside_variants_fails_decode() {
        let fragment = json!({ "socialButtons": { "layout": "diagonal" } });
        let result = reconcile(default_schema(), Some(&fragment));
        assert!(matches!(result, Err(ReconcileError::Decode(_))));
    }

    #[test]
    fn primitive_kind_mismatch_keeps_default() {
        let fragment = json!({ "footer": { "enabled": "yes" } });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();

        assert!(result.document.footer.enabled);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].path, "footer.enabled");
        assert!(matches!(
            result.issues[0].kind,
            IssueKind::TypeMismatch {
                expected: ValueKind::Bool,
                found: ValueKind::String,
            }
        ));
    }

    #[test]
    fn object_where_list_expected_keeps_default() {
        let fragment = json!({ "footer": { "menuItems": { "not": "a list" } } });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();

        assert_eq!(result.document.footer.menu_items, default_schema().footer.menu_items);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].path, "footer.menuItems");
    }

    #[test]
    fn primitive_where_object_expected_keeps_subtree() {
        // The original reset such fields to {} and lost sibling data; the
        // schema walk keeps the whole default subtree and reports instead.
        let fragment = json!({ "globalSettings": { "buttonColors": "red" } });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();

        assert_eq!(
            result.document.global_settings.button_colors,
            default_schema().global_settings.button_colors
        );
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn unknown_field_is_dropped_and_reported() {
        let fragment = json!({ "sections": [], "hero": { "mystery": 1, "title": "X" } });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();

        assert_eq!(result.document.hero.title, "X");
        let paths: Vec<_> = result.issues.iter().map(|issue| issue.path.as_str()).collect();
        assert!(paths.contains(&"sections"));
        assert!(paths.contains(&"hero.mystery"));
        keys_match_defaults(&result.document);
    }

    #[test]
    fn non_object_root_yields_defaults_with_issue() {
        let result = reconcile(default_schema(), Some(&json!([1, 2]))).unwrap();
        assert_eq!(&result.document, default_schema());
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].path, "");
    }

    #[test]
    fn section_order_replaces_wholesale() {
        let fragment = json!({ "sectionOrder": ["footer", "hero", "footer"] });
        let result = reconcile(default_schema(), Some(&fragment)).unwrap();

        use deckplan_document::SectionKey;
        assert_eq!(
            result.document.section_order,
            vec![SectionKey::Footer, SectionKey::Hero, SectionKey::Footer]
        );
    }
}
