//! Editing session
//!
//! One [`EditorSession`] owns the single in-memory document of an editing
//! session: every edit runs to completion on the calling thread, and the
//! consuming layer re-renders from the new snapshot. Change detection is by
//! per-field generation counters rather than deep equality.

use std::collections::HashMap;

use deckplan_collection::{ops, registry, Direction};
use deckplan_document::sections::{
    CategoryItem, CategoryMenuSection, FooterMenuItem, LandingMenuItem, ProductMenuItem,
    ProductSection, ThemeSection, TopMenuItem,
};
use deckplan_document::{
    default_schema, DocumentField, DocumentFingerprint, FieldPath, PageConfig, SectionKey,
};
use deckplan_reconcile::{reconcile, MergeIssue};
use deckplan_store::ConfigStore;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::error::{MutationError, SaveError};
use crate::mutation::apply_update;

/// Fallback shown when a rejected save carries no server message
const GENERIC_SAVE_ERROR: &str = "Failed to save the configuration.";

/// An editing session over one in-memory document
///
/// Single-threaded, synchronous mutation model: only the two round-trip
/// calls are async, and they never block local edits. Saving is
/// last-write-wins with no version token; two concurrent sessions silently
/// clobber each other.
#[derive(Debug)]
pub struct EditorSession {
    document: PageConfig,
    generations: HashMap<DocumentField, u64>,
    revision: u64,
    baseline: Option<DocumentFingerprint>,
    load_issues: Vec<MergeIssue>,
}

impl EditorSession {
    /// Fresh session on the Default Schema
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_document(default_schema().clone(), Vec::new())
    }

    fn from_document(document: PageConfig, load_issues: Vec<MergeIssue>) -> Self {
        let baseline = DocumentFingerprint::compute(&document).ok();
        Self {
            document,
            generations: HashMap::new(),
            revision: 0,
            baseline,
            load_issues,
        }
    }

    /// Open a session from the store
    ///
    /// Fetches the persisted fragment and reconciles it against the Default
    /// Schema. Every failure (transport, a not-ok answer, a fragment that
    /// does not decode) is logged and recovered by opening on the defaults;
    /// loading never surfaces a blocking error.
    pub async fn load<S: ConfigStore>(store: &S) -> Self {
        let response = match store.load().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "configuration load failed; opening on defaults");
                return Self::with_defaults();
            }
        };

        if !response.ok {
            warn!("configuration load answered not-ok; opening on defaults");
            return Self::with_defaults();
        }

        match reconcile(default_schema(), response.config.as_ref()) {
            Ok(reconciled) => {
                for issue in &reconciled.issues {
                    warn!(%issue, "persisted configuration disagreed with schema");
                }
                Self::from_document(reconciled.document, reconciled.issues)
            }
            Err(error) => {
                warn!(%error, "persisted configuration unusable; opening on defaults");
                Self::with_defaults()
            }
        }
    }

    /// Persist the full document, overwriting whatever was last stored
    ///
    /// Last-write-wins: no version token, no conflict detection. On any
    /// failure the in-memory document is kept as-is (optimistic UI) so a
    /// retry needs no re-entry.
    ///
    /// # Errors
    /// [`SaveError::Rejected`] with the server's message on an `ok: false`
    /// answer, [`SaveError::Transport`] when the round trip fails
    pub async fn save<S: ConfigStore>(&mut self, store: &S) -> Result<(), SaveError> {
        match store.save(&self.document).await {
            Ok(response) if response.ok => {
                self.baseline = DocumentFingerprint::compute(&self.document).ok();
                debug!(revision = self.revision, "configuration saved");
                Ok(())
            }
            Ok(response) => Err(SaveError::Rejected {
                message: response.error.unwrap_or_else(|| GENERIC_SAVE_ERROR.to_string()),
            }),
            Err(error) => Err(SaveError::Transport(error)),
        }
    }

    /// The current document snapshot
    #[inline]
    #[must_use]
    pub fn document(&self) -> &PageConfig {
        &self.document
    }

    /// Diagnostics recorded while reconciling the loaded fragment
    #[inline]
    #[must_use]
    pub fn load_issues(&self) -> &[MergeIssue] {
        &self.load_issues
    }

    /// Generation counter of one top-level field
    ///
    /// Strictly increases every time an edit touches the field and never
    /// otherwise: "did this change" without deep equality.
    #[must_use]
    pub fn generation(&self, field: DocumentField) -> u64 {
        self.generations.get(&field).copied().unwrap_or(0)
    }

    /// Count of edits applied in this session
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the document differs from the last loaded/saved state
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match (&self.baseline, DocumentFingerprint::compute(&self.document)) {
            (Some(baseline), Ok(current)) => *baseline != current,
            _ => true,
        }
    }

    fn touch(&mut self, field: DocumentField) {
        *self.generations.entry(field).or_insert(0) += 1;
        self.revision += 1;
    }

    /// Apply a single-field update at `path`
    ///
    /// See [`MutationError`]; a failed update applies nothing.
    ///
    /// # Errors
    /// Returns [`MutationError`] for an empty path, an unknown head field,
    /// or a value that breaks the field's shape
    pub fn update(&mut self, path: &FieldPath, value: JsonValue) -> Result<(), MutationError> {
        let field = apply_update(&mut self.document, path, value)?;
        self.touch(field);
        Ok(())
    }

    /// Whether the section behind `key` currently renders
    #[must_use]
    pub fn is_section_enabled(&self, key: SectionKey) -> bool {
        self.document.is_enabled(key)
    }

    /// Set the `enabled` flag behind `key`
    ///
    /// Affects every registry occurrence of the key at once; the key is
    /// the section identity. Returns false for structural sections, which
    /// carry no flag.
    pub fn set_section_enabled(&mut self, key: SectionKey, enabled: bool) -> bool {
        match self.document.enabled_mut(key) {
            Some(flag) => {
                *flag = enabled;
                self.touch(key.field());
                true
            }
            None => false,
        }
    }

    /// Splice `key` into the section-order registry at `index`
    ///
    /// Duplicates are allowed. A disableable section that was off is turned
    /// back on the moment its key enters the registry.
    pub fn add_block(&mut self, key: SectionKey, index: usize) {
        registry::insert_at(&mut self.document.section_order, key, index);
        self.touch(DocumentField::SectionOrder);

        if key.supports_disable() && !self.document.is_enabled(key) {
            self.set_section_enabled(key, true);
        }
    }

    /// Remove the registry entry at `index`
    ///
    /// If that was the last occurrence of a disableable key, the section is
    /// marked disabled. Its data (menu items, copy, lists) is preserved,
    /// so re-adding the key restores prior content.
    pub fn remove_block(&mut self, index: usize) -> Option<SectionKey> {
        let key = registry::remove_at(&mut self.document.section_order, index)?;
        self.touch(DocumentField::SectionOrder);

        let last_occurrence = !self.document.section_order.contains(&key);
        if last_occurrence && key.supports_disable() {
            self.set_section_enabled(key, false);
        }
        Some(key)
    }

    /// Move the registry entry at `index` one step toward the front
    pub fn move_block_up(&mut self, index: usize) -> bool {
        self.shift_block(index, Direction::Up)
    }

    /// Move the registry entry at `index` one step toward the back
    pub fn move_block_down(&mut self, index: usize) -> bool {
        self.shift_block(index, Direction::Down)
    }

    fn shift_block(&mut self, index: usize, direction: Direction) -> bool {
        let moved = registry::shift_at(&mut self.document.section_order, index, direction);
        if moved {
            self.touch(DocumentField::SectionOrder);
        }
        moved
    }

    /// Drag the registry entry at `from` to position `to`
    pub fn reposition_block(&mut self, from: usize, to: usize) -> bool {
        let moved = registry::reposition(&mut self.document.section_order, from, to);
        if moved {
            self.touch(DocumentField::SectionOrder);
        }
        moved
    }

    /// Append a fresh category, respecting the editor cap
    ///
    /// Returns false (and appends nothing) once
    /// [`CategoryMenuSection::MAX_CATEGORIES`] is reached.
    pub fn add_category(&mut self) -> bool {
        if self.document.category_menu.categories.len() >= CategoryMenuSection::MAX_CATEGORIES {
            return false;
        }
        self.edit_categories(|items| ops::append(items, CategoryItem::new()));
        true
    }

    /// Run a collection edit against the category list
    pub fn edit_categories<R>(&mut self, edit: impl FnOnce(&mut Vec<CategoryItem>) -> R) -> R {
        let result = edit(&mut self.document.category_menu.categories);
        self.touch(DocumentField::CategoryMenu);
        result
    }

    /// Run a collection edit against the header menu items
    pub fn edit_top_menu_items<R>(&mut self, edit: impl FnOnce(&mut Vec<TopMenuItem>) -> R) -> R {
        let result = edit(&mut self.document.top_menu.menu_items);
        self.touch(DocumentField::TopMenu);
        result
    }

    /// Run a collection edit against the footer links
    pub fn edit_footer_menu_items<R>(
        &mut self,
        edit: impl FnOnce(&mut Vec<FooterMenuItem>) -> R,
    ) -> R {
        let result = edit(&mut self.document.footer.menu_items);
        self.touch(DocumentField::Footer);
        result
    }

    /// Run a collection edit against the product menu bar items
    pub fn edit_product_menu_items<R>(
        &mut self,
        edit: impl FnOnce(&mut Vec<ProductMenuItem>) -> R,
    ) -> R {
        let result = edit(&mut self.document.product_menu_bar.menu_items);
        self.touch(DocumentField::ProductMenuBar);
        result
    }

    /// Run a collection edit against the landing menu bar items
    pub fn edit_landing_menu_items<R>(
        &mut self,
        edit: impl FnOnce(&mut Vec<LandingMenuItem>) -> R,
    ) -> R {
        let result = edit(&mut self.document.landing_page_menu_bar.menu_items);
        self.touch(DocumentField::LandingPageMenuBar);
        result
    }

    /// Run a collection edit against the product blocks
    pub fn edit_product_sections<R>(
        &mut self,
        edit: impl FnOnce(&mut Vec<ProductSection>) -> R,
    ) -> R {
        let result = edit(&mut self.document.product_sections);
        self.touch(DocumentField::ProductSections);
        result
    }

    /// Run a collection edit against the theme blocks
    pub fn edit_theme_sections<R>(&mut self, edit: impl FnOnce(&mut Vec<ThemeSection>) -> R) -> R {
        let result = edit(&mut self.document.theme_sections);
        self.touch(DocumentField::ThemeSections);
        result
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn fresh_session_is_clean() {
        let session = EditorSession::with_defaults();
        assert!(!session.is_dirty());
        assert_eq!(session.revision(), 0);
        assert_eq!(session.generation(DocumentField::Hero), 0);
    }

    #[test]
    fn update_bumps_target_generation_only() {
        let mut session = EditorSession::with_defaults();
        let path = FieldPath::from_str("footer.companyName").unwrap();

        session.update(&path, json!("New Lines Ltd")).unwrap();

        assert_eq!(session.generation(DocumentField::Footer), 1);
        assert_eq!(session.generation(DocumentField::Hero), 0);
        assert_eq!(session.generation(DocumentField::TopMenu), 0);
        assert_eq!(session.revision(), 1);
        assert!(session.is_dirty());
    }

    #[test]
    fn failed_update_leaves_session_untouched() {
        let mut session = EditorSession::with_defaults();
        let path = FieldPath::from_str("footer.menuItems").unwrap();

        let result = session.update(&path, json!("not a list"));
        assert!(result.is_err());
        assert_eq!(session.generation(DocumentField::Footer), 0);
        assert!(!session.is_dirty());
    }

    #[test]
    fn set_section_enabled_touches_owning_field() {
        let mut session = EditorSession::with_defaults();
        assert!(session.set_section_enabled(SectionKey::Footer, false));
        assert!(!session.is_section_enabled(SectionKey::Footer));
        assert_eq!(session.generation(DocumentField::Footer), 1);

        // Structural sections carry no flag.
        assert!(!session.set_section_enabled(SectionKey::Hero, true));
    }

    #[test]
    fn add_category_respects_cap() {
        let mut session = EditorSession::with_defaults();
        let seeded = session.document().category_menu.categories.len();

        for _ in seeded..CategoryMenuSection::MAX_CATEGORIES {
            assert!(session.add_category());
        }
        assert!(!session.add_category());
        assert_eq!(
            session.document().category_menu.categories.len(),
            CategoryMenuSection::MAX_CATEGORIES
        );
    }
}
