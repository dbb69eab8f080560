//! Editing-session round-trip and block-operation tests

use std::str::FromStr;

use deckplan_collection::ops;
use deckplan_document::sections::FooterMenuItem;
use deckplan_document::{default_schema, DocumentField, FieldPath, SectionKey};
use deckplan_editor::{EditorSession, SaveError};
use deckplan_store::InMemoryStore;
use deckplan_test_utils::{footer_item, sample_fragment, FailingStore, RejectingStore};
use pretty_assertions::assert_eq;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("deckplan=debug")
        .try_init();
}

#[tokio::test]
async fn load_merges_persisted_fragment() {
    init_tracing();
    let store = InMemoryStore::with_config(sample_fragment());

    let session = EditorSession::load(&store).await;
    let doc = session.document();

    assert_eq!(doc.hero.title, "Harbor Nights");
    assert_eq!(doc.hero.buttons.len(), 1);
    assert_eq!(doc.footer.company_name, "Harbor Lines");
    // Deep partial: the phone was overridden, the email kept its default.
    assert_eq!(doc.footer.contact_info.phone.as_deref(), Some("02-555-0100"));
    assert_eq!(
        doc.footer.contact_info.email,
        default_schema().footer.contact_info.email
    );
    assert_eq!(
        doc.section_order,
        vec![SectionKey::TopMenu, SectionKey::Hero, SectionKey::Footer]
    );
    assert!(session.load_issues().is_empty());
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn load_reports_issues_for_stale_fields() {
    let store = InMemoryStore::with_config(json!({
        "hero": { "title": "X" },
        "legacySections": []
    }));

    let session = EditorSession::load(&store).await;
    assert_eq!(session.document().hero.title, "X");
    assert_eq!(session.load_issues().len(), 1);
    assert_eq!(session.load_issues()[0].path, "legacySections");
}

#[tokio::test]
async fn load_transport_failure_opens_defaults() {
    init_tracing();
    let session = EditorSession::load(&FailingStore).await;
    assert_eq!(session.document(), default_schema());
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn load_not_ok_opens_defaults() {
    let session = EditorSession::load(&RejectingStore::default()).await;
    assert_eq!(session.document(), default_schema());
}

#[tokio::test]
async fn load_undecodable_fragment_opens_defaults() {
    let store = InMemoryStore::with_config(json!({
        "socialButtons": { "layout": "diagonal" }
    }));

    let session = EditorSession::load(&store).await;
    assert_eq!(session.document(), default_schema());
}

#[tokio::test]
async fn save_round_trip_clears_dirty() {
    let store = InMemoryStore::new();
    let mut session = EditorSession::load(&store).await;

    let path = FieldPath::from_str("hero.title").unwrap();
    session.update(&path, json!("Midnight departure")).unwrap();
    assert!(session.is_dirty());

    session.save(&store).await.unwrap();
    assert!(!session.is_dirty());

    let stored = store.stored().unwrap();
    assert_eq!(stored["hero"]["title"], json!("Midnight departure"));
}

#[tokio::test]
async fn save_rejection_keeps_local_edits() {
    let store = RejectingStore::with_message("maintenance window");
    let mut session = EditorSession::with_defaults();

    let path = FieldPath::from_str("hero.title").unwrap();
    session.update(&path, json!("Kept locally")).unwrap();

    let result = session.save(&store).await;
    match result {
        Err(SaveError::Rejected { message }) => assert_eq!(message, "maintenance window"),
        other => panic!("expected rejection, got {other:?}"),
    }

    // Optimistic UI: the edit survives and a retry needs no re-entry.
    assert_eq!(session.document().hero.title, "Kept locally");
    assert!(session.is_dirty());
}

#[tokio::test]
async fn save_transport_failure_keeps_local_edits() {
    let mut session = EditorSession::with_defaults();
    let path = FieldPath::from_str("hero.title").unwrap();
    session.update(&path, json!("Kept locally")).unwrap();

    let result = session.save(&FailingStore).await;
    assert!(matches!(result, Err(SaveError::Transport(_))));
    assert_eq!(session.document().hero.title, "Kept locally");
}

#[test]
fn footer_menu_add_then_remove_renumbers() {
    let mut session = EditorSession::with_defaults();

    session.edit_footer_menu_items(|items| {
        items.clear();
        ops::append(items, footer_item("1", "Notice"));
    });

    let new_id = session.edit_footer_menu_items(|items| {
        ops::append(items, FooterMenuItem::new());
        items[1].id.clone()
    });
    assert_eq!(session.document().footer.menu_items[1].order, 2);

    session.edit_footer_menu_items(|items| {
        assert!(ops::remove(items, "1"));
    });

    let items = &session.document().footer.menu_items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, new_id);
    assert_eq!(items[0].order, 1);
}

#[test]
fn removed_id_is_never_reissued() {
    let mut session = EditorSession::with_defaults();

    let first = session.edit_footer_menu_items(|items| {
        let mut item = FooterMenuItem::new();
        item.text = "Duplicate label".to_string();
        let id = item.id.clone();
        ops::append(items, item);
        id
    });

    session.edit_footer_menu_items(|items| {
        assert!(ops::remove(items, first.as_str()));
    });

    let second = session.edit_footer_menu_items(|items| {
        let mut item = FooterMenuItem::new();
        item.text = "Duplicate label".to_string();
        let id = item.id.clone();
        ops::append(items, item);
        id
    });

    assert_ne!(first, second);
}

#[test]
fn shared_identity_across_repeated_keys() {
    let mut session = EditorSession::with_defaults();
    let path = FieldPath::from_str("sectionOrder").unwrap();
    session
        .update(&path, json!(["footer", "hero", "footer"]))
        .unwrap();

    session.set_section_enabled(SectionKey::Footer, false);

    // Both occurrences read the same footer section.
    for key in &session.document().section_order {
        if *key == SectionKey::Footer {
            assert!(!session.is_section_enabled(*key));
        }
    }
    // The data behind the flag is untouched.
    assert_eq!(session.document().footer.menu_items.len(), 4);
}

#[test]
fn remove_last_block_occurrence_disables_but_preserves_data() {
    let mut session = EditorSession::with_defaults();
    let footer_index = session
        .document()
        .section_order
        .iter()
        .position(|key| *key == SectionKey::Footer)
        .unwrap();

    let removed = session.remove_block(footer_index);
    assert_eq!(removed, Some(SectionKey::Footer));
    assert!(!session.is_section_enabled(SectionKey::Footer));
    assert_eq!(session.document().footer.menu_items.len(), 4);

    // Re-adding the key restores prior content.
    session.add_block(SectionKey::Footer, 3);
    assert!(session.is_section_enabled(SectionKey::Footer));
    assert_eq!(
        session.document().footer.menu_items,
        default_schema().footer.menu_items
    );
}

#[test]
fn remove_block_with_remaining_occurrence_keeps_section_enabled() {
    let mut session = EditorSession::with_defaults();
    session.add_block(SectionKey::Footer, 0);

    let removed = session.remove_block(0);
    assert_eq!(removed, Some(SectionKey::Footer));
    assert!(session.is_section_enabled(SectionKey::Footer));
}

#[test]
fn add_block_reenables_disabled_section() {
    let mut session = EditorSession::with_defaults();
    session.set_section_enabled(SectionKey::VideoBanner, false);

    session.add_block(SectionKey::VideoBanner, 2);
    assert!(session.is_section_enabled(SectionKey::VideoBanner));
}

#[test]
fn block_moves_stop_at_boundaries() {
    let mut session = EditorSession::with_defaults();
    let len = session.document().section_order.len();

    assert!(!session.move_block_up(0));
    assert!(!session.move_block_down(len - 1));
    assert!(session.move_block_down(0));
    assert_eq!(session.document().section_order[1], SectionKey::TopMenu);
}

#[test]
fn reposition_block_moves_to_target() {
    let mut session = EditorSession::with_defaults();
    let last = session.document().section_order.len() - 1;

    assert!(session.reposition_block(last, 0));
    assert_eq!(session.document().section_order[0], SectionKey::Footer);

    assert!(!session.reposition_block(0, 999));
}

#[test]
fn block_ops_advance_registry_generation_only() {
    let mut session = EditorSession::with_defaults();
    session.add_block(SectionKey::CruiseSearch, 4);

    assert!(session.generation(DocumentField::SectionOrder) >= 1);
    assert_eq!(session.generation(DocumentField::Footer), 0);
}

#[test]
fn product_and_theme_blocks_follow_the_engine_contract() {
    let mut session = EditorSession::with_defaults();

    let first_id = session.edit_product_sections(|items| {
        ops::append(items, deckplan_document::sections::ProductSection::new());
        ops::append(items, deckplan_document::sections::ProductSection::new());
        items[0].id.clone()
    });

    let doc = session.document();
    assert_eq!(doc.product_sections[0].order, 1);
    assert_eq!(doc.product_sections[1].order, 2);

    session.edit_product_sections(|items| {
        assert!(ops::remove(items, first_id.as_str()));
        assert!(ops::is_contiguous(items));
    });
    assert_eq!(session.document().product_sections[0].order, 1);

    session.edit_theme_sections(|items| {
        ops::append(items, deckplan_document::sections::ThemeSection::new());
        assert!(ops::is_contiguous(items));
    });
}
