//! Tests for key-driven palette editing

mod common;

use common::{hex, MockRepository, TestApp};
use crossterm::event::KeyCode;
use swatchbook::app::{DialogKind, Mode, NotificationLevel, PendingOperation};
use swatchbook::palette::{ColorId, ColorName, ColorRecord, Effect};
use swatchbook::service::Completion;
use swatchbook::Error;

// ===================
// Adding
// ===================

#[test]
fn test_add_selects_new_swatch() {
    let mut t = TestApp::new(2);

    t.press(KeyCode::Char('a'));

    assert_eq!(t.app.palette.len(), 3);
    assert_eq!(t.app.list_state.selected(), Some(2));
    assert_eq!(t.app.selected_color().unwrap().order, 3);

    let effects = t.sink.take();
    assert_eq!(effects.len(), 1);
    assert!(matches!(&effects[0], Effect::Upsert(r) if r.order == 3));
}

#[test]
fn test_empty_palette_has_no_selection() {
    let mut t = TestApp::new(0);
    assert_eq!(t.app.list_state.selected(), None);

    t.press(KeyCode::Char('e'));
    t.press(KeyCode::Char('d'));
    t.press(KeyCode::Char('m'));

    assert_eq!(t.app.mode, Mode::Normal);
    assert!(t.sink.take().is_empty());
}

// ===================
// Editing
// ===================

#[test]
fn test_edit_previews_live_then_commits() {
    let mut t = TestApp::new(1);
    let id = t.app.palette.records()[0].id;

    t.press(KeyCode::Char('e'));
    assert_eq!(t.app.mode, Mode::Insert);

    for _ in 0..6 {
        t.press(KeyCode::Backspace);
    }
    t.type_str("ff000");
    // Incomplete input leaves the swatch alone
    assert_eq!(t.app.palette.get(id).unwrap().hex, hex("000000"));

    t.type_str("0");
    let record = t.app.palette.get(id).unwrap();
    assert_eq!(record.hex, hex("ff0000"));
    assert_eq!(record.name, ColorName::Pending);
    assert!(t.sink.take().is_empty());

    t.press(KeyCode::Enter);
    assert_eq!(t.app.mode, Mode::Normal);
    assert_eq!(
        t.sink.take(),
        vec![Effect::LookupName {
            id,
            hex: hex("ff0000")
        }]
    );

    t.complete(Completion::NameResolved {
        id,
        hex: hex("ff0000"),
        name: Some("Red".to_string()),
    });

    let record = t.app.palette.get(id).unwrap().clone();
    assert_eq!(record.name, ColorName::Named("Red".to_string()));
    assert_eq!(t.sink.take(), vec![Effect::Upsert(record)]);
}

#[test]
fn test_edit_ignores_non_hex_keys() {
    let mut t = TestApp::new(1);

    t.press(KeyCode::Char('e'));
    for _ in 0..6 {
        t.press(KeyCode::Backspace);
    }
    t.type_str("zz#12");

    let DialogKind::EditHex(editor) = &t.app.dialog else {
        panic!("Expected EditHex dialog");
    };
    assert_eq!(editor.input, "12");
}

#[test]
fn test_escape_without_changes_skips_lookup() {
    let mut t = TestApp::new(1);

    t.press(KeyCode::Char('e'));
    t.press(KeyCode::Esc);

    assert_eq!(t.app.mode, Mode::Normal);
    assert!(matches!(t.app.dialog, DialogKind::None));
    assert!(t.sink.take().is_empty());
}

#[test]
fn test_escape_after_changes_commits() {
    let mut t = TestApp::new(1);
    let id = t.app.palette.records()[0].id;

    t.press(KeyCode::Char('e'));
    t.press(KeyCode::Backspace);
    t.type_str("1");
    t.press(KeyCode::Esc);

    assert_eq!(
        t.sink.take(),
        vec![Effect::LookupName {
            id,
            hex: hex("000001")
        }]
    );
}

#[test]
fn test_missing_name_uses_fallback() {
    let mut t = TestApp::new(1);
    let id = t.app.palette.records()[0].id;

    t.complete(Completion::NameResolved {
        id,
        hex: hex("000000"),
        name: None,
    });

    assert_eq!(
        t.app.palette.get(id).unwrap().name,
        ColorName::Named("New Color".to_string())
    );
}

#[test]
fn test_failed_lookup_after_commit_keeps_name_and_notifies() {
    let mut t = TestApp::new(1);
    let id = t.app.palette.records()[0].id;

    t.press(KeyCode::Char('e'));
    for _ in 0..6 {
        t.press(KeyCode::Backspace);
    }
    t.type_str("ff0000");
    t.press(KeyCode::Enter);
    assert_eq!(
        t.sink.take(),
        vec![Effect::LookupName {
            id,
            hex: hex("ff0000")
        }]
    );

    t.complete(Completion::Failed(Error::NamingLookupFailed(
        "502 Bad Gateway: upstream down".to_string(),
    )));

    let record = t.app.palette.get(id).unwrap();
    assert_eq!(record.name, ColorName::Pending);
    assert_eq!(record.hex, hex("ff0000"));
    assert!(t.sink.take().is_empty());

    let notification = t.app.notifications.last().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert!(notification.message.contains("502 Bad Gateway"));
}

#[test]
fn test_failed_lookup_keeps_earlier_name() {
    let mut t = TestApp::new(1);
    let id = t.app.palette.records()[0].id;
    t.app.palette.apply_name(id, &hex("000000"), Some("Black".to_string()));
    t.sink.take();

    t.complete(Completion::Failed(Error::NamingLookupFailed(
        "timed out".to_string(),
    )));

    assert_eq!(
        t.app.palette.get(id).unwrap().name,
        ColorName::Named("Black".to_string())
    );
    assert!(t.sink.take().is_empty());
}

#[test]
fn test_failed_persistence_keeps_palette() {
    let mut t = TestApp::new(2);
    let before = t.app.palette.records().to_vec();

    t.complete(Completion::Failed(Error::PersistenceFailed(
        "connection refused".to_string(),
    )));

    assert_eq!(t.app.palette.records(), before.as_slice());
    assert_eq!(t.app.notifications.len(), 1);
}

// ===================
// Deleting
// ===================

#[test]
fn test_delete_requires_confirmation() {
    let mut t = TestApp::new(2);
    let first = t.app.palette.records()[0].id;

    t.press(KeyCode::Char('d'));
    assert_eq!(t.app.mode, Mode::Dialog);

    t.press(KeyCode::Char('n'));
    assert_eq!(t.app.mode, Mode::Normal);
    assert_eq!(t.app.palette.len(), 2);

    t.press(KeyCode::Char('d'));
    t.press(KeyCode::Char('y'));

    assert_eq!(t.app.palette.len(), 1);
    assert_eq!(t.app.palette.records()[0].order, 1);
    assert_eq!(t.sink.take()[0], Effect::Delete(first));
    assert_eq!(
        t.app.notifications.last().unwrap().level,
        NotificationLevel::Info
    );
}

#[test]
fn test_delete_last_moves_selection_back() {
    let mut t = TestApp::new(3);
    t.press(KeyCode::Char('G'));
    assert_eq!(t.app.list_state.selected(), Some(2));

    t.press(KeyCode::Char('d'));
    t.press(KeyCode::Char('y'));

    assert_eq!(t.app.list_state.selected(), Some(1));
}

// ===================
// Grab and drop
// ===================

#[test]
fn test_grab_and_drop_reorders() {
    let mut t = TestApp::new(3);
    let ids: Vec<ColorId> = t.app.palette.records().iter().map(|r| r.id).collect();

    t.press(KeyCode::Char('m'));
    assert_eq!(t.app.mode, Mode::Grab);

    t.press(KeyCode::Char('j'));
    t.press(KeyCode::Char('j'));
    t.press(KeyCode::Enter);

    assert_eq!(t.app.mode, Mode::Normal);
    assert!(t.app.grab.is_none());
    assert_eq!(t.app.palette.get(ids[0]).unwrap().order, 3);
    assert_eq!(t.app.palette.get(ids[2]).unwrap().order, 1);
    assert_eq!(t.app.selected_color().unwrap().id, ids[0]);
    assert_eq!(t.sink.take().len(), 2);
}

#[test]
fn test_grab_cancel_restores_selection() {
    let mut t = TestApp::new(3);
    let before = t.app.palette.records().to_vec();

    t.press(KeyCode::Char('m'));
    t.press(KeyCode::Char('j'));
    t.press(KeyCode::Esc);

    assert_eq!(t.app.mode, Mode::Normal);
    assert_eq!(t.app.list_state.selected(), Some(0));
    assert_eq!(t.app.palette.records(), before.as_slice());
    assert!(t.sink.take().is_empty());
}

#[test]
fn test_drop_on_same_slot_is_noop() {
    let mut t = TestApp::new(3);

    t.press(KeyCode::Char('m'));
    t.press(KeyCode::Enter);

    assert_eq!(t.app.mode, Mode::Normal);
    assert!(t.sink.take().is_empty());
}

// ===================
// Reload and quit
// ===================

#[test]
fn test_reload_is_deferred_to_main_loop() {
    let mut t = TestApp::new(1);
    t.press(KeyCode::Char('r'));
    assert_eq!(t.app.pending_operation, Some(PendingOperation::Reload));
}

#[tokio::test]
async fn test_reload_replaces_and_normalizes() {
    let mut t = TestApp::new(2);
    let first = ColorRecord {
        order: 3,
        ..ColorRecord::new(ColorId::new())
    };
    let second = ColorRecord {
        order: 7,
        ..ColorRecord::new(ColorId::new())
    };
    let repository = MockRepository {
        snapshot: vec![second.clone(), first.clone()],
        ..Default::default()
    };

    assert!(t.app.reload_from(&repository).await);

    let loaded: Vec<_> = t.app.palette.records().iter().map(|r| (r.id, r.order)).collect();
    assert_eq!(loaded, vec![(first.id, 1), (second.id, 2)]);
    assert_eq!(t.sink.take().len(), 2);
    assert_eq!(t.app.list_state.selected(), Some(0));
}

#[tokio::test]
async fn test_failed_reload_keeps_palette() {
    let mut t = TestApp::new(2);
    let before = t.app.palette.records().to_vec();

    assert!(!t.app.reload_from(&MockRepository::failing()).await);

    assert_eq!(t.app.palette.records(), before.as_slice());
    assert_eq!(
        t.app.notifications.last().unwrap().level,
        NotificationLevel::Error
    );
}

#[test]
fn test_quit_ignored_while_dialog_open() {
    let mut t = TestApp::new(1);

    t.press(KeyCode::Char('d'));
    t.press(KeyCode::Char('q'));
    assert!(!t.app.should_quit);
    assert_eq!(t.app.mode, Mode::Dialog);

    t.press(KeyCode::Esc);

    t.press(KeyCode::Char('q'));
    assert!(t.app.should_quit);
}
