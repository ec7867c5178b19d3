//! Friend list integration tests: adding, selecting and status lines.

use std::collections::HashSet;

use crossterm::event::KeyCode;

use splitbill::tea::{update, Focus, Message};
use splitbill::{BalanceStatus, Friend, FriendId};

use crate::fixtures::{empty_config, Harness};

/// Given the add form with a name and the default image
/// When Enter is pressed
/// Then exactly one friend is appended with balance 0 and the form closes
#[test]
fn test_add_friend_appends_one_with_zero_balance() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('a'));
    assert_eq!(h.model.focus, Focus::AddFriend);

    h.type_str("Dana");
    h.press(KeyCode::Enter);

    let friends = h.model.store.friends();
    assert_eq!(friends.len(), 4);
    let dana = &friends[3];
    assert_eq!(dana.name, "Dana");
    assert_eq!(dana.balance, 0.0);
    assert!(dana.image.starts_with("https://i.pravatar.cc/48?="));
    assert!(matches!(dana.id, FriendId::Generated(_)));

    assert!(!h.model.store.is_add_friend_open());
    assert!(h.model.add_friend.is_none());
    assert_eq!(h.model.focus, Focus::List);
    assert_eq!(h.model.cursor, 3);
}

#[test]
fn test_added_friends_get_unique_ids() {
    let mut h = Harness::new();
    for name in ["Dana", "Eve", "Dana"] {
        h.press(KeyCode::Char('a'));
        h.type_str(name);
        h.press(KeyCode::Enter);
    }

    let ids: HashSet<FriendId> = h.model.store.friends().iter().map(|f| f.id).collect();
    assert_eq!(ids.len(), 6, "duplicate names still get distinct ids");
}

/// Given the add form with an empty name or an empty image
/// When Enter is pressed
/// Then nothing is added and the form stays open
#[test]
fn test_add_friend_with_blank_field_is_noop() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('a'));
    h.press(KeyCode::Enter);
    assert_eq!(h.model.store.friends().len(), 3);
    assert!(h.model.store.is_add_friend_open());

    // Name filled, image cleared.
    h.type_str("Dana");
    h.press(KeyCode::Tab);
    for _ in 0..64 {
        h.press(KeyCode::Backspace);
    }
    h.press(KeyCode::Enter);

    assert_eq!(h.model.store.friends().len(), 3);
    assert!(h.model.store.is_add_friend_open());
    let draft = h.model.add_friend.as_ref().unwrap();
    assert_eq!(draft.name, "Dana", "draft is kept after a rejected submit");
    assert!(draft.image.is_empty());
    assert!(h.model.notification.is_none());
}

#[test]
fn test_only_empty_fields_are_rejected() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('a'));
    h.type_str(" ");
    h.press(KeyCode::Enter);
    assert_eq!(h.model.store.friends().len(), 4);
    assert!(!h.model.store.is_add_friend_open());
}

#[test]
fn test_add_form_uses_configured_avatar_url() {
    let mut h = Harness::with_config(splitbill::config::Config {
        avatar_url: "https://example.com/a.png".to_string(),
        ..empty_config()
    });
    h.press(KeyCode::Char('a'));
    h.type_str("Zoe");
    h.press(KeyCode::Enter);

    let friends = h.model.store.friends();
    assert_eq!(friends.len(), 1);
    assert!(friends[0]
        .image
        .starts_with("https://example.com/a.png?="));
}

/// Given no selection
/// When a friend is toggled twice
/// Then the first toggle selects it and the second clears it
#[test]
fn test_toggle_selection_selects_then_clears() {
    let mut h = Harness::new();
    let sarah = h.id_of("Sarah");

    h.toggle("Sarah");
    assert_eq!(h.model.store.selected(), Some(sarah));
    assert_eq!(h.model.focus, Focus::SplitBill);

    h.toggle("Sarah");
    assert_eq!(h.model.store.selected(), None);
    assert!(h.model.split_bill.is_none());
}

#[test]
fn test_selecting_another_friend_moves_selection() {
    let mut h = Harness::new();
    h.toggle("Clark");
    h.toggle("Anthony");
    assert_eq!(h.model.store.selected(), Some(h.id_of("Anthony")));
}

#[test]
fn test_selection_and_add_form_asymmetry() {
    let mut h = Harness::new();
    h.toggle("Clark");
    h.press(KeyCode::BackTab);
    h.press(KeyCode::Char('a'));

    // Opening the add form leaves the selection alone.
    assert!(h.model.store.is_add_friend_open());
    assert_eq!(h.model.store.selected(), Some(h.id_of("Clark")));

    // Selecting closes the add form.
    h.toggle("Sarah");
    assert!(!h.model.store.is_add_friend_open());
    assert!(h.model.add_friend.is_none());
}

/// The status line depends only on the sign of the balance.
#[test]
fn test_status_line_follows_balance_sign() {
    let cases = [
        (-7.0, "You owe Kim 7€"),
        (-0.5, "You owe Kim 0.5€"),
        (20.0, "Kim owes you 20€"),
        (12.25, "Kim owes you 12.25€"),
        (0.0, "You and Kim are even"),
    ];
    for (balance, expected) in cases {
        let friend = Friend::new(FriendId::Seed(1), "Kim", "img", balance);
        assert_eq!(friend.status().message("Kim", "€"), expected);
    }

    assert_eq!(BalanceStatus::from_balance(-3.0), BalanceStatus::YouOwe(3.0));
    assert_eq!(BalanceStatus::from_balance(3.0), BalanceStatus::OwesYou(3.0));
}

#[test]
fn test_snapshot_status_lines_for_seed_friends() {
    let h = Harness::new();
    let snap = h.model.snapshot();
    let lines: Vec<&str> = snap.friends.iter().map(|f| f.status_text.as_str()).collect();
    assert_eq!(
        lines,
        ["You owe Clark 7€", "Sarah owes you 20€", "You and Anthony are even"]
    );
}

#[test]
fn test_store_error_becomes_notification() {
    let mut h = Harness::new();
    update(&mut h.model, Message::BillSplit(10.0));

    let n = h.model.notification.as_ref().unwrap();
    assert!(n.message.contains("No friend selected"));
    assert_eq!(h.balance_of("Clark"), -7.0);
}
