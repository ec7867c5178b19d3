//! Split bill integration tests: input rules, submission and draft lifecycle.

use crossterm::event::KeyCode;

use splitbill::forms::{Payer, SplitBillField};
use splitbill::tea::Focus;

use crate::fixtures::Harness;

/// Given Sarah (balance 20) selected
/// When the user pays a bill of 100 with an own expense of 40
/// Then Sarah's balance becomes 60 and the selection clears
#[test]
fn test_user_pays_adds_user_expense() {
    let mut h = Harness::new();
    h.fill_split("Sarah", "100", "40");
    h.press(KeyCode::Enter);

    assert_eq!(h.balance_of("Sarah"), 60.0);
    assert_eq!(h.model.store.selected(), None);
    assert!(h.model.split_bill.is_none());
    assert_eq!(h.model.focus, Focus::List);
}

/// Given Sarah (balance 20) selected
/// When the friend pays a bill of 100 with an own expense of 40
/// Then the friend's share is 60 and Sarah's balance becomes -40
#[test]
fn test_friend_pays_subtracts_friend_share() {
    let mut h = Harness::new();
    h.fill_split("Sarah", "100", "40");
    assert_eq!(h.model.split_bill.as_ref().unwrap().paid_by_friend(), 60.0);

    h.press(KeyCode::Right);
    assert_eq!(h.model.split_bill.as_ref().unwrap().payer, Payer::Friend);
    h.press(KeyCode::Enter);

    assert_eq!(h.balance_of("Sarah"), -40.0);
    assert_eq!(h.model.store.selected(), None);
}

#[test]
fn test_split_touches_only_selected_friend() {
    let mut h = Harness::new();
    h.fill_split("Clark", "30", "10");
    h.press(KeyCode::Enter);

    assert_eq!(h.balance_of("Clark"), 3.0);
    assert_eq!(h.balance_of("Sarah"), 20.0);
    assert_eq!(h.balance_of("Anthony"), 0.0);
}

#[test]
fn test_split_success_notification() {
    let mut h = Harness::new();
    h.fill_split("Anthony", "50", "25");
    h.press(KeyCode::Enter);

    let n = h.model.notification.clone().unwrap();
    assert_eq!(n.message, "Split applied with Anthony (25€)");

    h.press(KeyCode::Down);
    assert!(h.model.notification.is_none());
}

/// Given a bill of 100 and an expense of 40
/// When a keystroke would push the expense above the bill
/// Then the expense keeps its previous value
#[test]
fn test_user_expense_above_bill_rejected() {
    let mut h = Harness::new();
    h.toggle("Clark");
    h.type_str("100");
    h.press(KeyCode::Tab);
    h.type_str("40");
    h.type_str("0");

    let draft = h.model.split_bill.as_ref().unwrap();
    assert_eq!(draft.paid_by_user_text(), "40");
    assert_eq!(draft.field, SplitBillField::UserExpense);
}

#[test]
fn test_non_numeric_input_rejected() {
    let mut h = Harness::new();
    h.toggle("Clark");
    h.type_str("1a2-b");
    assert_eq!(h.model.split_bill.as_ref().unwrap().bill_text(), "12");
}

#[test]
fn test_empty_or_zero_split_does_nothing() {
    let mut h = Harness::new();
    h.toggle("Clark");
    h.press(KeyCode::Enter);
    assert_eq!(h.model.store.selected(), Some(h.id_of("Clark")));

    h.type_str("10");
    h.press(KeyCode::Tab);
    h.type_str("0");
    h.press(KeyCode::Enter);

    assert_eq!(h.model.store.selected(), Some(h.id_of("Clark")));
    assert_eq!(h.balance_of("Clark"), -7.0);
    assert!(h.model.notification.is_none());
}

/// Given a partially filled draft for Clark
/// When the selection moves to Sarah and back
/// Then each new form starts from defaults
#[test]
fn test_switching_selection_discards_draft() {
    let mut h = Harness::new();
    h.fill_split("Clark", "80", "30");
    h.press(KeyCode::Char(' '));
    assert_eq!(h.model.split_bill.as_ref().unwrap().payer, Payer::Friend);

    h.toggle("Sarah");
    let draft = h.model.split_bill.as_ref().unwrap();
    assert_eq!(draft.friend_id(), h.id_of("Sarah"));
    assert_eq!(draft.bill_text(), "");
    assert_eq!(draft.paid_by_user_text(), "");
    assert_eq!(draft.payer, Payer::User);

    h.type_str("5");
    h.toggle("Clark");
    assert_eq!(h.model.split_bill.as_ref().unwrap().bill_text(), "");
}

#[test]
fn test_draft_survives_focus_round_trip() {
    let mut h = Harness::new();
    h.toggle("Clark");
    h.type_str("42");
    h.press(KeyCode::BackTab);
    h.press(KeyCode::Down);
    h.press(KeyCode::Tab);

    assert_eq!(h.model.focus, Focus::SplitBill);
    assert_eq!(h.model.split_bill.as_ref().unwrap().bill_text(), "42");
}

#[test]
fn test_closing_split_panel_clears_selection() {
    let mut h = Harness::new();
    h.fill_split("Sarah", "10", "5");
    assert!(!h.press(KeyCode::Esc));

    assert_eq!(h.model.store.selected(), None);
    assert_eq!(h.balance_of("Sarah"), 20.0);

    // A second Esc from the list quits.
    assert!(h.press(KeyCode::Esc));
}
