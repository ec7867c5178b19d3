//! Full-frame rendering tests on a `TestBackend`.

use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

use splitbill::render::RenderState;
use splitbill::ui;

use crate::fixtures::Harness;

fn screen(state: &RenderState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, state)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_initial_screen() {
    let h = Harness::new();
    let text = screen(&h.model.snapshot());

    assert!(text.contains("Clark"));
    assert!(text.contains("Sarah owes you 20€"));
    assert!(text.contains("[Select]"));
    assert!(!text.contains("[Close]"));
    assert!(text.contains("[Add Friend]"));
    assert!(text.contains("Select a friend to split a bill."));
}

#[test]
fn test_split_panel_shows_friend_share() {
    let mut h = Harness::new();
    h.fill_split("Sarah", "100", "40");
    let text = screen(&h.model.snapshot());

    assert!(text.contains("Split bill with Sarah"));
    assert!(text.contains("Sarah's expense"));
    assert!(text.contains("60€"));
    assert!(text.contains("[Close]"));
}

#[test]
fn test_add_form_and_close_button() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('a'));
    h.type_str("Dana");
    let text = screen(&h.model.snapshot());

    assert!(text.contains("Add friend"));
    assert!(text.contains("Friend name"));
    assert!(text.contains("Dana"));
    assert!(text.contains("[Close]"));
    assert!(!text.contains("[Add Friend]"));
}

#[test]
fn test_snapshot_versions_increase() {
    let mut h = Harness::new();
    let v1 = h.model.snapshot().version;
    h.press(KeyCode::Down);
    let v2 = h.model.snapshot().version;
    assert!(v2 > v1);
}
