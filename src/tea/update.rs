//! Update function for the TEA pattern.
//!
//! Key presses are translated into edits on the focused form or into one of
//! the controller messages (`ToggleAddFriend`, `ToggleSelection`,
//! `FriendAdded`, `BillSplit`), which are then applied to the store.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::forms::{AddFriendField, SplitBillField};
use crate::friend::format_amount;
use crate::{slog, slog_debug, slog_error, slog_trace};

use super::command::Command;
use super::message::Message;
use super::model::{Focus, Model, Notification, NotificationLevel};

fn set_error(model: &mut Model, message: String) {
    slog_error!("UI Error: {}", message);
    model.notification = Some(Notification {
        level: NotificationLevel::Error,
        message,
    });
    model.dirty = true;
}

fn set_info(model: &mut Model, message: String) {
    model.notification = Some(Notification {
        level: NotificationLevel::Info,
        message,
    });
    model.dirty = true;
}

/// Model + Message → Commands.
///
/// Mutates the model, marks it dirty when the view changed and returns the
/// side effects the runtime has to perform.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return cmds;
            }
            slog_trace!("Message::Key {:?} focus={:?}", key.code, model.focus);
            model.notification = None;
            model.dirty = true;

            let follow_up = if key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c')
            {
                cmds.push(Command::Quit);
                None
            } else {
                match model.focus {
                    Focus::List => update_list_focus(model, key, &mut cmds),
                    Focus::AddFriend => update_add_friend_focus(model, key),
                    Focus::SplitBill => update_split_bill_focus(model, key),
                }
            };

            if let Some(next) = follow_up {
                cmds.extend(update(model, next));
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true;
        }

        Message::ToggleAddFriend => {
            let open = model.store.toggle_add_friend_form();
            slog_debug!("Message::ToggleAddFriend open={}", open);
            if open {
                model.focus = Focus::AddFriend;
            }
            model.dirty = true;
        }

        Message::ToggleSelection(id) => {
            let selected = model.store.toggle_selection(id);
            slog_debug!(
                "Message::ToggleSelection id={} selected={}",
                id.short(),
                selected.is_some()
            );
            model.focus = if selected.is_some() {
                Focus::SplitBill
            } else {
                Focus::List
            };
            model.dirty = true;
        }

        Message::FriendAdded(friend) => {
            slog!(
                "Message::FriendAdded name={} id={}",
                friend.name,
                friend.id.short()
            );
            let name = friend.name.clone();
            model.store.add_friend(friend);
            model.cursor = model.store.friends().len() - 1;
            model.focus = Focus::List;
            set_info(model, format!("Added {}", name));
        }

        Message::BillSplit(delta) => match model.store.apply_split(delta) {
            Ok(friend) => {
                slog!(
                    "Message::BillSplit name={} delta={} balance={}",
                    friend.name,
                    delta,
                    friend.balance
                );
                model.focus = Focus::List;
                set_info(
                    model,
                    format!(
                        "Split applied with {} ({}{})",
                        friend.name,
                        format_amount(delta),
                        model.config.currency
                    ),
                );
            }
            Err(e) => set_error(model, format!("Cannot split bill: {}", e)),
        },
    }

    model.sync_forms();
    cmds
}

fn update_list_focus(
    model: &mut Model,
    key: KeyEvent,
    cmds: &mut Vec<Command>,
) -> Option<Message> {
    let len = model.store.friends().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if len > 0 {
                model.cursor = (model.cursor + 1) % len;
            }
        }

        KeyCode::Char('k') | KeyCode::Up => {
            if len > 0 {
                model.cursor = model.cursor.checked_sub(1).unwrap_or(len - 1);
            }
        }

        KeyCode::Enter | KeyCode::Char(' ') => {
            return model.cursor_friend_id().map(Message::ToggleSelection);
        }

        KeyCode::Char('a') => return Some(Message::ToggleAddFriend),

        // Panel order is List → AddFriend → SplitBill. BackTab walks it backwards.
        KeyCode::Tab => {
            if model.add_friend.is_some() {
                model.focus = Focus::AddFriend;
            } else if model.split_bill.is_some() {
                model.focus = Focus::SplitBill;
            }
        }

        KeyCode::BackTab => {
            if model.split_bill.is_some() {
                model.focus = Focus::SplitBill;
            } else if model.add_friend.is_some() {
                model.focus = Focus::AddFriend;
            }
        }

        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
        }

        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        _ => {}
    }

    None
}

fn update_add_friend_focus(model: &mut Model, key: KeyEvent) -> Option<Message> {
    // Closing the form discards the draft.
    if key.code == KeyCode::Esc {
        return Some(Message::ToggleAddFriend);
    }

    let draft = model.add_friend.as_mut()?;
    match key.code {
        KeyCode::Enter => {
            // Blank fields: stay open, keep the draft.
            return draft.submit().map(Message::FriendAdded);
        }
        // Back out to the list from the first field. The form stays open.
        KeyCode::BackTab if draft.field == AddFriendField::Name => model.focus = Focus::List,
        KeyCode::Tab | KeyCode::BackTab => draft.next_field(),
        KeyCode::Backspace => draft.backspace(),
        KeyCode::Char(c) => draft.push_char(c),
        _ => {}
    }

    None
}

fn update_split_bill_focus(model: &mut Model, key: KeyEvent) -> Option<Message> {
    let draft = model.split_bill.as_mut()?;

    match key.code {
        // Same as pressing "Close" on the selected row.
        KeyCode::Esc => return Some(Message::ToggleSelection(draft.friend_id())),

        KeyCode::Enter => return draft.submit().map(Message::BillSplit),

        KeyCode::Tab => draft.next_field(),
        KeyCode::BackTab if draft.field == SplitBillField::Bill => model.focus = Focus::List,
        KeyCode::BackTab => draft.prev_field(),

        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if draft.field == SplitBillField::Payer =>
        {
            draft.toggle_payer();
        }

        KeyCode::Backspace => draft.backspace(),

        KeyCode::Char(c) => {
            if !draft.push_char(c) {
                slog_debug!("Split bill input rejected: {:?}", c);
            }
        }

        _ => {}
    }

    None
}
