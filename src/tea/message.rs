//! Inputs to the update function.

use crossterm::event::KeyEvent;

use crate::friend::{Friend, FriendId};

#[derive(Debug, Clone)]
pub enum Message {
    // Terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    /// The "Add Friend" / "Close" button under the list.
    ToggleAddFriend,
    /// The "Select" / "Close" button on a friend row.
    ToggleSelection(FriendId),

    // Raised by the forms on a valid submit
    FriendAdded(Friend),
    /// Signed change for the selected friend's balance.
    BillSplit(f64),
}
