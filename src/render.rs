use std::sync::atomic::{AtomicU64, Ordering};

use crate::forms::{AddFriendField, Payer, SplitBillField};
use crate::friend::{BalanceStatus, FriendId};
use crate::tea::{Focus, Notification};

/// One row of the friend list.
#[derive(Debug, Clone)]
pub struct FriendView {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub status: BalanceStatus,
    pub status_text: String,
    pub is_selected: bool,
}

impl FriendView {
    /// Label of the row's toggle button.
    pub fn button_label(&self) -> &'static str {
        if self.is_selected {
            "Close"
        } else {
            "Select"
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddFriendView {
    pub name: String,
    pub image: String,
    pub field: AddFriendField,
}

#[derive(Debug, Clone)]
pub struct SplitBillView {
    pub friend_name: String,
    pub bill: String,
    pub paid_by_user: String,
    pub paid_by_friend: f64,
    pub payer: Payer,
    pub field: SplitBillField,
}

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Everything the UI needs to draw one frame.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    pub friends: Vec<FriendView>,
    pub cursor: usize,
    pub focus: Focus,
    /// `Some` while the add-friend form is open.
    pub add_friend: Option<AddFriendView>,
    /// `Some` while a friend is selected.
    pub split_bill: Option<SplitBillView>,
    pub notification: Option<Notification>,
    pub show_keymap: bool,
    pub currency: String,
}

impl RenderState {
    /// Label of the button under the friend list.
    pub fn add_friend_button_label(&self) -> &'static str {
        if self.add_friend.is_some() {
            "Close"
        } else {
            "Add Friend"
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            friends: Vec::new(),
            cursor: 0,
            focus: Focus::List,
            add_friend: None,
            split_bill: None,
            notification: None,
            show_keymap: false,
            currency: crate::config::DEFAULT_CURRENCY.to_string(),
        }
    }
}
