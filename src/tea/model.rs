//! Model for the TEA pattern.
//!
//! The Model is plain data: the friend store, the two form drafts and a few
//! bits of UI state. No channels, no terminal handles.

use crate::config::Config;
use crate::forms::{AddFriendDraft, SplitBillDraft};
use crate::friend::FriendId;
use crate::render::{next_version, AddFriendView, FriendView, RenderState, SplitBillView};
use crate::store::FriendStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Displayed in red with an "Error:" prefix
    Error,
    /// Displayed in green
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Which panel receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    AddFriend,
    SplitBill,
}

pub struct Model {
    pub store: FriendStore,
    /// Keyboard cursor in the friend list (not the selection).
    pub cursor: usize,
    pub focus: Focus,

    /// Present exactly while the add-friend form is open.
    pub add_friend: Option<AddFriendDraft>,
    /// Present exactly while a friend is selected, and always for that friend.
    pub split_bill: Option<SplitBillDraft>,

    pub notification: Option<Notification>,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    pub config: Config,
}

impl Model {
    pub fn new(store: FriendStore, config: Config) -> Self {
        let mut model = Self {
            store,
            cursor: 0,
            focus: Focus::default(),
            add_friend: None,
            split_bill: None,
            notification: None,
            show_keymap: false,
            dirty: true,
            config,
        };
        model.sync_forms();
        model
    }

    pub fn from_config(config: Config) -> Self {
        let store = if config.seed_friends {
            FriendStore::seeded()
        } else {
            FriendStore::default()
        };
        Self::new(store, config)
    }

    /// Bring the form drafts in line with the store after a mutation.
    ///
    /// The split draft is keyed by the selected friend's id: selecting a
    /// different friend always starts from an empty draft.
    pub fn sync_forms(&mut self) {
        match (self.store.is_add_friend_open(), self.add_friend.is_some()) {
            (true, false) => {
                self.add_friend = Some(AddFriendDraft::new(self.config.avatar_url.clone()))
            }
            (false, true) => self.add_friend = None,
            _ => {}
        }

        self.split_bill = match (self.store.selected(), self.split_bill.take()) {
            (Some(id), Some(draft)) if draft.friend_id() == id => Some(draft),
            (Some(id), _) => Some(SplitBillDraft::new(id)),
            (None, _) => None,
        };

        let focus_valid = match self.focus {
            Focus::List => true,
            Focus::AddFriend => self.add_friend.is_some(),
            Focus::SplitBill => self.split_bill.is_some(),
        };
        if !focus_valid {
            self.focus = Focus::List;
        }

        let len = self.store.friends().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn cursor_friend_id(&self) -> Option<FriendId> {
        self.store.friends().get(self.cursor).map(|f| f.id)
    }

    /// Immutable snapshot for the render thread. Each snapshot carries a new
    /// version number so the renderer can skip unchanged frames.
    pub fn snapshot(&self) -> RenderState {
        let currency = &self.config.currency;

        let friends = self
            .store
            .friends()
            .iter()
            .map(|f| {
                let status = f.status();
                FriendView {
                    id: f.id,
                    name: f.name.clone(),
                    image: f.image.clone(),
                    status,
                    status_text: status.message(&f.name, currency),
                    is_selected: self.store.is_selected(&f.id),
                }
            })
            .collect();

        let add_friend = self.add_friend.as_ref().map(|d| AddFriendView {
            name: d.name.clone(),
            image: d.image.clone(),
            field: d.field,
        });

        let split_bill = self.split_bill.as_ref().and_then(|d| {
            let friend = self.store.get(&d.friend_id())?;
            Some(SplitBillView {
                friend_name: friend.name.clone(),
                bill: d.bill_text().to_string(),
                paid_by_user: d.paid_by_user_text().to_string(),
                paid_by_friend: d.paid_by_friend(),
                payer: d.payer,
                field: d.field,
            })
        });

        RenderState {
            version: next_version(),
            friends,
            cursor: self.cursor,
            focus: self.focus,
            add_friend,
            split_bill,
            notification: self.notification.clone(),
            show_keymap: self.show_keymap,
            currency: currency.clone(),
        }
    }
}
