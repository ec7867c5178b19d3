//! The friend collection and everything that mutates it.

use crate::friend::{initial_friends, Friend, FriendId};
use crate::{slog_debug, Error, Result};

/// Friends, the current selection, and whether the add-friend form is open.
#[derive(Debug, Clone, Default)]
pub struct FriendStore {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    show_add_friend: bool,
}

impl FriendStore {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self {
            friends,
            selected: None,
            show_add_friend: false,
        }
    }

    pub fn seeded() -> Self {
        Self::new(initial_friends())
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == *id)
    }

    pub fn selected(&self) -> Option<FriendId> {
        self.selected
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn is_add_friend_open(&self) -> bool {
        self.show_add_friend
    }

    /// Append a friend and close the add-friend form. The caller guarantees a
    /// unique id.
    pub fn add_friend(&mut self, friend: Friend) {
        slog_debug!(
            "FriendStore::add_friend id={} name={}",
            friend.id.short(),
            friend.name
        );
        self.friends.push(friend);
        self.show_add_friend = false;
    }

    /// Select `id`, or clear the selection if it is already selected. Always
    /// closes the add-friend form.
    pub fn toggle_selection(&mut self, id: FriendId) -> Option<FriendId> {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
        self.show_add_friend = false;
        slog_debug!(
            "FriendStore::toggle_selection id={} selected={:?}",
            id.short(),
            self.selected.map(|s| s.short())
        );
        self.selected
    }

    /// Add `delta` to the selected friend's balance and clear the selection.
    ///
    /// Returns the updated friend.
    pub fn apply_split(&mut self, delta: f64) -> Result<Friend> {
        let id = self.selected.take().ok_or(Error::NoSelection)?;
        let pos = self
            .friends
            .iter()
            .position(|f| f.id == id)
            .ok_or(Error::FriendNotFound(id))?;

        let updated = self.friends[pos].with_balance_delta(delta);
        self.friends[pos] = updated.clone();
        slog_debug!(
            "FriendStore::apply_split id={} delta={} balance={}",
            id.short(),
            delta,
            updated.balance
        );
        Ok(updated)
    }

    /// Flip add-friend visibility. Leaves the selection alone.
    pub fn toggle_add_friend_form(&mut self) -> bool {
        self.show_add_friend = !self.show_add_friend;
        self.show_add_friend
    }
}
