//! Test fixtures for integration tests.
//!
//! Provides a harness around a seeded `Model` plus key helpers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use splitbill::app::process;
use splitbill::config::Config;
use splitbill::tea::{Message, Model};
use splitbill::FriendId;

/// A model seeded with Clark (-7), Sarah (20) and Anthony (0).
pub struct Harness {
    pub model: Model,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            model: Model::from_config(config),
        }
    }

    /// Send one key press. Returns true if the app asked to quit.
    pub fn press(&mut self, code: KeyCode) -> bool {
        process(
            &mut self.model,
            Message::Key(KeyEvent::new(code, KeyModifiers::empty())),
        )
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Move the list cursor to `name` and toggle its selection.
    pub fn toggle(&mut self, name: &str) {
        self.model.cursor = self.index_of(name);
        self.model.focus = splitbill::tea::Focus::List;
        self.press(KeyCode::Enter);
    }

    pub fn index_of(&self, name: &str) -> usize {
        self.model
            .store
            .friends()
            .iter()
            .position(|f| f.name == name)
            .unwrap_or_else(|| panic!("no friend named {name}"))
    }

    pub fn id_of(&self, name: &str) -> FriendId {
        self.model.store.friends()[self.index_of(name)].id
    }

    pub fn balance_of(&self, name: &str) -> f64 {
        self.model.store.friends()[self.index_of(name)].balance
    }

    /// Select `name` and fill the split form. The cursor is left on the
    /// payer field.
    pub fn fill_split(&mut self, name: &str, bill: &str, user: &str) {
        self.toggle(name);
        self.type_str(bill);
        self.press(KeyCode::Tab);
        self.type_str(user);
        self.press(KeyCode::Tab);
    }
}

/// Config without the seed friends.
pub fn empty_config() -> Config {
    Config {
        seed_friends: false,
        ..Config::default()
    }
}
