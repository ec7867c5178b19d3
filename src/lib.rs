pub mod config;
pub mod error;
pub mod forms;
pub mod friend;
pub mod log;
pub mod store;

// Logic thread / render thread split
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
pub use friend::{BalanceStatus, Friend, FriendId};
pub use store::FriendStore;
