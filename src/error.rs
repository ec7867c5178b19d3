use thiserror::Error;

use crate::friend::FriendId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No friend selected")]
    NoSelection,

    #[error("Friend not found: {0}")]
    FriendNotFound(FriendId),

    #[error("Logic thread panicked")]
    LogicThreadPanicked,
}

pub type Result<T> = std::result::Result<T, Error>;
