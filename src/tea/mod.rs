//! The Elm Architecture (TEA) core for splitbill.
//!
//! - `Model`: all application state, owned by the logic thread
//! - `Message`: key presses and the events forms raise on submit
//! - `Command`: side effects the runtime must perform
//! - `update`: applies one message to the model

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::Command;
pub use message::Message;
pub use model::{Focus, Model, Notification, NotificationLevel};
pub use update::update;
