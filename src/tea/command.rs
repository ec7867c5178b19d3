//! Commands returned by `update` for the runtime to execute.

/// Side effects requested by the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the event loop and restore the terminal.
    Quit,
}
