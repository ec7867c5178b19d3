use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Sender, TrySendError};
use crossterm::event::{self, Event};

use crate::config::Config;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{slog_debug, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Owns the model, turns terminal events into messages and publishes
/// snapshots to the render thread.
pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        let mut model = Model::from_config(config);
        slog_debug!(
            "LogicThread::run friends={} currency={}",
            model.store.friends().len(),
            model.config.currency
        );

        while !shutdown.load(Ordering::Relaxed) {
            send_state(&state_tx, &mut model);

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let msg = match event::read()? {
                Event::Key(key) => Message::Key(key),
                Event::Resize(w, h) => Message::Resize(w, h),
                _ => continue,
            };

            if process(&mut model, msg) {
                slog_debug!("LogicThread quitting");
                shutdown.store(true, Ordering::Relaxed);
                break;
            }
        }

        Ok(())
    }
}

/// Apply one message. Returns true when the app should quit.
pub fn process(model: &mut Model, msg: Message) -> bool {
    update(model, msg)
        .into_iter()
        .any(execute_command)
}

fn execute_command(cmd: Command) -> bool {
    match cmd {
        Command::Quit => {
            slog_debug!("Command::Quit");
            true
        }
    }
}

/// Never blocks. While the renderer still holds the previous snapshot the
/// model stays dirty and the send is retried on the next tick.
fn send_state(state_tx: &Sender<RenderState>, model: &mut Model) {
    if !model.dirty {
        return;
    }
    match state_tx.try_send(model.snapshot()) {
        Ok(()) | Err(TrySendError::Disconnected(_)) => model.dirty = false,
        Err(TrySendError::Full(_)) => {}
    }
}
