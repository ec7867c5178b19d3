use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use splitbill::app::LogicThread;
use splitbill::config::Config;
use splitbill::render::RenderState;
use splitbill::tea::Model;
use splitbill::{slog, ui, Error, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// splitbill - keep track of who owes whom, one bill at a time
#[derive(Parser, Debug)]
#[command(name = "splitbill")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    SPLITBILL_DEBUG=1     Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.splitbill/splitbill.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Config file (default: ~/.splitbill/config.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the starting friend list and exit
    Friends {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a config file with the default settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    splitbill::log::init_with_debug(cli.debug);

    let config = Config::load(cli.config.as_deref())?;
    splitbill::log::apply_config(&config);

    match cli.command {
        Some(Command::Friends { json }) => return run_friends(config, json),
        Some(Command::InitConfig { force }) => return run_init_config(cli.config, force),
        None => {}
    }

    slog!("splitbill starting (debug={})", cli.debug);

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle = thread::spawn(move || LogicThread::run(config, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle.join();
    restore_terminal(&mut terminal)?;
    slog!("splitbill stopped");

    result?;
    logic_result.map_err(|_| Error::LogicThreadPanicked)?
}

/// Print the friend list the TUI would start with.
fn run_friends(config: Config, json: bool) -> Result<()> {
    let model = Model::from_config(config);
    let friends = model.store.friends();

    if json {
        println!("{}", serde_json::to_string_pretty(friends)?);
        return Ok(());
    }

    if friends.is_empty() {
        println!("No friends.");
        return Ok(());
    }
    for friend in friends {
        println!(
            "{:<16} {}",
            friend.name,
            friend.status().message(&friend.name, &model.config.currency)
        );
    }
    Ok(())
}

fn run_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => Config::config_path()?,
    };
    if path.exists() && !force {
        println!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }
    Config::default().save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
