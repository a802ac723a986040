//! User Directory TUI - Actor-based user table viewer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use userdir_tui::constants::DEFAULT_LOG_FILE;
use userdir_tui::{telemetry, ui, AppActor, Config, NetworkActor, NetworkCommand, NetworkResponse, RenderState};

/// Spinner frame length
const TICK: Duration = Duration::from_millis(80);

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = Config::default_path();
    let loaded = Config::load_from(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging to file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_name = config
        .log_file
        .file_name()
        .unwrap_or(OsStr::new(DEFAULT_LOG_FILE));
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    if let Err(e) = &loaded {
        tracing::warn!(path = %config_path.display(), error = %e, "Ignoring unreadable config");
    }
    telemetry::report_startup();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (key_tx, key_rx) = mpsc::unbounded_channel::<KeyEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx, config.request_timeout());
    let network_handle = tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(config.users_url.clone(), net_cmd_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(key_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, key_tx, &mut render_rx).await?;

    let _ = app_handle.await;
    let _ = network_handle.await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    key_tx: mpsc::UnboundedSender<KeyEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let started = Instant::now();

    loop {
        let tick = (started.elapsed().as_millis() / TICK.as_millis()) as usize;
        terminal.draw(|f| ui::draw_ui(f, &current_state, tick))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // The app actor maps keys against its own state
                if key.kind == KeyEventKind::Press {
                    let _ = key_tx.send(key);
                }
            }
        }

        // Check for state updates (non-blocking); a closed channel means quit
        loop {
            match render_rx.try_recv() {
                Ok(state) => current_state = state,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
    }
}
