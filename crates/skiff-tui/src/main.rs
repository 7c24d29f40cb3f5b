//! skiff - a personal start page for the terminal.
//!
//! Renders a home view with live widgets (clock, weather, now-playing) and
//! a keyboard-driven search overlay that resolves short commands into
//! destination URLs. The resolution engine lives in skiff-core; this binary
//! owns the terminal, the event loop and the navigation boundary.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use skiff_core::config::{Config, Directories, SearchConfig};
use skiff_core::overlay::SuggestionPass;
use skiff_core::parse::classify;
use skiff_core::registry::CommandRegistry;
use skiff_core::suggest::{DdgAutocomplete, suggest};
use skiff_core::widgets::{PlayerFeed, player_feed, weather_channel};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use std::io;
use std::sync::Arc;
use std::time::Duration;

mod app;
mod cli;
mod opener;
mod render;

use app::App;
use cli::{Cli, Commands};
use render::{render_home, render_overlay};

/// Frame cadence: drives the clock, the live progress bar and the
/// stray-trigger check of the overlay.
const TICK: Duration = Duration::from_millis(200);

/// Set up logging with file output. The TUI owns the terminal, so logs go
/// to a file instead.
fn setup_logging(debug_flag: bool) {
    let level = if debug_flag || cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = tracing_appender::rolling::never("/tmp", "skiff.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    std::mem::forget(guard);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let dirs = Directories::new();
    dirs.ensure_exists()?;
    let config = Config::load(&dirs.config_file)?;
    let registry = CommandRegistry::load(&dirs.commands_file)?;

    match cli.command {
        Some(Commands::Query { query }) => {
            run_query(&query, &registry, &config.search);
            Ok(())
        }
        Some(Commands::Commands) => {
            list_commands(&registry);
            Ok(())
        }
        Some(Commands::Tui) | None => run_tui(registry, config).await,
    }
}

/// Resolve one query the way the overlay would and print the outcome.
fn run_query(query: &str, registry: &CommandRegistry, config: &SearchConfig) {
    match classify(query, registry, config) {
        Some(resolved) => {
            println!("{}", resolved.url);
            if let Some(key) = &resolved.key {
                println!("  command: {key}");
            }
            if let Some(search) = &resolved.search {
                println!("  search:  {search}");
            }
            if let Some(path) = &resolved.path {
                println!("  path:    {path}");
            }
        }
        None => println!("(empty query)"),
    }
}

fn list_commands(registry: &CommandRegistry) {
    println!("\nCommands:\n=========\n");
    for (key, entry) in registry.visible() {
        let name = entry.name.as_deref().unwrap_or(key);
        println!("  {key:<10} {name:<14} {}", entry.url);
    }
    let hidden = registry.len() - registry.visible().count();
    if hidden > 0 {
        println!("\n  ({hidden} hidden sub-commands not listed)");
    }
    println!();
}

// Terminal setup/teardown wrapper - the loop itself is in event_loop
async fn run_tui(registry: CommandRegistry, config: Config) -> Result<()> {
    let registry = Arc::new(registry);
    let search_config = Arc::new(config.search.clone());
    let ddg = DdgAutocomplete::new()?;

    let weather_rx = weather_channel(&config.widgets)?;
    let player = player_feed(&config.widgets)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, registry, search_config, ddg, weather_rx, player).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    registry: Arc<CommandRegistry>,
    search_config: Arc<SearchConfig>,
    ddg: DdgAutocomplete,
    mut weather_rx: tokio::sync::watch::Receiver<skiff_core::WeatherSnapshot>,
    player: PlayerFeed,
) -> Result<()> {
    let mut app = App::new(registry, search_config);
    let (sugg_tx, mut sugg_rx) = mpsc::unbounded_channel::<(String, Vec<String>)>();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);
    let mut player_rx = player.state.clone();
    let mut weather_alive = true;
    let mut player_alive = true;
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|frame| ui(frame, &app))?;
            needs_render = false;
        }

        tokio::select! {
            Some(event_result) = events.next() => {
                let event = match event_result {
                    Ok(e) => e,
                    Err(e) => {
                        tracing::error!("Event stream error: {e}");
                        continue;
                    }
                };
                let Event::Key(key) = event else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                needs_render = true;
                handle_key(&mut app, key, &sugg_tx, &ddg);
            }

            Some((query, list)) = sugg_rx.recv() => {
                // The staleness guard inside the overlay decides whether
                // this pass still matches the current input.
                if app.overlay.apply_suggestions(&query, &list) {
                    needs_render = true;
                }
            }

            changed = weather_rx.changed(), if weather_alive => {
                if changed.is_ok() {
                    app.weather = weather_rx.borrow_and_update().clone();
                    needs_render = true;
                } else {
                    weather_alive = false;
                }
            }

            changed = player_rx.changed(), if player_alive => {
                if changed.is_ok() {
                    app.player = player_rx.borrow_and_update().clone();
                    app.progress.sync(&app.player);
                    needs_render = true;
                } else {
                    player_alive = false;
                }
            }

            _ = ticker.tick() => {
                app.overlay.frame_tick();
                if app.progress.should_force_refresh(&app.player) {
                    player.request_refresh();
                }
                needs_render = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle one key press. While the overlay is closed any qualifying key
/// opens it; the quit keys are the exception.
fn handle_key(
    app: &mut App,
    key: KeyEvent,
    sugg_tx: &UnboundedSender<(String, Vec<String>)>,
    ddg: &DdgAutocomplete,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if !app.overlay.is_open() {
        match key.code {
            KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('c') if ctrl => app.should_quit = true,
            KeyCode::Char(c) if !ctrl => {
                app.overlay.open_on_trigger();
                if let Some(pass) = app.push_input_char(c) {
                    spawn_suggestion_pass(app, pass, sugg_tx, ddg);
                }
            }
            _ => {
                // Any other keypress opens the overlay; if it contributes
                // no input the next frame tick closes it again.
                app.overlay.open_on_trigger();
            }
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.overlay.close(),
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Enter => {
            if let Some(navigation) = app.overlay.submit() {
                opener::open(&navigation);
            }
        }
        KeyCode::Down => app.overlay.focus_next(),
        KeyCode::Char('n') if ctrl => app.overlay.focus_next(),
        KeyCode::Up => app.overlay.focus_previous(),
        KeyCode::Char('p') if ctrl => app.overlay.focus_previous(),
        KeyCode::BackTab | KeyCode::Tab if shift => app.overlay.focus_previous(),
        KeyCode::Tab => app.overlay.focus_next(),
        KeyCode::Backspace => {
            if let Some(pass) = app.pop_input_char() {
                spawn_suggestion_pass(app, pass, sugg_tx, ddg);
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(pass) = app.push_input_char(c) {
                spawn_suggestion_pass(app, pass, sugg_tx, ddg);
            }
        }
        _ => {}
    }
}

/// Resolve one suggestion pass off the event loop. The result comes back
/// over the channel tagged with the captured query; the overlay applies or
/// discards it there.
fn spawn_suggestion_pass(
    app: &App,
    pass: SuggestionPass,
    sugg_tx: &UnboundedSender<(String, Vec<String>)>,
    ddg: &DdgAutocomplete,
) {
    let registry = Arc::clone(&app.registry);
    let config = Arc::clone(&app.config);
    let source = ddg.clone();
    let tx = sugg_tx.clone();
    tokio::spawn(async move {
        let list = suggest(&pass.resolved, &registry, &config, &source).await;
        let _ = tx.send((pass.query, list));
    });
}

fn ui(frame: &mut Frame, app: &App) {
    render_home(frame, app);
    if app.overlay.is_open() {
        render_overlay(frame, app);
    }
}
