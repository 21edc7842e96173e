mod api;
mod app;
mod config;
mod handlers;
mod model;
mod services;
mod session;
mod state;
mod ui;

use app::App;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{error::Error, io, time::Duration};
use tokio::sync::mpsc;

use api::{ApiEvent, ApiHandle};
use session::Session;
use state::{Route, TICK_MS};

/// Application events
enum AppEvent {
    Terminal(CEvent),
    Api(ApiEvent),
    Tick,
}

fn init_logging() {
    // Logs go to a file: stdout belongs to the terminal UI.
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let filename = format!("hong_board_{}.log", chrono::Local::now().format("%Y%m%d"));
    let path = std::path::Path::new(&home).join(filename);
    if let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(path) {
        use tracing_subscriber::EnvFilter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(file)
            .with_ansi(false)
            .try_init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    config::init_config();
    init_logging();

    // Enable terminal raw mode
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create event loop channels
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (api_tx, mut api_rx) = mpsc::unbounded_channel::<ApiEvent>();

    let api = {
        let cfg = config::config();
        tracing::info!(base_url = %cfg.api_base_url, "starting client");
        ApiHandle::new(cfg.api_base_url.clone(), cfg.offline_fallback, api_tx)
    };

    let session = Session::load(Session::default_path());
    let mut app = App::new(api, session);
    // A persisted login goes straight to the board.
    if app.session.is_logged_in() {
        app.navigate(Route::PostList);
    }
    if config::config().offline_fallback {
        app.set_notification(
            "오프라인 대체 모드가 활성화되어 있습니다.",
            state::Severity::Info,
        );
    }

    // Spawn terminal event handler
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;

            // Check for terminal events (non-blocking)
            if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if event_tx_clone.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
            }

            // Send tick event
            if event_tx_clone.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Forward request completions into the event loop
    let event_tx_clone = event_tx.clone();
    tokio::spawn(async move {
        while let Some(msg) = api_rx.recv().await {
            if event_tx_clone.send(AppEvent::Api(msg)).is_err() {
                break;
            }
        }
    });

    // Main application loop
    while !app.ui.should_quit {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if let Some(event) = event_rx.recv().await {
            match event {
                AppEvent::Terminal(terminal_event) => {
                    if let CEvent::Key(key) = terminal_event {
                        handlers::handle_key_event(&mut app, key);
                    }
                }
                AppEvent::Api(api_event) => {
                    app.handle_api_event(api_event);
                }
                AppEvent::Tick => {
                    app.on_tick();
                }
            }
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
