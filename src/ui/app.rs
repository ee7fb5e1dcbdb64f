//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::charts::PanelSet;
use crate::runtime::WorkerChannels;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub api_url: String,
    pub refresh_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, api_url: String, refresh_interval: Duration) -> Self {
        Self {
            with_background_color,
            api_url,
            refresh_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Shown until the first refresh outcome or a key press.
    Splash,
    /// Charts, search and activity log.
    Dashboard,
}

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
    /// The search box changed; forward its contents to the search worker.
    Query(String),
}

/// Application state
pub struct App {
    current_screen: Screen,
    state: DashboardState,
    channels: WorkerChannels,
    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    pub fn new(
        panels: PanelSet,
        channels: WorkerChannels,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state: DashboardState::new(panels, Instant::now(), ui_config),
            channels,
            shutdown_sender,
        }
    }

    /// Pull everything the workers have produced so far.
    pub fn drain_workers(&mut self) {
        while let Ok(event) = self.channels.event_receiver.try_recv() {
            self.state.add_event(event);
        }
        while let Ok(update) = self.channels.update_receiver.try_recv() {
            self.state.apply_update(update);
        }
        self.state.update();

        if self.current_screen == Screen::Splash && self.state.last_refresh().is_some() {
            self.current_screen = Screen::Dashboard;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Continue;
        }

        if self.current_screen == Screen::Splash {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return KeyOutcome::Quit;
            }
            // Any other key skips the splash screen
            self.current_screen = Screen::Dashboard;
            return KeyOutcome::Continue;
        }

        let search = &mut self.state.search;
        if search.focused {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    search.focused = false;
                    KeyOutcome::Continue
                }
                KeyCode::Backspace => {
                    if search.input.pop().is_some() {
                        KeyOutcome::Query(search.input.clone())
                    } else {
                        KeyOutcome::Continue
                    }
                }
                KeyCode::Char(c) => {
                    search.input.push(c);
                    KeyOutcome::Query(search.input.clone())
                }
                _ => KeyOutcome::Continue,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Char('/') => {
                search.focused = true;
                KeyOutcome::Continue
            }
            _ => KeyOutcome::Continue,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.drain_workers();
        terminal.draw(|f| render(f, &app))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match app.handle_key(key) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Quit => {
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                    KeyOutcome::Query(text) => {
                        let _ = app.channels.query_sender.send(text).await;
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.state.api_url),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}
