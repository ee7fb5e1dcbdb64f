//! Session setup and initialization

use crate::api::{ApiClient, ApiVariant};
use crate::charts::PanelSet;
use crate::environment::Environment;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::runtime::{WorkerChannels, start_workers};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Resolved settings for one dashboard session
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub environment: Environment,
    pub variant: ApiVariant,
    pub refresh_interval: Duration,
    /// Requested panel identifiers; empty selects every panel.
    pub panels: Vec<String>,
}

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Channels to and from the workers
    pub channels: WorkerChannels,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Server the session polls
    pub environment: Environment,
    /// Panels the refresh loop feeds
    pub panels: PanelSet,
    /// Polling interval (for display purposes)
    pub refresh_interval: Duration,
}

/// Startup events for panel resolution: one error per identifier that did
/// not resolve, then either the enabled panels or a warning that none are.
pub fn panel_events(missing: &[String], panels: &PanelSet) -> Vec<Event> {
    let mut events: Vec<Event> = missing
        .iter()
        .map(|id| {
            Event::session_with_level(
                format!("Panel '{}' not found; it will not be rendered", id),
                EventType::Error,
                LogLevel::Error,
            )
        })
        .collect();
    if panels.is_empty() {
        events.push(Event::session_with_level(
            "No panels enabled; snapshots will be fetched but not drawn".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
    } else {
        let ids: Vec<&str> = panels.iter().map(|panel| panel.id()).collect();
        events.push(Event::session_with_level(
            format!("Rendering panels: {}", ids.join(", ")),
            EventType::Success,
            LogLevel::Info,
        ));
    }
    events
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the API client
/// 2. Resolves the requested panels, logging the ones that do not exist
/// 3. Sets up the shutdown channel
/// 4. Starts the refresh and search workers
pub async fn setup_session(settings: SessionSettings) -> Result<SessionData, Box<dyn Error>> {
    let client = ApiClient::new(settings.environment.clone(), settings.variant)?;

    let (panels, missing) = PanelSet::resolve(settings.variant, &settings.panels);
    let mut startup_events = vec![Event::session_with_level(
        format!(
            "Polling {} every {} ms ({} endpoint)",
            settings.environment.api_url(),
            settings.refresh_interval.as_millis(),
            settings.variant
        ),
        EventType::Waiting,
        LogLevel::Info,
    )];
    startup_events.extend(panel_events(&missing, &panels));

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (channels, join_handles) = start_workers(
        Arc::new(client),
        panels.clone(),
        settings.refresh_interval,
        startup_events,
        &shutdown_sender,
    )
    .await;

    Ok(SessionData {
        channels,
        join_handles,
        shutdown_sender,
        environment: settings.environment,
        panels,
        refresh_interval: settings.refresh_interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_panels_are_logged_as_errors() {
        let requested = ["bogus".to_string(), "top-chats-today".to_string()];
        let (panels, missing) = PanelSet::resolve(ApiVariant::Dashboard, &requested);
        let events = panel_events(&missing, &panels);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].log_level, LogLevel::Error);
        assert!(events[0].msg.contains("bogus"));
        assert_eq!(events[1].log_level, LogLevel::Info);
        assert_eq!(events[1].msg, "Rendering panels: top-chats-today");
    }

    #[test]
    fn test_empty_panel_set_is_warned_about() {
        let (panels, missing) = PanelSet::resolve(ApiVariant::Stats, &["bogus".to_string()]);
        let events = panel_events(&missing, &panels);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].log_level, LogLevel::Warn);
    }
}
