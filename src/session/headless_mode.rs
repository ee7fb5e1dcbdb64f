//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::workers::{DashboardUpdate, LatestOnly};
use std::error::Error;

/// Turns worker updates into console lines, dropping stale ones.
#[derive(Debug, Default)]
pub struct UpdatePrinter {
    refresh_gate: LatestOnly,
    search_gate: LatestOnly,
}

impl UpdatePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The line to print for `update`, or `None` if it is stale.
    pub fn line_for(&mut self, update: &DashboardUpdate) -> Option<String> {
        let gate = if update.is_search() {
            &mut self.search_gate
        } else {
            &mut self.refresh_gate
        };
        if !gate.accept(update.seq()) {
            return None;
        }

        let line = match update {
            DashboardUpdate::Refreshed { seq, view } => {
                format!("Dashboard #{}: {}", seq, view.summary())
            }
            DashboardUpdate::RefreshFailed { seq, message } => {
                format!("Dashboard #{} unchanged: {}", seq, message)
            }
            DashboardUpdate::SearchCleared { .. } => "Search cleared".to_string(),
            DashboardUpdate::SearchResults { query, hits, .. } => {
                format!("{} result(s) for \"{}\"", hits.len(), query)
            }
            DashboardUpdate::SearchFailed { query, .. } => {
                format!("Search for \"{}\" failed", query)
            }
        };
        Some(line)
    }
}

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. Event loop management
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment.api_url());

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut printer = UpdatePrinter::new();

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.channels.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            Some(update) = session.channels.update_receiver.recv() => {
                if let Some(line) = printer.line_for(&update) {
                    println!("{}", line);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
