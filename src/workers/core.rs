//! Core worker utilities and traits

use crate::api::types::MessageRecord;
use crate::charts::DashboardView;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_refresh_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::refresher_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_search_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::searcher_with_level(message, event_type, log_level))
            .await;
    }
}

/// Data pushed from the workers to whoever renders it.
///
/// Every update carries the sequence number of the request that produced it;
/// the consumer drops anything older than what it already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardUpdate {
    Refreshed {
        seq: u64,
        view: DashboardView,
    },
    RefreshFailed {
        seq: u64,
        message: String,
    },
    SearchCleared {
        seq: u64,
    },
    SearchResults {
        seq: u64,
        query: String,
        hits: Vec<MessageRecord>,
    },
    SearchFailed {
        seq: u64,
        query: String,
        message: String,
    },
}

impl DashboardUpdate {
    pub fn seq(&self) -> u64 {
        match self {
            DashboardUpdate::Refreshed { seq, .. }
            | DashboardUpdate::RefreshFailed { seq, .. }
            | DashboardUpdate::SearchCleared { seq }
            | DashboardUpdate::SearchResults { seq, .. }
            | DashboardUpdate::SearchFailed { seq, .. } => *seq,
        }
    }

    /// Search updates and refresh updates are numbered independently.
    pub fn is_search(&self) -> bool {
        matches!(
            self,
            DashboardUpdate::SearchCleared { .. }
                | DashboardUpdate::SearchResults { .. }
                | DashboardUpdate::SearchFailed { .. }
        )
    }
}

/// Sender half used by workers to publish updates
#[derive(Clone)]
pub struct UpdateSender {
    sender: mpsc::Sender<DashboardUpdate>,
}

impl UpdateSender {
    pub fn new(sender: mpsc::Sender<DashboardUpdate>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, update: DashboardUpdate) {
        let _ = self.sender.send(update).await;
    }
}
