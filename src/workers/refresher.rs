//! Dashboard refresh loop
//!
//! Fetches a snapshot immediately and then on every tick, shapes it into chart
//! data for the enabled panels, and publishes the result. A slow fetch never
//! delays the next tick; overlapping responses are ordered by their sequence
//! number on the consumer side.

use super::core::{DashboardUpdate, EventSender, UpdateSender};
use super::sequence::RequestSequence;
use crate::api::{ApiVariant, DashboardApi};
use crate::charts::{DashboardView, PanelSet, SnapshotView, StatsView};
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

#[derive(Clone)]
pub struct DashboardRefresher {
    api: Arc<dyn DashboardApi>,
    panels: PanelSet,
    interval: Duration,
    event_sender: EventSender,
    update_sender: UpdateSender,
    sequence: Arc<RequestSequence>,
    classifier: ErrorClassifier,
    /// Sorted unrecognised day values from the latest snapshot.
    reported_unparsed: Arc<Mutex<Vec<String>>>,
}

impl DashboardRefresher {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        panels: PanelSet,
        interval: Duration,
        event_sender: EventSender,
        update_sender: UpdateSender,
    ) -> Self {
        Self {
            api,
            panels,
            interval,
            event_sender,
            update_sender,
            sequence: Arc::new(RequestSequence::new()),
            classifier: ErrorClassifier::new(),
            reported_unparsed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Start polling until shutdown
    pub fn run(self, mut shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut in_flight = JoinSet::new();

            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = ticker.tick() => {
                        let seq = self.sequence.issue();
                        in_flight.spawn(self.clone().refresh(seq));
                    }
                    Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                        if let Err(e) = joined {
                            log::debug!("Refresh task ended abnormally: {}", e);
                        }
                    }
                }
            }

            in_flight.abort_all();
        })
    }

    /// Run one fetch-and-shape cycle tagged with `seq`.
    pub async fn refresh(self, seq: u64) {
        let today = Utc::now().date_naive();
        let result = match self.panels.variant() {
            ApiVariant::Dashboard => self.api.fetch_dashboard().await.map(|snapshot| {
                DashboardView::Snapshot(SnapshotView::build(&snapshot, &self.panels, today))
            }),
            ApiVariant::Stats => self
                .api
                .fetch_stats()
                .await
                .map(|stats| DashboardView::Stats(StatsView::build(&stats, &self.panels))),
        };

        match result {
            Ok(view) => {
                if let DashboardView::Snapshot(snapshot) = &view {
                    if self.unparsed_days_changed(&snapshot.unparsed_days) {
                        self.event_sender
                            .send_refresh_event(
                                format!(
                                    "Unrecognised day values shown as-is: {}",
                                    snapshot.unparsed_days.join(", ")
                                ),
                                EventType::Error,
                                LogLevel::Warn,
                            )
                            .await;
                    }
                }
                self.event_sender
                    .send_refresh_event(
                        format!("Refresh #{}: {}", seq, view.summary()),
                        EventType::Refresh,
                        LogLevel::Debug,
                    )
                    .await;
                self.update_sender
                    .send(DashboardUpdate::Refreshed { seq, view })
                    .await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_refresh_event(
                        format!("Failed to fetch dashboard data: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                self.update_sender
                    .send(DashboardUpdate::RefreshFailed {
                        seq,
                        message: e.to_string(),
                    })
                    .await;
            }
        }
    }

    /// True when `days` is a non-empty set that differs from the last one
    /// reported. An empty set resets the memory without reporting.
    fn unparsed_days_changed(&self, days: &[String]) -> bool {
        let mut current = days.to_vec();
        current.sort();
        current.dedup();

        let Ok(mut reported) = self.reported_unparsed.lock() else {
            return !current.is_empty();
        };
        if *reported == current {
            return false;
        }
        *reported = current;
        !reported.is_empty()
    }
}
