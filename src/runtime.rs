//! Runtime for coordinating the dashboard workers

use crate::api::DashboardApi;
use crate::charts::PanelSet;
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, QUERY_QUEUE_SIZE, UPDATE_QUEUE_SIZE, search};
use crate::events::Event;
use crate::workers::{DashboardRefresher, DashboardUpdate, EventSender, SearchWorker, UpdateSender};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Channels connecting the running workers to a front end
pub struct WorkerChannels {
    /// Log events from all workers.
    pub event_receiver: mpsc::Receiver<Event>,
    /// Chart data and search results.
    pub update_receiver: mpsc::Receiver<DashboardUpdate>,
    /// Raw search box contents, one message per keystroke.
    pub query_sender: mpsc::Sender<String>,
}

/// Start the refresh loop and the search worker
///
/// `startup_events` are queued before any worker runs, so they appear first in
/// the activity log.
pub async fn start_workers(
    api: Arc<dyn DashboardApi>,
    panels: PanelSet,
    refresh_interval: Duration,
    startup_events: Vec<Event>,
    shutdown: &broadcast::Sender<()>,
) -> (WorkerChannels, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (update_sender, update_receiver) = mpsc::channel::<DashboardUpdate>(UPDATE_QUEUE_SIZE);
    let (query_sender, query_receiver) = mpsc::channel::<String>(QUERY_QUEUE_SIZE);

    let event_sender = EventSender::new(event_sender);
    let update_sender = UpdateSender::new(update_sender);

    for event in startup_events {
        event_sender.send_event(event).await;
    }

    let refresher = DashboardRefresher::new(
        api.clone(),
        panels,
        refresh_interval,
        event_sender.clone(),
        update_sender.clone(),
    );
    let searcher = SearchWorker::new(
        api,
        search::debounce(),
        event_sender,
        update_sender,
    );

    let join_handles = vec![
        refresher.run(shutdown.subscribe()),
        searcher.run(query_receiver, shutdown.subscribe()),
    ];

    (
        WorkerChannels {
            event_receiver,
            update_receiver,
            query_sender,
        },
        join_handles,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::DashboardSnapshot;
    use crate::api::{ApiVariant, MockDashboardApi};
    use crate::events::EventType;
    use crate::logging::LogLevel;

    #[tokio::test(start_paused = true)]
    async fn test_startup_events_come_first_and_workers_stop_on_shutdown() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_dashboard()
            .returning(|| Ok(DashboardSnapshot::default()));

        let (shutdown, _) = broadcast::channel(1);
        let startup = Event::session_with_level(
            "Panel 'bogus' not found; it will not be rendered".into(),
            EventType::Error,
            LogLevel::Error,
        );
        let (mut channels, handles) = start_workers(
            Arc::new(api),
            PanelSet::all(ApiVariant::Dashboard),
            Duration::from_millis(5_000),
            vec![startup.clone()],
            &shutdown,
        )
        .await;

        assert_eq!(channels.event_receiver.recv().await, Some(startup));
        let first = channels.update_receiver.recv().await.unwrap();
        assert_eq!(first.seq(), 1);

        shutdown.send(()).unwrap();
        for handle in handles {
            handle.await.unwrap();
        }
    }
}
