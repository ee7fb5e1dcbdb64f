//! Search-as-you-type
//!
//! Receives the raw contents of the search box after every keystroke. Once the
//! input has been quiet for the debounce period, the latest contents either
//! clear the results (too short) or start a search. Searches run concurrently;
//! each one is numbered so a slow, older response cannot replace a newer one.

use super::core::{DashboardUpdate, EventSender, UpdateSender};
use super::sequence::RequestSequence;
use crate::api::DashboardApi;
use crate::consts::cli_consts::search::MIN_QUERY_CHARS;
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{Instant, sleep};

/// Trims the query and returns it if it is long enough to search for.
pub fn searchable_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        None
    } else {
        Some(query.to_string())
    }
}

#[derive(Clone)]
pub struct SearchWorker {
    api: Arc<dyn DashboardApi>,
    debounce: Duration,
    event_sender: EventSender,
    update_sender: UpdateSender,
    sequence: Arc<RequestSequence>,
    classifier: ErrorClassifier,
}

impl SearchWorker {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        debounce: Duration,
        event_sender: EventSender,
        update_sender: UpdateSender,
    ) -> Self {
        Self {
            api,
            debounce,
            event_sender,
            update_sender,
            sequence: Arc::new(RequestSequence::new()),
            classifier: ErrorClassifier::new(),
        }
    }

    /// Consume keystroke snapshots until the input closes or shutdown.
    pub fn run(
        self,
        mut queries: mpsc::Receiver<String>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut pending: Option<String> = None;
            let timer = sleep(self.debounce);
            tokio::pin!(timer);
            let mut in_flight = JoinSet::new();

            loop {
                tokio::select! {
                    _ = shutdown.recv() => {
                        in_flight.abort_all();
                        return;
                    }
                    input = queries.recv() => match input {
                        Some(raw) => {
                            // Each keystroke restarts the quiet period
                            pending = Some(raw);
                            timer.as_mut().reset(Instant::now() + self.debounce);
                        }
                        None => break,
                    },
                    () = &mut timer, if pending.is_some() => {
                        if let Some(raw) = pending.take() {
                            self.dispatch(raw, &mut in_flight).await;
                        }
                    }
                    Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                        if let Err(e) = joined {
                            log::debug!("Search task ended abnormally: {}", e);
                        }
                    }
                }
            }

            // Input closed: let searches already on the wire finish.
            while let Some(joined) = in_flight.join_next().await {
                if let Err(e) = joined {
                    log::debug!("Search task ended abnormally: {}", e);
                }
            }
        })
    }

    async fn dispatch(&self, raw: String, in_flight: &mut JoinSet<()>) {
        let seq = self.sequence.issue();
        match searchable_query(&raw) {
            None => {
                self.update_sender
                    .send(DashboardUpdate::SearchCleared { seq })
                    .await;
            }
            Some(query) => {
                in_flight.spawn(self.clone().search(seq, query));
            }
        }
    }

    /// Run one search tagged with `seq`.
    pub async fn search(self, seq: u64, query: String) {
        self.event_sender
            .send_search_event(
                format!("Searching for \"{}\"", query),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        match self.api.search(&query).await {
            Ok(hits) => {
                self.event_sender
                    .send_search_event(
                        format!("{} result(s) for \"{}\"", hits.len(), query),
                        EventType::Refresh,
                        LogLevel::Debug,
                    )
                    .await;
                self.update_sender
                    .send(DashboardUpdate::SearchResults { seq, query, hits })
                    .await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.event_sender
                    .send_search_event(
                        format!("Search for \"{}\" failed: {}", query, e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                self.update_sender
                    .send(DashboardUpdate::SearchFailed {
                        seq,
                        query,
                        message: e.to_string(),
                    })
                    .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::api::error::ApiError;
    use crate::api::types::{DashboardSnapshot, MessageRecord, StatsSnapshot};
    use crate::consts::cli_consts::search::debounce;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn hit(text: &str) -> MessageRecord {
        MessageRecord {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    struct Harness {
        queries: mpsc::Sender<String>,
        updates: mpsc::Receiver<DashboardUpdate>,
        handle: JoinHandle<()>,
        _shutdown: broadcast::Sender<()>,
    }

    /// Panics on the first search, then returns the query as the only hit.
    #[derive(Default)]
    struct PanicOnceApi {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl DashboardApi for PanicOnceApi {
        fn base_url(&self) -> String {
            "http://localhost:8000".to_string()
        }

        async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
            Ok(DashboardSnapshot::default())
        }

        async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
            Ok(StatsSnapshot::default())
        }

        async fn search(&self, query: &str) -> Result<Vec<MessageRecord>, ApiError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("search task panicked");
            }
            Ok(vec![hit(query)])
        }
    }

    fn start(api: impl DashboardApi + 'static) -> Harness {
        let (event_tx, event_rx) = mpsc::channel(100);
        // Nobody reads events in these tests.
        drop(event_rx);
        let (update_tx, updates) = mpsc::channel(100);
        let (query_tx, query_rx) = mpsc::channel(100);
        let (shutdown, _) = broadcast::channel(1);
        let worker = SearchWorker::new(
            Arc::new(api),
            debounce(),
            EventSender::new(event_tx),
            UpdateSender::new(update_tx),
        );
        let handle = worker.run(query_rx, shutdown.subscribe());
        Harness {
            queries: query_tx,
            updates,
            handle,
            _shutdown: shutdown,
        }
    }

    #[test]
    fn test_searchable_query() {
        assert_eq!(searchable_query(""), None);
        assert_eq!(searchable_query("a"), None);
        assert_eq!(searchable_query("  a   "), None);
        assert_eq!(searchable_query(" ab "), Some("ab".to_string()));
        // Counted in characters, not bytes
        assert_eq!(searchable_query("你"), None);
        assert_eq!(searchable_query("你好"), Some("你好".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_query_clears_without_request() {
        let mut api = MockDashboardApi::new();
        api.expect_search().times(0);

        let mut h = start(api);
        h.queries.send(" x ".to_string()).await.unwrap();

        let update = h.updates.recv().await.unwrap();
        assert_eq!(update, DashboardUpdate::SearchCleared { seq: 1 });

        drop(h.queries);
        h.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_coalesce_into_one_search() {
        let mut api = MockDashboardApi::new();
        api.expect_search()
            .withf(|q| q == "abc")
            .times(1)
            .returning(|_| Ok(vec![hit("abc found")]));

        let mut h = start(api);
        let started = Instant::now();
        for raw in ["a", "ab", "abc"] {
            h.queries.send(raw.to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        match h.updates.recv().await.unwrap() {
            DashboardUpdate::SearchResults { seq, query, hits } => {
                assert_eq!(seq, 1);
                assert_eq!(query, "abc");
                assert_eq!(hits, vec![hit("abc found")]);
            }
            other => panic!("unexpected update: {:?}", other),
        }
        // Last keystroke at 200ms, quiet period of 300ms after it
        assert!(started.elapsed() >= Duration::from_millis(500));

        drop(h.queries);
        h.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_search_is_reported() {
        let mut api = MockDashboardApi::new();
        api.expect_search().times(1).returning(|_| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".into(),
            })
        });

        let mut h = start(api);
        h.queries.send("rust".to_string()).await.unwrap();

        match h.updates.recv().await.unwrap() {
            DashboardUpdate::SearchFailed { seq, query, message } => {
                assert_eq!(seq, 1);
                assert_eq!(query, "rust");
                assert!(message.contains("500"));
            }
            other => panic!("unexpected update: {:?}", other),
        }

        drop(h.queries);
        h.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_after_search_gets_newer_sequence() {
        let mut api = MockDashboardApi::new();
        api.expect_search()
            .times(1)
            .returning(|_| Ok(vec![hit("first")]));

        let mut h = start(api);
        h.queries.send("first".to_string()).await.unwrap();
        let first = h.updates.recv().await.unwrap();

        h.queries.send("".to_string()).await.unwrap();
        let cleared = h.updates.recv().await.unwrap();

        assert_eq!(cleared, DashboardUpdate::SearchCleared { seq: 2 });
        assert!(cleared.seq() > first.seq());

        drop(h.queries);
        h.handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicked_search_does_not_stop_worker() {
        let mut h = start(PanicOnceApi::default());
        h.queries.send("first".to_string()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        h.queries.send("second".to_string()).await.unwrap();

        match h.updates.recv().await.unwrap() {
            DashboardUpdate::SearchResults { seq, query, hits } => {
                assert_eq!(seq, 2);
                assert_eq!(query, "second");
                assert_eq!(hits, vec![hit("second")]);
            }
            other => panic!("unexpected update: {:?}", other),
        }

        drop(h.queries);
        h.handle.await.unwrap();
    }
}
