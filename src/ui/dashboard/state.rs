//! Dashboard state management
//!
//! Contains the main dashboard state struct and the search box state

use crate::api::types::MessageRecord;
use crate::charts::{PanelSet, SnapshotView, StatsView};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;
use crate::workers::LatestOnly;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const NO_MATCHES: &str = "No matching messages.";
pub const SEARCH_FAILED: &str = "Search failed, see the activity log.";

/// What the results area under the search box shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchResults {
    /// Nothing searched yet, or the query was cleared.
    #[default]
    Empty,
    Hits {
        query: String,
        hits: Vec<MessageRecord>,
    },
    Failed {
        query: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current contents of the search box.
    pub input: String,
    /// Whether key presses go to the search box.
    pub focused: bool,
    pub results: SearchResults,
}

/// Dashboard state, written only by the UI loop.
#[derive(Debug)]
pub struct DashboardState {
    pub api_url: String,
    pub panels: PanelSet,
    pub refresh_interval: Duration,
    pub with_background_color: bool,
    /// When the dashboard opened; the header shows uptime from it.
    pub start_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,

    /// Latest chart data for the dashboard endpoint, merged panel by panel.
    pub snapshot: SnapshotView,
    /// Latest chart data for the stats endpoint.
    pub stats: StatsView,
    pub search: SearchState,

    refresh_gate: LatestOnly,
    search_gate: LatestOnly,
    last_refresh: Option<Instant>,
    refresh_count: u64,
    consecutive_failures: u32,
}

impl DashboardState {
    pub fn new(panels: PanelSet, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            api_url: ui_config.api_url,
            panels,
            refresh_interval: ui_config.refresh_interval,
            with_background_color: ui_config.with_background_color,
            start_time,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            snapshot: SnapshotView::default(),
            stats: StatsView::default(),
            search: SearchState::default(),
            refresh_gate: LatestOnly::new(),
            search_gate: LatestOnly::new(),
            last_refresh: None,
            refresh_count: 0,
            consecutive_failures: 0,
        }
    }

    pub fn refresh_gate_mut(&mut self) -> &mut LatestOnly {
        &mut self.refresh_gate
    }

    pub fn search_gate_mut(&mut self) -> &mut LatestOnly {
        &mut self.search_gate
    }

    /// When the last accepted refresh outcome arrived.
    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub(super) fn record_refresh_outcome(&mut self, succeeded: bool) {
        self.last_refresh = Some(Instant::now());
        if succeeded {
            self.refresh_count += 1;
            self.consecutive_failures = 0;
        } else {
            self.consecutive_failures += 1;
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
