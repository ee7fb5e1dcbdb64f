//! Dashboard state update logic
//!
//! Applies worker events and chart updates to the dashboard state

use super::state::{DashboardState, SearchResults};
use crate::charts::{DashboardView, SnapshotView, StatsView};
use crate::workers::DashboardUpdate;

impl DashboardState {
    /// Advance the animation tick and move queued events into the log.
    pub fn update(&mut self) {
        self.tick += 1;
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Apply one worker update. Returns `false` if it was stale and dropped.
    pub fn apply_update(&mut self, update: DashboardUpdate) -> bool {
        let gate = if update.is_search() {
            self.search_gate_mut()
        } else {
            self.refresh_gate_mut()
        };
        if !gate.accept(update.seq()) {
            return false;
        }

        match update {
            DashboardUpdate::Refreshed { view, .. } => {
                match view {
                    DashboardView::Snapshot(view) => merge_snapshot(&mut self.snapshot, view),
                    DashboardView::Stats(view) => merge_stats(&mut self.stats, view),
                }
                self.record_refresh_outcome(true);
            }
            DashboardUpdate::RefreshFailed { .. } => {
                // Charts keep their last good content
                self.record_refresh_outcome(false);
            }
            DashboardUpdate::SearchCleared { .. } => {
                self.search.results = SearchResults::Empty;
            }
            DashboardUpdate::SearchResults { query, hits, .. } => {
                self.search.results = SearchResults::Hits { query, hits };
            }
            DashboardUpdate::SearchFailed { query, .. } => {
                self.search.results = SearchResults::Failed { query };
            }
        }
        true
    }
}

/// Replace only the panels the new view carries.
fn merge_snapshot(current: &mut SnapshotView, new: SnapshotView) {
    if new.top_chats_7_days.is_some() {
        current.top_chats_7_days = new.top_chats_7_days;
    }
    if new.total_messages_7_days.is_some() {
        current.total_messages_7_days = new.total_messages_7_days;
    }
    if new.top_users_7_days.is_some() {
        current.top_users_7_days = new.top_users_7_days;
    }
    if new.top_chats_today.is_some() {
        current.top_chats_today = new.top_chats_today;
    }
    if new.hourly_activity.is_some() {
        current.hourly_activity = new.hourly_activity;
    }
    current.unparsed_days = new.unparsed_days;
}

fn merge_stats(current: &mut StatsView, new: StatsView) {
    if new.today_message_count.is_some() {
        current.today_message_count = new.today_message_count;
    }
    if new.top_talker.is_some() {
        current.top_talker = new.top_talker;
    }
    if new.group_stats.is_some() {
        current.group_stats = new.group_stats;
    }
    if new.daily_totals.is_some() {
        current.daily_totals = new.daily_totals;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVariant;
    use crate::api::types::MessageRecord;
    use crate::charts::{ChartSeries, HeatmapGrid, PanelSet};
    use crate::ui::app::UIConfig;
    use chrono::NaiveDate;
    use std::time::{Duration, Instant};

    fn state() -> DashboardState {
        DashboardState::new(
            PanelSet::all(ApiVariant::Dashboard),
            Instant::now(),
            UIConfig::new(false, "http://localhost:8000".into(), Duration::from_secs(5)),
        )
    }

    fn chats(pairs: &[(&str, u64)]) -> ChartSeries {
        pairs.iter().map(|(l, v)| (*l, *v)).collect()
    }

    fn refreshed(seq: u64, view: SnapshotView) -> DashboardUpdate {
        DashboardUpdate::Refreshed {
            seq,
            view: DashboardView::Snapshot(view),
        }
    }

    #[test]
    fn test_older_refresh_does_not_overwrite_newer() {
        let mut state = state();
        let newer = SnapshotView {
            top_chats_7_days: Some(chats(&[("new", 2)])),
            ..Default::default()
        };
        let older = SnapshotView {
            top_chats_7_days: Some(chats(&[("old", 1)])),
            ..Default::default()
        };

        assert!(state.apply_update(refreshed(2, newer.clone())));
        assert!(!state.apply_update(refreshed(1, older)));
        assert_eq!(state.snapshot.top_chats_7_days, newer.top_chats_7_days);
        assert_eq!(state.refresh_count(), 1);
    }

    #[test]
    fn test_missing_heatmap_keeps_previous_grid() {
        let mut state = state();
        let today = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
        let grid = HeatmapGrid::build(&[], today);
        state.apply_update(refreshed(
            1,
            SnapshotView {
                hourly_activity: Some(grid.clone()),
                ..Default::default()
            },
        ));
        state.apply_update(refreshed(
            2,
            SnapshotView {
                top_users_7_days: Some(chats(&[("u", 3)])),
                ..Default::default()
            },
        ));
        assert_eq!(state.snapshot.hourly_activity, Some(grid));
        assert!(state.snapshot.top_users_7_days.is_some());
    }

    #[test]
    fn test_failed_refresh_keeps_charts() {
        let mut state = state();
        state.apply_update(refreshed(
            1,
            SnapshotView {
                top_chats_today: Some(chats(&[("a", 1)])),
                ..Default::default()
            },
        ));
        assert!(state.apply_update(DashboardUpdate::RefreshFailed {
            seq: 2,
            message: "HTTP 500".into(),
        }));
        assert!(state.snapshot.top_chats_today.is_some());
        assert_eq!(state.consecutive_failures(), 1);
        assert!(state.last_refresh().is_some());
    }

    #[test]
    fn test_late_search_response_is_dropped_after_clear() {
        let mut state = state();
        assert!(state.apply_update(DashboardUpdate::SearchCleared { seq: 2 }));
        let late = DashboardUpdate::SearchResults {
            seq: 1,
            query: "hello".into(),
            hits: vec![MessageRecord::default()],
        };
        assert!(!state.apply_update(late));
        assert_eq!(state.search.results, SearchResults::Empty);
    }

    #[test]
    fn test_search_failure_sets_fallback() {
        let mut state = state();
        state.apply_update(DashboardUpdate::SearchFailed {
            seq: 1,
            query: "hello".into(),
            message: "HTTP 500".into(),
        });
        assert_eq!(
            state.search.results,
            SearchResults::Failed {
                query: "hello".into()
            }
        );
    }

    #[test]
    fn test_update_moves_events_into_log() {
        use crate::events::{Event, EventType};
        use crate::logging::LogLevel;

        let mut state = state();
        state.add_event(Event::session_with_level(
            "hello".into(),
            EventType::Waiting,
            LogLevel::Info,
        ));
        state.update();
        assert_eq!(state.activity_logs.len(), 1);
        assert!(state.pending_events.is_empty());
        assert_eq!(state.tick, 1);
    }
}
