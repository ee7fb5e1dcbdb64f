//! Per-refresh views: what one snapshot turns into for each enabled panel.

use super::heatmap::HeatmapGrid;
use super::panel::{Panel, PanelSet};
use super::series::{ChartSeries, ranked_series, series_in_order};
use super::timezone::{display_offset, shift_to_date};
use crate::api::types::{DailyCount, DashboardSnapshot, DateCount, StatsSnapshot};
use chrono::NaiveDate;

/// Chart data for the `/api/dashboard-data` panels.
///
/// A field is `None` when its panel is disabled or the snapshot did not carry
/// the collection; the panel then keeps whatever it showed before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotView {
    pub top_chats_7_days: Option<ChartSeries>,
    pub total_messages_7_days: Option<ChartSeries>,
    pub top_users_7_days: Option<ChartSeries>,
    pub top_chats_today: Option<ChartSeries>,
    pub hourly_activity: Option<HeatmapGrid>,
    /// Day strings that could not be read and were shown verbatim.
    pub unparsed_days: Vec<String>,
}

impl SnapshotView {
    pub fn build(snapshot: &DashboardSnapshot, panels: &PanelSet, today: NaiveDate) -> Self {
        let mut view = SnapshotView::default();

        if panels.contains(Panel::TopChats7Days) {
            view.top_chats_7_days = Some(ranked_series(&snapshot.top_chats_7_days));
        }
        if panels.contains(Panel::TopUsers7Days) {
            view.top_users_7_days = Some(ranked_series(&snapshot.top_users_7_days));
        }
        if panels.contains(Panel::TopChatsToday) {
            view.top_chats_today = Some(ranked_series(&snapshot.top_chats_today));
        }
        if panels.contains(Panel::TotalMessages7Days) {
            let (series, unparsed) = daily_series(&snapshot.total_messages_7_days);
            view.total_messages_7_days = Some(series);
            view.unparsed_days = unparsed;
        }
        if panels.contains(Panel::HourlyActivityHeatmap) {
            view.hourly_activity = snapshot
                .hourly_activity_30_days
                .as_deref()
                .map(|rows| HeatmapGrid::build(rows, today));
        }

        view
    }

    /// One-line digest for console output.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(series) = &self.top_chats_7_days {
            // Ranked series are stored lowest-first.
            match series.iter().next_back() {
                Some((label, count)) => parts.push(format!("top chat 7d: {} ({})", label, count)),
                None => parts.push("top chat 7d: none".to_string()),
            }
        }
        if let Some(series) = &self.top_users_7_days {
            if let Some((label, count)) = series.iter().next_back() {
                parts.push(format!("top user 7d: {} ({})", label, count));
            }
        }
        if let Some(series) = &self.top_chats_today {
            parts.push(format!("today: {} msgs in top chats", series.total()));
        }
        if let Some(series) = &self.total_messages_7_days {
            parts.push(format!("7d total: {}", series.total()));
        }
        if let Some(grid) = &self.hourly_activity {
            parts.push(format!("busiest hour: {}", grid.max_count()));
        }
        if parts.is_empty() {
            "no panels enabled".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

/// Chart data for the `/api/stats` page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsView {
    pub today_message_count: Option<u64>,
    pub top_talker: Option<String>,
    /// In server order; the stats page draws its bars top-down.
    pub group_stats: Option<ChartSeries>,
    pub daily_totals: Option<ChartSeries>,
}

pub const NO_TOP_TALKER: &str = "N/A";

impl StatsView {
    pub fn build(stats: &StatsSnapshot, panels: &PanelSet) -> Self {
        let mut view = StatsView::default();
        if panels.contains(Panel::TodayCount) {
            view.today_message_count = Some(stats.today_message_count);
        }
        if panels.contains(Panel::TopTalker) {
            let name = stats
                .seven_day_top_talker
                .as_ref()
                .and_then(|t| t.sender_name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| NO_TOP_TALKER.to_string());
            view.top_talker = Some(name);
        }
        if panels.contains(Panel::GroupChart) {
            view.group_stats = Some(series_in_order(&stats.seven_day_group_stats));
        }
        if panels.contains(Panel::DailyChart) {
            view.daily_totals = Some(date_series(&stats.seven_day_total_stats));
        }
        view
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(count) = self.today_message_count {
            parts.push(format!("today: {}", count));
        }
        if let Some(name) = &self.top_talker {
            parts.push(format!("top talker: {}", name));
        }
        if let Some(series) = &self.group_stats {
            parts.push(format!("groups: {}", series.len()));
        }
        if let Some(series) = &self.daily_totals {
            parts.push(format!("7d total: {}", series.total()));
        }
        if parts.is_empty() {
            "no panels enabled".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

/// Result of one successful refresh, whichever endpoint family was polled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Snapshot(SnapshotView),
    Stats(StatsView),
}

impl DashboardView {
    pub fn summary(&self) -> String {
        match self {
            DashboardView::Snapshot(view) => view.summary(),
            DashboardView::Stats(view) => view.summary(),
        }
    }
}

fn daily_series(rows: &[DailyCount]) -> (ChartSeries, Vec<String>) {
    let offset = display_offset();
    let mut unparsed = Vec::new();
    let series = rows
        .iter()
        .map(|row| {
            let label = shift_to_date(&row.day, offset).unwrap_or_else(|| {
                unparsed.push(row.day.clone());
                row.day.clone()
            });
            (label, row.message_count)
        })
        .collect();
    (series, unparsed)
}

// The stats endpoint already returns local dates.
fn date_series(rows: &[DateCount]) -> ChartSeries {
    rows.iter().map(|row| (row.date.clone(), row.count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVariant;
    use crate::api::types::{ChatCount, GroupCount, HourlyCount, SenderCount, TopTalker};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    }

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            top_chats_7_days: vec![
                ChatCount {
                    chat_title: Some("B".into()),
                    message_count: 9,
                },
                ChatCount {
                    chat_title: Some("A".into()),
                    message_count: 5,
                },
            ],
            total_messages_7_days: vec![
                DailyCount {
                    day: "2024-01-01T00:00:00Z".into(),
                    message_count: 12,
                },
                DailyCount {
                    day: "2024-01-01T20:00:00Z".into(),
                    message_count: 3,
                },
                DailyCount {
                    day: "??".into(),
                    message_count: 1,
                },
            ],
            top_users_7_days: vec![SenderCount {
                sender_name: Some("alice".into()),
                message_count: 4,
            }],
            top_chats_today: vec![],
            hourly_activity_30_days: Some(vec![HourlyCount {
                day: "2024-01-07".into(),
                hour: Some(10),
                message_count: 6,
            }]),
        }
    }

    #[test]
    fn test_builds_every_enabled_panel() {
        let view = SnapshotView::build(&snapshot(), &PanelSet::all(ApiVariant::Dashboard), today());

        let chats = view.top_chats_7_days.as_ref().unwrap();
        assert_eq!(chats.labels(), ["A", "B"]);
        assert_eq!(chats.values(), [5, 9]);

        let totals = view.total_messages_7_days.as_ref().unwrap();
        assert_eq!(totals.labels(), ["2024-01-01", "2024-01-02", "??"]);
        assert_eq!(totals.values(), [12, 3, 1]);
        assert_eq!(view.unparsed_days, vec!["??".to_string()]);

        assert!(view.top_chats_today.as_ref().unwrap().is_empty());

        let grid = view.hourly_activity.as_ref().unwrap();
        assert_eq!(grid.cells()[29 * 24 + 10].count, 6);
    }

    #[test]
    fn test_disabled_panels_are_not_built() {
        let (panels, _) =
            PanelSet::resolve(ApiVariant::Dashboard, &["top-users-7-days".to_string()]);
        let view = SnapshotView::build(&snapshot(), &panels, today());
        assert!(view.top_chats_7_days.is_none());
        assert!(view.hourly_activity.is_none());
        assert_eq!(view.top_users_7_days.unwrap().labels(), ["alice"]);
    }

    #[test]
    fn test_missing_heatmap_leaves_field_empty() {
        let mut snap = snapshot();
        snap.hourly_activity_30_days = None;
        let view = SnapshotView::build(&snap, &PanelSet::all(ApiVariant::Dashboard), today());
        assert!(view.hourly_activity.is_none());
        assert!(view.top_chats_7_days.is_some());
    }

    #[test]
    fn test_summary_names_the_leader() {
        let view = SnapshotView::build(&snapshot(), &PanelSet::all(ApiVariant::Dashboard), today());
        let summary = view.summary();
        assert!(summary.contains("top chat 7d: B (9)"), "{}", summary);
        assert!(summary.contains("7d total: 16"), "{}", summary);
    }

    #[test]
    fn test_stats_view() {
        let stats = StatsSnapshot {
            today_message_count: 40,
            seven_day_top_talker: None,
            seven_day_group_stats: vec![
                GroupCount {
                    chat_title: Some("first".into()),
                    count: 30,
                },
                GroupCount {
                    chat_title: Some("second".into()),
                    count: 10,
                },
            ],
            seven_day_total_stats: vec![DateCount {
                date: "2024-01-06".into(),
                count: 70,
            }],
        };
        let view = StatsView::build(&stats, &PanelSet::all(ApiVariant::Stats));
        assert_eq!(view.today_message_count, Some(40));
        assert_eq!(view.top_talker.as_deref(), Some(NO_TOP_TALKER));
        assert_eq!(view.group_stats.as_ref().unwrap().labels(), ["first", "second"]);
        assert_eq!(view.daily_totals.as_ref().unwrap().values(), [70]);

        let named = StatsSnapshot {
            seven_day_top_talker: Some(TopTalker {
                sender_name: Some("carol".into()),
            }),
            ..stats
        };
        let view = StatsView::build(&named, &PanelSet::all(ApiVariant::Stats));
        assert_eq!(view.top_talker.as_deref(), Some("carol"));
    }
}
