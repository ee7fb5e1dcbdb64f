//! Rendering targets and their fixed identifiers.

use crate::api::ApiVariant;

/// A dashboard panel. Identifiers match the element ids of the web UI so the
/// same names work in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    TopChats7Days,
    TotalMessages7Days,
    TopUsers7Days,
    TopChatsToday,
    HourlyActivityHeatmap,
    GroupChart,
    DailyChart,
    TodayCount,
    TopTalker,
}

const DASHBOARD_PANELS: [Panel; 5] = [
    Panel::TopChats7Days,
    Panel::TotalMessages7Days,
    Panel::TopUsers7Days,
    Panel::TopChatsToday,
    Panel::HourlyActivityHeatmap,
];

const STATS_PANELS: [Panel; 4] = [
    Panel::TodayCount,
    Panel::TopTalker,
    Panel::GroupChart,
    Panel::DailyChart,
];

impl Panel {
    pub fn id(&self) -> &'static str {
        match self {
            Panel::TopChats7Days => "top-chats-7-days",
            Panel::TotalMessages7Days => "total-messages-7-days",
            Panel::TopUsers7Days => "top-users-7-days",
            Panel::TopChatsToday => "top-chats-today",
            Panel::HourlyActivityHeatmap => "hourly-activity-heatmap",
            Panel::GroupChart => "group-chart",
            Panel::DailyChart => "daily-chart",
            Panel::TodayCount => "today-count",
            Panel::TopTalker => "top-talker",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::TopChats7Days => "TOP CHATS (7 DAYS)",
            Panel::TotalMessages7Days => "TOTAL MESSAGES (7 DAYS)",
            Panel::TopUsers7Days => "TOP USERS (7 DAYS)",
            Panel::TopChatsToday => "TOP CHATS (TODAY)",
            Panel::HourlyActivityHeatmap => "30-DAY ACTIVITY (UTC+8)",
            Panel::GroupChart => "GROUP RANKING (7 DAYS)",
            Panel::DailyChart => "DAILY TOTALS (7 DAYS)",
            Panel::TodayCount => "TODAY",
            Panel::TopTalker => "TOP TALKER (7 DAYS)",
        }
    }

    /// Every panel the given endpoint family can feed.
    pub fn for_variant(variant: ApiVariant) -> &'static [Panel] {
        match variant {
            ApiVariant::Dashboard => &DASHBOARD_PANELS,
            ApiVariant::Stats => &STATS_PANELS,
        }
    }
}

/// The panels the refresh loop writes to, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSet {
    variant: ApiVariant,
    panels: Vec<Panel>,
}

impl PanelSet {
    /// Every panel of the variant.
    pub fn all(variant: ApiVariant) -> Self {
        Self {
            variant,
            panels: Panel::for_variant(variant).to_vec(),
        }
    }

    /// Resolves the requested identifiers against the variant's panels.
    ///
    /// An empty request selects everything. Identifiers that match no panel are
    /// returned alongside the set so the caller can report them; they are
    /// otherwise skipped.
    pub fn resolve(variant: ApiVariant, requested: &[String]) -> (Self, Vec<String>) {
        if requested.iter().all(|id| id.trim().is_empty()) {
            return (Self::all(variant), Vec::new());
        }

        let available = Panel::for_variant(variant);
        let mut panels = Vec::new();
        let mut missing = Vec::new();
        for id in requested.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
            match available.iter().find(|p| p.id() == id) {
                Some(panel) if !panels.contains(panel) => panels.push(*panel),
                Some(_) => {}
                None => missing.push(id.to_string()),
            }
        }
        (Self { variant, panels }, missing)
    }

    pub fn variant(&self) -> ApiVariant {
        self.variant
    }

    pub fn contains(&self, panel: Panel) -> bool {
        self.panels.contains(&panel)
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Panel> + '_ {
        self.panels.iter().copied()
    }
}
