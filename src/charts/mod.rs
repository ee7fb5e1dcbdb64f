//! Chart shaping
//!
//! Turns API payloads into the series and grids the dashboard panels draw.
//! Everything here is pure and rebuilt on every refresh.

pub mod heatmap;
pub mod panel;
pub mod series;
pub mod timezone;
pub mod view;

pub use heatmap::HeatmapGrid;
pub use panel::{Panel, PanelSet};
pub use series::ChartSeries;
pub use view::{DashboardView, SnapshotView, StatsView};
