//! Dense day x hour activity grid.

use crate::api::types::HourlyCount;
use crate::consts::cli_consts::charts::{HEATMAP_DAYS, HOURS_PER_DAY};
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapCell {
    pub day_index: usize,
    pub hour_index: usize,
    pub count: u64,
}

/// Message counts for the last `HEATMAP_DAYS` days, every hour present.
///
/// Cells are stored day-major: all 24 hours of the oldest day first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapGrid {
    days: Vec<NaiveDate>,
    cells: Vec<HeatmapCell>,
    max_count: u64,
}

impl HeatmapGrid {
    /// Builds the grid for the window ending on `today`.
    ///
    /// Records outside the window, with an unreadable day, or without a valid
    /// hour are ignored. When the server repeats a `(day, hour)` pair the later
    /// row wins.
    pub fn build(records: &[HourlyCount], today: NaiveDate) -> Self {
        let days = recent_days(today, HEATMAP_DAYS);

        let mut lookup: HashMap<(NaiveDate, u8), u64> = HashMap::with_capacity(records.len());
        for record in records {
            let (Some(day), Some(hour)) = (parse_day(&record.day), record.hour) else {
                continue;
            };
            lookup.insert((day, hour), record.message_count);
        }

        let mut cells = Vec::with_capacity(days.len() * HOURS_PER_DAY);
        let mut max_count = 0;
        for (day_index, day) in days.iter().enumerate() {
            for hour_index in 0..HOURS_PER_DAY {
                let count = lookup
                    .get(&(*day, hour_index as u8))
                    .copied()
                    .unwrap_or(0);
                max_count = max_count.max(count);
                cells.push(HeatmapCell {
                    day_index,
                    hour_index,
                    count,
                });
            }
        }

        Self {
            days,
            cells,
            max_count,
        }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn cells(&self) -> &[HeatmapCell] {
        &self.cells
    }

    /// Largest count in the grid; 0 when there was no activity.
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// The busiest cell, earliest first on ties. `None` when there was no
    /// activity.
    pub fn peak(&self) -> Option<&HeatmapCell> {
        if self.max_count == 0 {
            return None;
        }
        self.cells.iter().find(|cell| cell.count == self.max_count)
    }

    /// Colour-scale bounds. The upper bound is at least 1 so an all-zero grid
    /// still has a usable scale.
    pub fn scale_bounds(&self) -> (u64, u64) {
        (0, self.max_count.max(1))
    }

    /// Buckets `count` into `0..steps` on the grid's colour scale. Zero always
    /// maps to bucket 0; any activity maps to at least bucket 1.
    pub fn intensity(&self, count: u64, steps: usize) -> usize {
        if count == 0 || steps < 2 {
            return 0;
        }
        let (_, max) = self.scale_bounds();
        let scaled = (count.min(max) as f64 / max as f64) * (steps - 1) as f64;
        (scaled.ceil() as usize).clamp(1, steps - 1)
    }
}

/// `"00"` through `"23"`.
pub fn hour_labels() -> Vec<String> {
    (0..HOURS_PER_DAY).map(|h| format!("{:02}", h)).collect()
}

/// The `count` calendar days ending on `today`, oldest first.
pub fn recent_days(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count as u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day.trim().get(..10)?, "%Y-%m-%d").ok()
}
