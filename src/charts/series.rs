//! Label/value series shared by the bar and line panels.

use crate::api::types::{ChatCount, GroupCount, SenderCount};
use crate::consts::cli_consts::charts::UNKNOWN_LABEL;

/// Parallel labels and values. Pairs are only ever pushed together, so the two
/// sequences stay index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<u64>,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: u64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, u64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }

    /// Reverses both sequences in place, keeping pairs together.
    pub fn reversed(mut self) -> Self {
        self.labels.reverse();
        self.values.reverse();
        self
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut series = ChartSeries::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}

/// A record that ranks something (a chat, a sender) by message count.
pub trait Ranked {
    fn label(&self) -> Option<&str>;
    fn count(&self) -> u64;
}

impl Ranked for ChatCount {
    fn label(&self) -> Option<&str> {
        self.chat_title.as_deref()
    }

    fn count(&self) -> u64 {
        self.message_count
    }
}

impl Ranked for SenderCount {
    fn label(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    fn count(&self) -> u64 {
        self.message_count
    }
}

impl Ranked for GroupCount {
    fn label(&self) -> Option<&str> {
        self.chat_title.as_deref()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

/// Series in the order the server sent it.
pub fn series_in_order<T: Ranked>(items: &[T]) -> ChartSeries {
    items
        .iter()
        .map(|item| (item.label().unwrap_or(UNKNOWN_LABEL), item.count()))
        .collect()
}

/// Series for a horizontal bar axis that grows upwards: the server sends the
/// highest count first, so the order is reversed to put it last on the axis,
/// which is drawn at the top.
pub fn ranked_series<T: Ranked>(items: &[T]) -> ChartSeries {
    series_in_order(items).reversed()
}
