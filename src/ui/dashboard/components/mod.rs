//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod heatmap;
pub mod logs;
pub mod ranking;
pub mod search;
pub mod stats;
pub mod trend;
