//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod logs;
pub mod summary_card;
pub mod trend_chart;
pub mod user_panel;
