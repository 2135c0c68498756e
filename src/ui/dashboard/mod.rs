//! Modular dashboard implementation
//!
//! State and its transitions are kept apart from rendering so they can be
//! driven without a terminal

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::{Command, DashboardEvent, DashboardState, RequestTag};
