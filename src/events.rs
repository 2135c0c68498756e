//! Event System
//!
//! Activity log entries produced while the dashboard loads data

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The one-off user list read.
    #[strum(serialize = "users")]
    UserList,
    /// Per-user summary reads.
    #[strum(serialize = "summary")]
    Summary,
    /// Selection and refresh actions.
    #[strum(serialize = "dashboard")]
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn users(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::UserList, msg, event_type, log_level)
    }

    pub fn summary(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Summary, msg, event_type, log_level)
    }

    pub fn dashboard(msg: String) -> Self {
        Self::new(Source::Dashboard, msg, EventType::Refresh, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let mut event = Event::summary(
            "user not found".to_string(),
            EventType::Error,
            LogLevel::Info,
        );
        event.timestamp = "2024-05-01 08:30:00".to_string();
        assert_eq!(
            event.to_string(),
            "Error [2024-05-01 08:30:00] summary: user not found"
        );
    }

    #[test]
    fn test_info_and_success_always_displayed() {
        let info = Event::dashboard("Selected user 2".to_string());
        let success = Event::users("Loaded 3 users".to_string(), EventType::Success, LogLevel::Trace);
        assert!(info.should_display());
        assert!(success.should_display());
    }
}
