//! Dashboard state management
//!
//! Contains the main dashboard state struct and the events and commands that
//! drive it

use crate::consts::cli_consts::{FALLBACK_USER_ID, MAX_ACTIVITY_LOGS};
use crate::environment::Environment;
use crate::error_classifier::LogLevel;
use crate::events::Event;
use crate::models::{Summary, UserRef};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;

/// Identifies one summary request: the user it was issued for and its
/// position in the sequence of requests issued so far.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestTag {
    pub user_id: i64,
    pub seq: u64,
}

/// Remote reads requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read the user list.
    LoadUsers,
    /// Read the summary for `tag.user_id`.
    LoadSummary(RequestTag),
}

/// Everything that can change the dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The dashboard was mounted. Only the first one has an effect.
    Mounted,
    /// The user list read succeeded.
    UsersLoaded(Vec<UserRef>),
    /// The user list read failed.
    UsersFailed { message: String, log_level: LogLevel },
    /// A user was picked explicitly.
    UserSelected(i64),
    /// Move the selection to the next entry of the user list.
    SelectNext,
    /// Move the selection to the previous entry of the user list.
    SelectPrevious,
    /// Reload the summary for the current selection.
    RefreshRequested,
    /// A summary read succeeded.
    SummaryLoaded { tag: RequestTag, summary: Summary },
    /// A summary read failed.
    SummaryFailed {
        tag: RequestTag,
        message: String,
        log_level: LogLevel,
    },
}

/// Dashboard state. Mutated only through `DashboardState::apply`.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment the data is read from.
    pub environment: Environment,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// User whose summary is shown.
    pub(super) selected_user_id: i64,
    /// Users available for selection, in server order.
    pub(super) users: Vec<UserRef>,
    /// Last successfully loaded summary. Kept while a reload is in flight.
    pub(super) summary: Option<Summary>,
    /// Whether a summary read is in flight.
    pub(super) loading: bool,
    /// Message of the last failed summary read.
    pub(super) error: Option<String>,
    /// Activity logs for display
    pub(super) activity_logs: VecDeque<Event>,

    /// Tag of the summary request whose result will be applied.
    pub(super) pending_request: Option<RequestTag>,
    /// Sequence number of the last issued summary request.
    pub(super) last_seq: u64,
    /// Whether `Mounted` was already handled.
    pub(super) mounted: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            environment,
            with_background_color: ui_config.with_background_color,
            tick: 0,
            selected_user_id: FALLBACK_USER_ID,
            users: Vec::new(),
            summary: None,
            loading: false,
            error: None,
            activity_logs: VecDeque::new(),
            pending_request: None,
            last_seq: 0,
            mounted: false,
        }
    }

    pub fn selected_user_id(&self) -> i64 {
        self.selected_user_id
    }

    pub fn users(&self) -> &[UserRef] {
        &self.users
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn activity_logs(&self) -> &VecDeque<Event> {
        &self.activity_logs
    }

    /// The selected user's entry in the user list, if it is listed.
    pub fn selected_user(&self) -> Option<&UserRef> {
        self.users.iter().find(|u| u.id == self.selected_user_id)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
