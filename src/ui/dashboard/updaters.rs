//! Dashboard state update logic
//!
//! Every state transition goes through `DashboardState::apply`, which returns
//! the remote reads the transition requires. Nothing here touches the network
//! or the terminal.

use super::state::{Command, DashboardEvent, DashboardState, RequestTag};

use crate::consts::cli_consts::INITIAL_USER_INDEX;
use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType};
use crate::models::{Summary, UserRef};

use log::debug;

impl DashboardState {
    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Apply one event and return the reads it triggers.
    pub fn apply(&mut self, event: DashboardEvent) -> Vec<Command> {
        match event {
            DashboardEvent::Mounted => self.handle_mounted(),
            DashboardEvent::UsersLoaded(users) => self.handle_users_loaded(users),
            DashboardEvent::UsersFailed { message, log_level } => {
                self.add_to_activity_log(Event::users(
                    format!("Failed fetching users: {}", message),
                    EventType::Error,
                    log_level,
                ));
                Vec::new()
            }
            DashboardEvent::UserSelected(user_id) => self.select_user(user_id),
            DashboardEvent::SelectNext => self.step_selection(1),
            DashboardEvent::SelectPrevious => self.step_selection(-1),
            DashboardEvent::RefreshRequested => {
                self.add_to_activity_log(Event::dashboard(format!(
                    "Refreshing user {}",
                    self.selected_user_id
                )));
                vec![self.load_summary()]
            }
            DashboardEvent::SummaryLoaded { tag, summary } => {
                self.handle_summary_loaded(tag, summary);
                Vec::new()
            }
            DashboardEvent::SummaryFailed {
                tag,
                message,
                log_level,
            } => {
                self.handle_summary_failed(tag, message, log_level);
                Vec::new()
            }
        }
    }

    /// Whether a result carrying `tag` may still be applied.
    pub fn is_current(&self, tag: RequestTag) -> bool {
        self.pending_request == Some(tag) && tag.user_id == self.selected_user_id
    }

    fn handle_mounted(&mut self) -> Vec<Command> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        // The initial selection counts as a selection change
        vec![Command::LoadUsers, self.load_summary()]
    }

    fn handle_users_loaded(&mut self, users: Vec<UserRef>) -> Vec<Command> {
        self.add_to_activity_log(Event::users(
            format!("Loaded {} users", users.len()),
            EventType::Success,
            LogLevel::Info,
        ));
        self.users = users;

        match initial_selection(&self.users) {
            Some(user_id) => self.select_user(user_id),
            None => Vec::new(),
        }
    }

    fn select_user(&mut self, user_id: i64) -> Vec<Command> {
        if user_id == self.selected_user_id {
            return Vec::new();
        }
        self.selected_user_id = user_id;
        self.add_to_activity_log(Event::dashboard(format!("Selected user {}", user_id)));
        vec![self.load_summary()]
    }

    fn step_selection(&mut self, delta: isize) -> Vec<Command> {
        if self.users.is_empty() {
            return Vec::new();
        }
        let last = self.users.len() as isize - 1;
        let target = match self
            .users
            .iter()
            .position(|u| u.id == self.selected_user_id)
        {
            Some(pos) => (pos as isize + delta).clamp(0, last),
            // Selection is not listed (fallback id): start from the top
            None => 0,
        };
        let user_id = self.users[target as usize].id;
        self.select_user(user_id)
    }

    /// Start a summary read for the current selection.
    fn load_summary(&mut self) -> Command {
        self.last_seq += 1;
        let tag = RequestTag {
            user_id: self.selected_user_id,
            seq: self.last_seq,
        };
        self.pending_request = Some(tag);
        self.loading = true;
        self.error = None;
        Command::LoadSummary(tag)
    }

    fn handle_summary_loaded(&mut self, tag: RequestTag, summary: Summary) {
        if !self.is_current(tag) {
            self.discard(tag);
            return;
        }
        self.add_to_activity_log(Event::summary(
            format!("Loaded summary for user {}", tag.user_id),
            EventType::Success,
            LogLevel::Info,
        ));
        self.summary = Some(summary);
        self.finish_request();
    }

    fn handle_summary_failed(&mut self, tag: RequestTag, message: String, log_level: LogLevel) {
        if !self.is_current(tag) {
            self.discard(tag);
            return;
        }
        self.add_to_activity_log(Event::summary(
            format!("User {}: {}", tag.user_id, message),
            EventType::Error,
            log_level,
        ));
        self.summary = None;
        self.error = Some(message);
        self.finish_request();
    }

    fn finish_request(&mut self) {
        self.pending_request = None;
        self.loading = false;
    }

    fn discard(&mut self, tag: RequestTag) {
        debug!(
            "Discarding summary response #{} for user {}",
            tag.seq, tag.user_id
        );
        self.add_to_activity_log(Event::summary(
            format!("Discarded stale response for user {}", tag.user_id),
            EventType::Discarded,
            LogLevel::Debug,
        ));
    }
}

/// The user selected once the list arrives: the second entry, or the only
/// entry of a one-element list.
pub fn initial_selection(users: &[UserRef]) -> Option<i64> {
    users
        .get(INITIAL_USER_INDEX)
        .or_else(|| users.first())
        .map(|u| u.id)
}
