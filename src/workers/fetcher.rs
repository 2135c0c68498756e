//! Remote reads for the dashboard
//!
//! Each read runs in its own task and reports back with exactly one event.
//! Reads are never retried.

use super::core::EventSender;
use crate::api::LipidApi;
use crate::error_classifier::ErrorClassifier;
use crate::ui::dashboard::{Command, DashboardEvent, RequestTag};
use log::{debug, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Executes dashboard commands against the API
#[derive(Clone)]
pub struct Fetcher {
    api: Arc<dyn LipidApi>,
    classifier: ErrorClassifier,
    event_sender: EventSender,
}

impl Fetcher {
    pub fn new(api: Arc<dyn LipidApi>, event_sender: EventSender) -> Self {
        Self {
            api,
            classifier: ErrorClassifier::new(),
            event_sender,
        }
    }

    /// Run a command in the background.
    pub fn spawn(&self, command: Command) -> JoinHandle<()> {
        let fetcher = self.clone();
        tokio::spawn(async move { fetcher.execute(command).await })
    }

    pub async fn execute(&self, command: Command) {
        match command {
            Command::LoadUsers => self.fetch_users().await,
            Command::LoadSummary(tag) => self.fetch_summary(tag).await,
        }
    }

    /// Read the user list. Failures are logged, never surfaced as an error state.
    pub async fn fetch_users(&self) {
        let event = match self.api.list_users().await {
            Ok(users) => {
                debug!("Fetched {} users", users.len());
                DashboardEvent::UsersLoaded(users)
            }
            Err(e) => {
                warn!("Failed fetching users: {}", e);
                DashboardEvent::UsersFailed {
                    message: e.user_message(),
                    log_level: self.classifier.classify_api_error(&e),
                }
            }
        };
        self.event_sender.send_event(event).await;
    }

    /// Read one user's summary, tagging the result with the request it answers.
    pub async fn fetch_summary(&self, tag: RequestTag) {
        let event = match self.api.get_summary(tag.user_id).await {
            Ok(summary) => DashboardEvent::SummaryLoaded { tag, summary },
            Err(e) => {
                let log_level = self.classifier.classify_api_error(&e);
                log::log!(
                    log::Level::from(log_level),
                    "Failed fetching summary for user {}: {}",
                    tag.user_id,
                    e
                );
                DashboardEvent::SummaryFailed {
                    tag,
                    message: e.user_message(),
                    log_level,
                }
            }
        };
        self.event_sender.send_event(event).await;
    }
}
