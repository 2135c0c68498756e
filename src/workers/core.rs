//! Core worker utilities

use crate::ui::dashboard::DashboardEvent;
use tokio::sync::mpsc;

/// Sends fetch results back to the UI loop
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<DashboardEvent>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<DashboardEvent>) -> Self {
        Self { sender }
    }

    /// Send a result event. A closed channel means the UI is gone.
    pub async fn send_event(&self, event: DashboardEvent) {
        let _ = self.sender.send(event).await;
    }
}
