//! Dashboard controller
//!
//! Owns the dashboard state, feeds it events and runs the reads it asks for.
//! Shared by the TUI and headless modes.

use crate::api::LipidApi;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::ui::UIConfig;
use crate::ui::dashboard::{DashboardEvent, DashboardState};
use crate::workers::Fetcher;
use crate::workers::core::EventSender;
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct DashboardController {
    state: DashboardState,
    fetcher: Fetcher,
    results: mpsc::Receiver<DashboardEvent>,
    /// Spawned reads whose result has not been applied yet.
    in_flight: usize,
}

impl DashboardController {
    pub fn new(api: Arc<dyn LipidApi>, ui_config: UIConfig) -> Self {
        let (sender, results) = mpsc::channel(EVENT_QUEUE_SIZE);
        let state = DashboardState::new(api.environment().clone(), ui_config);
        Self {
            state,
            fetcher: Fetcher::new(api, EventSender::new(sender)),
            results,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Advance UI animations.
    pub fn tick(&mut self) {
        self.state.update();
    }

    /// Load the user list and the initial summary. Only the first call has an effect.
    pub fn initialize(&mut self) {
        self.dispatch(DashboardEvent::Mounted);
    }

    pub fn select_user(&mut self, user_id: i64) {
        self.dispatch(DashboardEvent::UserSelected(user_id));
    }

    pub fn select_next(&mut self) {
        self.dispatch(DashboardEvent::SelectNext);
    }

    pub fn select_previous(&mut self) {
        self.dispatch(DashboardEvent::SelectPrevious);
    }

    /// Reload the summary of the selected user.
    pub fn refresh(&mut self) {
        self.dispatch(DashboardEvent::RefreshRequested);
    }

    /// Whether any read is still running.
    pub fn has_pending_reads(&self) -> bool {
        self.in_flight > 0
    }

    /// Apply every result that has already arrived, without waiting.
    pub fn drain_results(&mut self) {
        while let Ok(event) = self.results.try_recv() {
            self.apply_result(event);
        }
    }

    /// Apply results until no read is running.
    pub async fn run_until_idle(&mut self) {
        while self.in_flight > 0 {
            match self.results.recv().await {
                Some(event) => self.apply_result(event),
                None => break,
            }
        }
    }

    fn apply_result(&mut self, event: DashboardEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: DashboardEvent) {
        for command in self.state.apply(event) {
            self.in_flight += 1;
            self.fetcher.spawn(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockLipidApi;
    use crate::api::error::ApiError;
    use crate::environment::Environment;
    use crate::models::{LabResult, LifestyleAverages, Summary, UserRef};
    use mockall::predicate::eq;
    use std::time::Duration;

    fn user(id: i64) -> UserRef {
        UserRef {
            id,
            full_name: None,
            email: format!("user{}@example.com", id),
        }
    }

    fn summary_for(user_id: i64) -> Summary {
        Summary {
            user_id: Some(user_id),
            latest_lab: Some(LabResult {
                test_date: "2024-05-01".to_string(),
                ldl: Some(100.0 + user_id as f64),
                hdl: Some(45.0),
                total_cholesterol: Some(200.0),
            }),
            last_30_days: LifestyleAverages::default(),
            trend_last5: Vec::new(),
        }
    }

    fn mock_api() -> MockLipidApi {
        let mut api = MockLipidApi::new();
        api.expect_environment().return_const(Environment::Local);
        api
    }

    fn controller(api: impl LipidApi + 'static) -> DashboardController {
        DashboardController::new(Arc::new(api), UIConfig::new(false))
    }

    #[tokio::test]
    async fn test_initialize_selects_second_user_and_loads_summary() {
        let mut api = mock_api();
        api.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![user(1), user(2), user(3)]));
        api.expect_get_summary().returning(|id| Ok(summary_for(id)));

        let mut controller = controller(api);
        controller.initialize();
        controller.run_until_idle().await;

        let state = controller.state();
        assert_eq!(state.selected_user_id(), 2);
        assert_eq!(state.summary(), Some(&summary_for(2)));
        assert!(!state.is_loading());
        assert!(!controller.has_pending_reads());
    }

    #[tokio::test]
    async fn test_user_list_failure_still_loads_fallback_user() {
        let mut api = mock_api();
        api.expect_list_users()
            .times(1)
            .returning(|| Err(ApiError::from_status_and_body(500, String::new())));
        api.expect_get_summary()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(summary_for(id)));

        let mut controller = controller(api);
        controller.initialize();
        controller.run_until_idle().await;

        let state = controller.state();
        assert!(state.error().is_none());
        assert!(state.users().is_empty());
        assert_eq!(state.summary(), Some(&summary_for(1)));
    }

    #[tokio::test]
    async fn test_summary_not_found_sets_error() {
        let mut api = mock_api();
        api.expect_list_users()
            .returning(|| Ok(vec![user(1), user(2), user(3)]));
        api.expect_get_summary().returning(|id| {
            if id == 2 {
                Err(ApiError::from_status_and_body(
                    404,
                    r#"{"detail":"user not found"}"#.to_string(),
                ))
            } else {
                Ok(summary_for(id))
            }
        });

        let mut controller = controller(api);
        controller.initialize();
        controller.run_until_idle().await;

        let state = controller.state();
        assert_eq!(state.error(), Some("user not found"));
        assert!(state.summary().is_none());
    }

    #[tokio::test]
    async fn test_refresh_keeps_selection() {
        let mut api = mock_api();
        api.expect_list_users()
            .returning(|| Ok(vec![user(1), user(2)]));
        api.expect_get_summary().returning(|id| Ok(summary_for(id)));

        let mut controller = controller(api);
        controller.initialize();
        controller.run_until_idle().await;
        let first = controller.state().summary().cloned();

        controller.refresh();
        assert!(controller.state().is_loading());
        controller.run_until_idle().await;

        assert_eq!(controller.state().selected_user_id(), 2);
        assert_eq!(controller.state().summary().cloned(), first);
    }

    /// Answers user 1 slowly and everyone else immediately.
    struct SlowFirstUserApi {
        environment: Environment,
    }

    #[async_trait::async_trait]
    impl LipidApi for SlowFirstUserApi {
        fn environment(&self) -> &Environment {
            &self.environment
        }

        async fn list_users(&self) -> Result<Vec<UserRef>, ApiError> {
            Ok(Vec::new())
        }

        async fn get_summary(&self, user_id: i64) -> Result<Summary, ApiError> {
            if user_id == 1 {
                tokio::time::sleep(Duration::from_millis(150)).await;
            }
            Ok(summary_for(user_id))
        }
    }

    #[tokio::test]
    // The first user's late answer arrives after the switch and is dropped.
    async fn test_late_answer_for_previous_selection_is_dropped() {
        let mut controller = controller(SlowFirstUserApi {
            environment: Environment::Local,
        });
        controller.initialize();
        controller.select_user(3);
        controller.run_until_idle().await;

        let state = controller.state();
        assert_eq!(state.selected_user_id(), 3);
        assert_eq!(state.summary(), Some(&summary_for(3)));
        assert!(!state.is_loading());
    }
}
