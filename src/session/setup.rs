//! Session setup and initialization

use crate::api::{ApiClient, LipidApi};
use crate::config::{Config, get_config_path};
use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::ui::UIConfig;
use log::warn;
use std::error::Error;
use std::sync::Arc;

/// Environment variable naming the API deployment (`local` or a URL).
pub const ENVIRONMENT_VAR: &str = "LIPITRACK_ENVIRONMENT";

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Dashboard controller wired to the API client
    pub controller: DashboardController,
    /// Environment the session reads from
    pub environment: Environment,
}

/// Pick the API environment: command-line flag, then environment variable,
/// then config file, then the local default. Invalid values are skipped.
pub fn resolve_environment(
    flag: Option<Environment>,
    env_var: Option<String>,
    config: Option<&Config>,
) -> Environment {
    if let Some(env) = flag {
        return env;
    }
    if let Some(value) = env_var.filter(|v| !v.trim().is_empty()) {
        match value.parse::<Environment>() {
            Ok(env) => return env,
            Err(e) => warn!("Ignoring {}: {}", ENVIRONMENT_VAR, e),
        }
    }
    config
        .and_then(Config::environment)
        .unwrap_or_default()
}

/// Resolve the environment from the process environment and the config file.
pub fn environment_from_sources(flag: Option<Environment>) -> Environment {
    let env_var = std::env::var(ENVIRONMENT_VAR).ok();
    let config = get_config_path()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| match Config::load_from_file(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        });
    resolve_environment(flag, env_var, config.as_ref())
}

/// Sets up a dashboard session
///
/// # Arguments
/// * `env` - Environment to read from
/// * `ui_config` - Display options
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be created
pub fn setup_session(env: Environment, ui_config: UIConfig) -> Result<SessionData, Box<dyn Error>> {
    let api: Arc<dyn LipidApi> = Arc::new(ApiClient::new(env.clone())?);
    let controller = DashboardController::new(api, ui_config);
    Ok(SessionData {
        controller,
        environment: env,
    })
}
