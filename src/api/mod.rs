use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::models::{Summary, UserRef};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait LipidApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// List every user known to the backend.
    async fn list_users(&self) -> Result<Vec<UserRef>, ApiError>;

    /// Fetch the lab and lifestyle summary for a user.
    async fn get_summary(&self, user_id: i64) -> Result<Summary, ApiError>;
}
