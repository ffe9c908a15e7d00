//! Create trait for adding new items.

use async_trait::async_trait;

use crate::client::LiquidPlannerClient;
use crate::error::Result;

/// Create a new item and return it as stored by the service.
///
/// # Example
///
/// ```ignore
/// use liquidplanner::{LiquidPlannerClient, Task, TaskParams, Create};
///
/// let client = LiquidPlannerClient::from_env()?;
/// let task = Task::create(
///     &client,
///     &TaskParams {
///         name: Some("My LP ticket".to_string()),
///         parent_id: Some(123456),
///         ..Default::default()
///     },
/// ).await?;
/// println!("ID of the new task: {}", task.id);
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Fields for the new item.
    type Params: Send + Sync;

    /// Create the item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::LiquidPlannerError::ApiError) if the
    /// service rejects the item, or an error if the request fails.
    async fn create(client: &LiquidPlannerClient, params: &Self::Params) -> Result<Self>;
}
