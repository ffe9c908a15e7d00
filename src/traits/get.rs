//! Get trait for fetching single items.

use async_trait::async_trait;

use crate::client::LiquidPlannerClient;
use crate::error::Result;

/// Fetch a single item by its numeric ID.
///
/// # Example
///
/// ```ignore
/// use liquidplanner::{LiquidPlannerClient, Task, Get};
///
/// let client = LiquidPlannerClient::from_env()?;
/// let task = Task::get(&client, 123456).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// Fetch the item by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`](crate::LiquidPlannerError::ApiError) if the
    /// service answers with an error body, or an error if the request fails.
    async fn get(client: &LiquidPlannerClient, id: u64) -> Result<Self>;
}
