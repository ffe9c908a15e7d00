//! List trait for fetching collections.

use async_trait::async_trait;

use crate::client::LiquidPlannerClient;
use crate::error::Result;

/// List every item of a resource.
///
/// LiquidPlanner returns whole collections in one response; narrowing is
/// done with the query (`limit`, filters) rather than pages.
///
/// # Example
///
/// ```ignore
/// use liquidplanner::{LiquidPlannerClient, Task, Member, List, Query};
///
/// let client = LiquidPlannerClient::from_env()?;
/// let open = Task::list(&client, &Query::new().filter("is_done is false")).await?;
/// let members = Member::list(&client, &()).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Filters accepted by the route; `()` when it takes none.
    type Query: Default + Send + Sync;

    /// List items matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers with an
    /// error body.
    async fn list(client: &LiquidPlannerClient, query: &Self::Query) -> Result<Vec<Self>>;

    /// List with the default (empty) query.
    async fn list_all(client: &LiquidPlannerClient) -> Result<Vec<Self>> {
        let query = Self::Query::default();
        let items = Self::list(client, &query).await?;
        tracing::debug!(count = items.len(), "listed items");
        Ok(items)
    }
}
