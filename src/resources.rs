//! One method per LiquidPlanner REST route.
//!
//! Method names follow the route with the common `api/workspaces/:id`
//! prefix dropped, so `tasks/:id/track_time` becomes
//! [`LiquidPlannerClient::tasks_track_time`]. Create and delete are spelled
//! out (`tasks_create`, `tasks_delete`) even though the API implies them by
//! verb. An `Option` id switches a route between list and get-single.
//!
//! All methods return the decoded body as-is, error bodies included.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::client::LiquidPlannerClient;
use crate::error::Result;
use crate::query::Query;

/// Path segments for `resource` or `resource/{id}`.
fn item_path(resource: &str, id: Option<u64>) -> Vec<String> {
    let mut segments = vec![resource.to_string()];
    if let Some(id) = id {
        segments.push(id.to_string());
    }
    segments
}

/// Wrap a payload as `{key: data}`.
pub(crate) fn envelope<T: Serialize + ?Sized>(key: &str, data: &T) -> Result<Value> {
    let mut wrapped = Map::with_capacity(1);
    wrapped.insert(key.to_string(), serde_json::to_value(data)?);
    Ok(Value::Object(wrapped))
}

impl LiquidPlannerClient {
    /// `GET /account`: the authenticated user's account. Not workspace-scoped.
    pub async fn account(&self) -> Result<Value> {
        let url = self.api_endpoint(["account"])?;
        self.get(url).await
    }

    /// `GET /workspaces/{id}`: the workspace itself.
    pub async fn workspace(&self) -> Result<Value> {
        let url = self.workspace_url().clone();
        self.get(url).await
    }

    // -------------------------------------------------------------------------
    // Tasks
    // -------------------------------------------------------------------------

    /// List tasks, or fetch one when `id` is given.
    ///
    /// ```no_run
    /// use liquidplanner::{LiquidPlannerClient, Query};
    ///
    /// # async fn example(client: LiquidPlannerClient) -> liquidplanner::Result<()> {
    /// let open = client
    ///     .tasks(None, &Query::new().limit(10).filter("is_done is false"))
    ///     .await?;
    /// let one = client.tasks(Some(42), &Query::new()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn tasks(&self, id: Option<u64>, query: &Query) -> Result<Value> {
        let url = self.workspace_endpoint(item_path("tasks", id), query)?;
        self.get(url).await
    }

    /// Create a task. `data` is sent as `{"task": data}`.
    pub async fn tasks_create<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let body = envelope("task", data)?;
        let url = self.workspace_endpoint(["tasks"], &Query::new())?;
        self.post(url, &body).await
    }

    /// Delete a task, returning the raw response body.
    pub async fn tasks_delete(&self, id: u64) -> Result<String> {
        let url = self.workspace_endpoint(item_path("tasks", Some(id)), &Query::new())?;
        self.delete(url).await
    }

    /// Log work against a task and optionally re-estimate it.
    ///
    /// `data` is sent unwrapped; see [`TrackTimeParams`](crate::TrackTimeParams).
    pub async fn tasks_track_time<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> Result<Value> {
        let url = self.workspace_endpoint(
            ["tasks".to_string(), id.to_string(), "track_time".to_string()],
            &Query::new(),
        )?;
        self.post(url, data).await
    }

    /// Comment on a task. `data` is sent as `{"comment": data}`.
    pub async fn tasks_comments_create<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> Result<Value> {
        let body = envelope("comment", data)?;
        let url = self.workspace_endpoint(
            ["tasks".to_string(), id.to_string(), "comments".to_string()],
            &Query::new(),
        )?;
        self.post(url, &body).await
    }

    /// Set the low/high remaining estimate of any tree item.
    pub async fn treeitems_estimates(&self, id: u64, low: f64, high: f64) -> Result<Value> {
        let url = self.workspace_endpoint(
            ["treeitems".to_string(), id.to_string(), "estimates".to_string()],
            &Query::new(),
        )?;
        self.post(url, &json!({ "low": low, "high": high })).await
    }

    // -------------------------------------------------------------------------
    // Clients
    // -------------------------------------------------------------------------

    pub async fn clients(&self, id: Option<u64>) -> Result<Value> {
        let url = self.workspace_endpoint(item_path("clients", id), &Query::new())?;
        self.get(url).await
    }

    /// Create a client. `data` is sent as `{"client": data}`.
    pub async fn clients_create<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let body = envelope("client", data)?;
        let url = self.workspace_endpoint(["clients"], &Query::new())?;
        self.post(url, &body).await
    }

    /// List comments on a client, or fetch one when `comment_id` is given.
    pub async fn clients_comments(&self, client_id: u64, comment_id: Option<u64>) -> Result<Value> {
        let mut segments = vec!["clients".to_string(), client_id.to_string()];
        segments.extend(item_path("comments", comment_id));
        let url = self.workspace_endpoint(segments, &Query::new())?;
        self.get(url).await
    }

    /// Delete a comment on a client, returning the raw response body.
    pub async fn clients_comments_delete(&self, client_id: u64, comment_id: u64) -> Result<String> {
        let url = self.workspace_endpoint(
            [
                "clients".to_string(),
                client_id.to_string(),
                "comments".to_string(),
                comment_id.to_string(),
            ],
            &Query::new(),
        )?;
        self.delete(url).await
    }

    // -------------------------------------------------------------------------
    // Projects, members, activities
    // -------------------------------------------------------------------------

    pub async fn projects(&self, id: Option<u64>) -> Result<Value> {
        let url = self.workspace_endpoint(item_path("projects", id), &Query::new())?;
        self.get(url).await
    }

    /// Create a project. `data` is sent as `{"project": data}`.
    pub async fn projects_create<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        let body = envelope("project", data)?;
        let url = self.workspace_endpoint(["projects"], &Query::new())?;
        self.post(url, &body).await
    }

    pub async fn members(&self, id: Option<u64>) -> Result<Value> {
        let url = self.workspace_endpoint(item_path("members", id), &Query::new())?;
        self.get(url).await
    }

    pub async fn activities(&self, id: Option<u64>) -> Result<Value> {
        let url = self.workspace_endpoint(item_path("activities", id), &Query::new())?;
        self.get(url).await
    }

    // -------------------------------------------------------------------------
    // Timesheets
    // -------------------------------------------------------------------------

    pub async fn timesheets(&self, query: &Query) -> Result<Value> {
        let url = self.workspace_endpoint(["timesheets"], query)?;
        self.get(url).await
    }

    /// Timesheet entries across the workspace, or within one timesheet.
    pub async fn timesheet_entries(
        &self,
        timesheet_id: Option<u64>,
        query: &Query,
    ) -> Result<Value> {
        let mut segments = match timesheet_id {
            Some(id) => item_path("timesheets", Some(id)),
            None => Vec::new(),
        };
        segments.push("timesheet_entries".to_string());
        let url = self.workspace_endpoint(segments, query)?;
        self.get(url).await
    }
}
