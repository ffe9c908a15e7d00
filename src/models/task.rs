//! Task model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::LiquidPlannerClient;
use crate::error::Result;
use crate::models::{decode_item, decode_list};
use crate::query::Query;
use crate::traits::{Create, Get, List};

/// A LiquidPlanner task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    /// Project or folder containing the task.
    #[serde(default)]
    pub parent_id: Option<u64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_done: bool,

    #[serde(default)]
    pub owner_id: Option<u64>,

    /// Hours logged so far.
    #[serde(default)]
    pub work: Option<f64>,

    #[serde(default)]
    pub low_effort_remaining: Option<f64>,

    #[serde(default)]
    pub high_effort_remaining: Option<f64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields without a typed accessor.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Remaining effort as `(low, high)` hours, when both are known.
    pub fn remaining_estimate(&self) -> Option<(f64, f64)> {
        Some((self.low_effort_remaining?, self.high_effort_remaining?))
    }

    /// Log work against this task.
    pub async fn track_time(
        &self,
        client: &LiquidPlannerClient,
        params: &TrackTimeParams,
    ) -> Result<Task> {
        decode_item(client.tasks_track_time(self.id, params).await?)
    }

    /// Post a comment on this task.
    pub async fn comment(&self, client: &LiquidPlannerClient, text: &str) -> Result<Value> {
        let params = CommentParams {
            comment: text.to_string(),
        };
        client.tasks_comments_create(self.id, &params).await
    }

    /// Delete this task, returning the raw response body.
    pub async fn delete(self, client: &LiquidPlannerClient) -> Result<String> {
        client.tasks_delete(self.id).await
    }
}

/// Fields for a new task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
}

/// Body of a `track_time` call. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackTimeParams {
    /// Hours of work to log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<u64>,

    /// Member the work is logged for; defaults to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
}

/// Body of a new comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentParams {
    pub comment: String,
}

#[async_trait]
impl Get for Task {
    #[tracing::instrument(skip(client))]
    async fn get(client: &LiquidPlannerClient, id: u64) -> Result<Self> {
        decode_item(client.tasks(Some(id), &Query::new()).await?)
    }
}

#[async_trait]
impl List for Task {
    type Query = Query;

    #[tracing::instrument(skip(client))]
    async fn list(client: &LiquidPlannerClient, query: &Self::Query) -> Result<Vec<Self>> {
        decode_list(client.tasks(None, query).await?)
    }
}

#[async_trait]
impl Create for Task {
    type Params = TaskParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &LiquidPlannerClient, params: &Self::Params) -> Result<Self> {
        decode_item(client.tasks_create(params).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_deserialize() {
        let json = r#"{
            "id": 1234,
            "type": "Task",
            "name": "My LP ticket",
            "parent_id": 123456,
            "description": "Description of my LP ticket",
            "is_done": false,
            "owner_id": 77,
            "work": 2.5,
            "low_effort_remaining": 1.0,
            "high_effort_remaining": 3.0,
            "created_at": "2024-03-01T09:30:00+00:00",
            "custom_field_values": {}
        }"#;

        let task: Task = serde_json::from_str(json).expect("Failed to deserialize task");
        assert_eq!(task.id, 1234);
        assert_eq!(task.name.as_deref(), Some("My LP ticket"));
        assert_eq!(task.parent_id, Some(123456));
        assert!(!task.is_done);
        assert_eq!(task.remaining_estimate(), Some((1.0, 3.0)));
        assert!(task.created_at.is_some());
        assert_eq!(task.extra.get("type"), Some(&json!("Task")));
        assert!(task.extra.contains_key("custom_field_values"));
    }

    #[test]
    fn test_task_minimal() {
        let task: Task = serde_json::from_value(json!({"id": 5})).unwrap();
        assert_eq!(task.id, 5);
        assert!(task.name.is_none());
        assert!(task.remaining_estimate().is_none());
    }

    #[test]
    fn test_task_params_skip_unset() {
        let params = TaskParams {
            name: Some("My LP ticket".to_string()),
            parent_id: Some(123456),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"name": "My LP ticket", "parent_id": 123456})
        );
    }

    #[test]
    fn test_track_time_params() {
        let params = TrackTimeParams {
            work: Some(2.0),
            activity_id: Some(12345),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"work": 2.0, "activity_id": 12345})
        );
    }
}
