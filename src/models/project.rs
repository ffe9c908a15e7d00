//! Project model and trait implementations.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::LiquidPlannerClient;
use crate::error::Result;
use crate::models::{decode_item, decode_list};
use crate::traits::{Create, Get, List};

/// A LiquidPlanner project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub client_id: Option<u64>,

    /// Package or folder containing the project.
    #[serde(default)]
    pub parent_id: Option<u64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_done: bool,

    #[serde(default)]
    pub external_reference: Option<String>,

    /// Fields without a typed accessor.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Tasks directly under this project.
    pub async fn tasks(&self, client: &LiquidPlannerClient) -> Result<Vec<crate::models::Task>> {
        let query = crate::Query::new().filter(format!("parent_id = {}", self.id));
        decode_list(client.tasks(None, &query).await?)
    }
}

/// Fields for a new project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_on: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

#[async_trait]
impl Get for Project {
    #[tracing::instrument(skip(client))]
    async fn get(client: &LiquidPlannerClient, id: u64) -> Result<Self> {
        decode_item(client.projects(Some(id)).await?)
    }
}

#[async_trait]
impl List for Project {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &LiquidPlannerClient, _query: &Self::Query) -> Result<Vec<Self>> {
        decode_list(client.projects(None).await?)
    }
}

#[async_trait]
impl Create for Project {
    type Params = ProjectParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &LiquidPlannerClient, params: &Self::Params) -> Result<Self> {
        decode_item(client.projects_create(params).await?)
    }
}
