//! Client (customer) model and trait implementations.
//!
//! Named `ClientRecord` to keep it apart from [`LiquidPlannerClient`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::LiquidPlannerClient;
use crate::error::Result;
use crate::models::{decode_item, decode_list};
use crate::traits::{Create, Get, List};

/// A client the workspace does work for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub external_reference: Option<String>,

    /// Fields without a typed accessor.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClientRecord {
    /// Comments left on this client.
    pub async fn comments(&self, client: &LiquidPlannerClient) -> Result<Vec<Value>> {
        decode_list(client.clients_comments(self.id, None).await?)
    }
}

/// Fields for a new client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

#[async_trait]
impl Get for ClientRecord {
    #[tracing::instrument(skip(client))]
    async fn get(client: &LiquidPlannerClient, id: u64) -> Result<Self> {
        decode_item(client.clients(Some(id)).await?)
    }
}

#[async_trait]
impl List for ClientRecord {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &LiquidPlannerClient, _query: &Self::Query) -> Result<Vec<Self>> {
        decode_list(client.clients(None).await?)
    }
}

#[async_trait]
impl Create for ClientRecord {
    type Params = ClientParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &LiquidPlannerClient, params: &Self::Params) -> Result<Self> {
        decode_item(client.clients_create(params).await?)
    }
}
