//! Workspace member model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::LiquidPlannerClient;
use crate::error::Result;
use crate::models::{decode_item, decode_list};
use crate::traits::{Get, List};

/// A person (or placeholder) in the workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub access_level: Option<String>,

    #[serde(default)]
    pub is_virtual: bool,

    /// Fields without a typed accessor.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Member {
    /// "First Last", falling back to the user name.
    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => self.user_name.clone(),
        }
    }
}

#[async_trait]
impl Get for Member {
    #[tracing::instrument(skip(client))]
    async fn get(client: &LiquidPlannerClient, id: u64) -> Result<Self> {
        decode_item(client.members(Some(id)).await?)
    }
}

#[async_trait]
impl List for Member {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &LiquidPlannerClient, _query: &Self::Query) -> Result<Vec<Self>> {
        decode_list(client.members(None).await?)
    }
}
