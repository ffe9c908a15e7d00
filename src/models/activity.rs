//! Activity model.
//!
//! Activities classify logged work (design, development, meetings...).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::LiquidPlannerClient;
use crate::error::Result;
use crate::models::{decode_item, decode_list};
use crate::traits::{Get, List};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub billable: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[async_trait]
impl Get for Activity {
    #[tracing::instrument(skip(client))]
    async fn get(client: &LiquidPlannerClient, id: u64) -> Result<Self> {
        decode_item(client.activities(Some(id)).await?)
    }
}

#[async_trait]
impl List for Activity {
    type Query = ();

    #[tracing::instrument(skip(client))]
    async fn list(client: &LiquidPlannerClient, _query: &Self::Query) -> Result<Vec<Self>> {
        decode_list(client.activities(None).await?)
    }
}
