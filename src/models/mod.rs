//! LiquidPlanner model types.
//!
//! The API's shapes are not under this crate's control, so every model keeps
//! only the fields worth naming and stashes the rest in `extra`.

mod activity;
mod client;
mod member;
mod project;
mod remote_error;
mod task;

pub use activity::*;
pub use client::*;
pub use member::*;
pub use project::*;
pub use remote_error::*;
pub use task::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{LiquidPlannerError, Result};

/// Map a decoded body onto a model, surfacing error bodies as errors.
pub(crate) fn decode_item<T: DeserializeOwned>(value: Value) -> Result<T> {
    if let Some(remote) = RemoteError::from_value(&value) {
        return Err(remote.into());
    }
    Ok(serde_json::from_value(value)?)
}

/// Like [`decode_item`] for list routes; `null` means no items.
pub(crate) fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>> {
    match value {
        Value::Null => Ok(Vec::new()),
        other => decode_item(other),
    }
}

impl From<RemoteError> for LiquidPlannerError {
    fn from(remote: RemoteError) -> Self {
        LiquidPlannerError::ApiError {
            message: remote.message.unwrap_or_else(|| remote.error.clone()),
            kind: remote.error,
        }
    }
}
