//! LiquidPlanner API client library.
//!
//! A Rust library for the LiquidPlanner REST API. The public methods mirror
//! the API routes with the common `api/workspaces/:workspace_id` prefix
//! dropped, so `tasks/:id/track_time` is exposed as
//! [`LiquidPlannerClient::tasks_track_time`].
//!
//! # Quick Start
//!
//! ```no_run
//! use liquidplanner::{LiquidPlannerClient, Query};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> liquidplanner::Result<()> {
//!     let client = LiquidPlannerClient::new(12345, "you@example.com", "yourLPpassword")?;
//!
//!     // Create a task under an existing project
//!     let task = client
//!         .tasks_create(&json!({
//!             "name": "My LP ticket",
//!             "parent_id": 123456,
//!             "description": "Description of my LP ticket",
//!         }))
//!         .await?;
//!     println!("ID of the new task: {}", task["id"]);
//!
//!     // Log two hours against it
//!     client
//!         .tasks_track_time(123456, &json!({"work": 2, "activity_id": 12345}))
//!         .await?;
//!
//!     // Ten open tasks
//!     let open = client
//!         .tasks(None, &Query::new().limit(10).filter("is_done is false"))
//!         .await?;
//!     println!("{open:#}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Responses
//!
//! Resource methods return the decoded body as a [`serde_json::Value`].
//! Error bodies such as `{"type": "Error", "error": "NotFound"}` are data,
//! not errors; inspect them with [`RemoteError::from_value`]. Delete
//! methods return the raw body as a `String`.
//!
//! For typed access, the [`Get`], [`List`] and [`Create`] traits are
//! implemented by [`Task`], [`Project`], [`ClientRecord`], [`Member`] and
//! [`Activity`]; they turn error bodies into
//! [`LiquidPlannerError::ApiError`].
//!
//! # Throttling
//!
//! When the service answers `{"type": "Error", "error": "Throttled"}` (or
//! HTTP 429), the request is retried after a backoff governed by
//! [`ThrottlePolicy`]: 15 seconds at first, doubling up to two minutes,
//! at most 8 retries by default. Dropping the returned future cancels the
//! wait.
//!
//! # Configuration
//!
//! [`LiquidPlannerClient::from_env`] reads:
//!
//! - `LIQUIDPLANNER_WORKSPACE_ID` (required)
//! - `LIQUIDPLANNER_EMAIL` (required)
//! - `LIQUIDPLANNER_PASSWORD` (required)
//! - `LIQUIDPLANNER_API_URL` (optional) - defaults to `https://app.liquidplanner.com/api`
//!
//! Everything else goes through [`ClientConfig`].

mod client;
mod config;
mod error;
mod models;
mod query;
mod resources;
mod throttle;
mod traits;

// Re-export core types
pub use client::LiquidPlannerClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use error::{LiquidPlannerError, Result};
pub use query::Query;
pub use throttle::{is_throttle_body, ThrottlePolicy, DEFAULT_THROTTLE_DELAY};

// Re-export traits
pub use traits::{Create, Get, List};

// Re-export models
pub use models::{
    Activity, ClientParams, ClientRecord, CommentParams, Member, Project, ProjectParams,
    RemoteError, Task, TaskParams, TrackTimeParams,
};
