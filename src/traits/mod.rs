//! Trait definitions for typed LiquidPlanner operations.
//!
//! Each model type implements the traits its routes support. The traits sit
//! on top of the untyped resource methods and turn error-shaped bodies into
//! [`LiquidPlannerError::ApiError`](crate::LiquidPlannerError::ApiError).

mod create;
mod get;
mod list;

pub use create::Create;
pub use get::Get;
pub use list::List;
