//! HTTP API
//!
//! JSON endpoints over the [`PlanInterpreter`](crate::PlanInterpreter).
//! Successful responses use the `{success, data}` envelope and errors the
//! `{success: false, error, message, code}` body.

pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{create_router, AppState};
