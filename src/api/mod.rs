//! HTTP API module for the expense engine.
//!
//! This module provides the REST endpoints that parse pasted trip reports
//! and return ledgers or rendered statements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ParseRequest, StatementRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
