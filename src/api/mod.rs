//! HTTP API module for the workload statistics engine.
//!
//! This module exposes the engine over REST: the full statistics report,
//! a single ranked table, and a balancing plan.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BalancingRequest, RankingRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
