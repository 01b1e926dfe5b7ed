//! Server crate for the PackWise recommendation service.
//!
//! Contains the orchestrator that runs the per-request pipeline and the
//! axum HTTP layer that exposes it.

pub mod aggregate;
pub mod error;
pub mod orchestrator;
pub mod pages;
pub mod routes;

pub use error::ApiError;
pub use orchestrator::RecommendationOrchestrator;
pub use routes::{AppState, build_router};
