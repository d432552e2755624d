//! HTTP adapter for the evaluation API.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::EvaluationApiError;
pub use routes::evaluation_router;
