//! HTTP/REST API layer for Mindspace.
//!
//! Axum-based API: the frontend-compatible `POST /predict`, envelope-format
//! routes under `/api/v1/`, and CORS for the configured browser origins.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
