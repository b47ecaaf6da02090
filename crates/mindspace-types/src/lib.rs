//! Shared domain types for Mindspace.
//!
//! This crate contains the types passed between the classifier core, the
//! infrastructure adapters and the HTTP/CLI layer: labels, training examples,
//! the centroid map, service configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod centroid;
pub mod config;
pub mod error;
pub mod sentiment;
