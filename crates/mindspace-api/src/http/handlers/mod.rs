//! HTTP request handlers for the REST API.

pub mod centroids;
pub mod predict;
