//! Offline clustering of training embeddings into per-class centroids.

pub mod builder;
pub mod kmeans;

pub use builder::{build_centroids, group_by_label, ClusterParams, LabeledVectors};
