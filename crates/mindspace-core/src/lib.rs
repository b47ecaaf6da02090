//! Classification logic and embedding trait definitions for Mindspace.
//!
//! This crate defines the `Embedder` port that the infrastructure layer
//! implements, plus the pure clustering and scoring functions. It depends
//! only on `mindspace-types` -- never on `mindspace-infra` or any model
//! runtime.

pub mod classifier;
pub mod clustering;
pub mod context;
pub mod embedding;
pub mod similarity;
