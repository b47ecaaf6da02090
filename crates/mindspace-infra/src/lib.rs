//! Infrastructure layer for Mindspace.
//!
//! Contains the implementations behind the ports defined in `mindspace-core`:
//! the fastembed-backed `Embedder`, the CSV training-set loader, and the
//! `mindspace.toml` configuration loader.

pub mod config;
pub mod dataset;
pub mod embedding;
