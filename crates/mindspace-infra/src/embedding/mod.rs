//! Local embedding model inference.
//!
//! Provides a fastembed-based `Embedder` (ONNX runtime, models downloaded on
//! first use into the configured cache directory).

pub mod embedder;

pub use embedder::FastEmbedEmbedder;
