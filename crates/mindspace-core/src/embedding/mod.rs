//! Text-to-vector port.
//!
//! `Embedder` is the trait implemented by model backends in mindspace-infra;
//! `BoxEmbedder` erases the concrete backend so the classifier context can
//! hold whichever model the configuration selects.

pub mod box_embedder;
pub mod embedder;

pub use box_embedder::BoxEmbedder;
pub use embedder::Embedder;
