//! Embedder trait for text-to-vector conversion.
//!
//! Implementations (e.g. local fastembed models) live in mindspace-infra.

use mindspace_types::error::EmbeddingError;

/// Trait for converting text into fixed-length embedding vectors.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Output must be deterministic for a given model and the dimensionality must
/// not change for the lifetime of the value.
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts, returning one vector per input in input order.
    fn embed_batch(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, EmbeddingError>> + Send;

    /// Embed a single text.
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbeddingError>> + Send {
        let texts = vec![text.to_string()];
        async move {
            let vectors = self.embed_batch(&texts).await?;
            let [vector]: [Vec<f32>; 1] =
                vectors
                    .try_into()
                    .map_err(|rest: Vec<Vec<f32>>| EmbeddingError::CountMismatch {
                        expected: 1,
                        actual: rest.len(),
                    })?;
            Ok(vector)
        }
    }

    /// The model identifier (e.g. "Xenova/bge-small-en-v1.5").
    fn model_name(&self) -> &str;

    /// The dimensionality of the output vectors.
    fn dimension(&self) -> usize;
}
