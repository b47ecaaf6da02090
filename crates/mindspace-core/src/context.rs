//! ClassifierContext -- the immutable state behind every prediction.
//!
//! Built once by [`ClassifierContext::prepare`] before the service accepts
//! requests: the whole training set is embedded in one batch, grouped by label
//! and clustered into per-class centroids. Afterwards the context is shared
//! read-only (typically as `Arc<ClassifierContext>`) and needs no locking.

use std::time::Instant;

use mindspace_types::centroid::{CentroidMap, CentroidSummary};
use mindspace_types::error::{CentroidError, ClassifyError, PrepareError};
use mindspace_types::sentiment::{Prediction, TrainingExample};

use crate::classifier::classify;
use crate::clustering::{build_centroids, group_by_label, ClusterParams};
use crate::embedding::BoxEmbedder;

/// Embedding model plus the centroids built from it.
#[derive(Debug)]
pub struct ClassifierContext {
    embedder: BoxEmbedder,
    centroids: CentroidMap,
    params: ClusterParams,
    training_examples: usize,
}

impl ClassifierContext {
    /// Embed `examples`, cluster each class, and return a ready context.
    ///
    /// Any embedding failure or degenerate class aborts preparation; nothing
    /// is deferred to request time.
    pub async fn prepare(
        embedder: BoxEmbedder,
        examples: &[TrainingExample],
        params: ClusterParams,
    ) -> Result<Self, PrepareError> {
        if examples.is_empty() {
            return Err(CentroidError::EmptyTrainingSet.into());
        }

        let start = Instant::now();
        let texts: Vec<String> = examples.iter().map(|e| e.text.clone()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;
        tracing::info!(
            model = embedder.model_name(),
            examples = texts.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Embedded training set"
        );

        let grouped = group_by_label(examples, embeddings)?;
        let centroids = build_centroids(&grouped, &params)?;

        if centroids.dimension() != embedder.dimension() {
            let label = centroids.labels().next().unwrap_or_default();
            return Err(CentroidError::DimensionMismatch {
                label,
                expected: embedder.dimension(),
                actual: centroids.dimension(),
            }
            .into());
        }

        tracing::info!(
            classes = centroids.len(),
            centroids = centroids.total_centroids(),
            clusters_per_class = params.k,
            seed = params.seed,
            "Centroids ready"
        );

        Ok(Self {
            embedder,
            centroids,
            params,
            training_examples: examples.len(),
        })
    }

    /// Embed `text` and return the nearest-centroid class.
    ///
    /// Embedding failures propagate as [`ClassifyError::Embedding`]; there is
    /// no retry here.
    pub async fn predict(&self, text: &str) -> Result<Prediction, ClassifyError> {
        let query = self.embedder.embed(text).await?;
        let prediction = classify(&query, &self.centroids)?;
        tracing::debug!(
            label = %prediction.label,
            similarity = prediction.similarity,
            "Classified text"
        );
        Ok(prediction)
    }

    pub fn centroids(&self) -> &CentroidMap {
        &self.centroids
    }

    pub fn model_name(&self) -> &str {
        self.embedder.model_name()
    }

    pub fn summary(&self) -> CentroidSummary {
        CentroidSummary {
            model: self.embedder.model_name().to_string(),
            dimension: self.centroids.dimension(),
            training_examples: self.training_examples,
            clusters_per_class: self.params.k,
            classes: self.centroids.class_summaries(),
        }
    }
}
