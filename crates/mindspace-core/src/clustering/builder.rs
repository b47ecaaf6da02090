//! Per-class centroid construction.
//!
//! Each class's embeddings are clustered independently with
//! `effective_k = min(k, class size)`, so small classes get one centroid per
//! example and never more.

use std::collections::BTreeMap;

use mindspace_types::centroid::{CentroidMap, Vector};
use mindspace_types::config::ClusteringConfig;
use mindspace_types::error::CentroidError;
use mindspace_types::sentiment::{Label, TrainingExample};

use super::kmeans;

/// Embeddings grouped by class, iterated in label order.
pub type LabeledVectors = BTreeMap<Label, Vec<Vector>>;

/// Parameters for the per-class k-means runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterParams {
    /// Maximum centroids per class.
    pub k: usize,
    pub seed: u64,
    pub max_iterations: usize,
    pub tolerance: f32,
}

impl Default for ClusterParams {
    fn default() -> Self {
        ClusteringConfig::default().into()
    }
}

impl From<&ClusteringConfig> for ClusterParams {
    fn from(config: &ClusteringConfig) -> Self {
        Self {
            k: config.clusters,
            seed: config.seed,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

impl From<ClusteringConfig> for ClusterParams {
    fn from(config: ClusteringConfig) -> Self {
        Self::from(&config)
    }
}

impl ClusterParams {
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }
}

/// Pair each training example with its embedding and group by label.
///
/// `embeddings[i]` must belong to `examples[i]`.
pub fn group_by_label(
    examples: &[TrainingExample],
    embeddings: Vec<Vector>,
) -> Result<LabeledVectors, CentroidError> {
    if examples.len() != embeddings.len() {
        return Err(CentroidError::LengthMismatch {
            examples: examples.len(),
            embeddings: embeddings.len(),
        });
    }

    let mut grouped = LabeledVectors::new();
    for (example, embedding) in examples.iter().zip(embeddings) {
        grouped.entry(example.label).or_default().push(embedding);
    }
    Ok(grouped)
}

/// Build the centroid map: one entry per class, `min(k, class size)` centroids each.
///
/// All vectors must share one dimensionality. Fails on an empty input, an
/// empty class, or `k == 0`; these are configuration errors surfaced before
/// any request is served.
pub fn build_centroids(
    classes: &LabeledVectors,
    params: &ClusterParams,
) -> Result<CentroidMap, CentroidError> {
    if params.k == 0 {
        return Err(CentroidError::InvalidClusterCount(params.k));
    }
    if let Some((&label, _)) = classes.iter().find(|(_, vectors)| vectors.is_empty()) {
        return Err(CentroidError::EmptyClass(label));
    }
    let dimension = classes
        .values()
        .next()
        .and_then(|vectors| vectors.first())
        .map(Vec::len)
        .ok_or(CentroidError::EmptyTrainingSet)?;

    let mut map = CentroidMap::new(dimension);
    for (&label, vectors) in classes {
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(CentroidError::DimensionMismatch {
                label,
                expected: dimension,
                actual: bad.len(),
            });
        }

        let effective_k = params.k.min(vectors.len());
        let fit = kmeans::fit(
            vectors,
            effective_k,
            params.seed,
            params.max_iterations,
            params.tolerance,
        );
        tracing::debug!(
            %label,
            examples = vectors.len(),
            centroids = effective_k,
            iterations = fit.iterations,
            inertia = fit.inertia,
            "Clustered class"
        );
        map.insert(label, fit.centroids)?;
    }

    Ok(map)
}
