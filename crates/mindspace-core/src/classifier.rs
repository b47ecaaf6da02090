//! Nearest-centroid classification.
//!
//! Scores a query embedding against every centroid of every class and returns
//! the class owning the most cosine-similar centroid. Pure and deterministic:
//! classes are scanned in label order, centroids in stored order, and a later
//! candidate only replaces the current best when strictly more similar.

use mindspace_types::centroid::CentroidMap;
use mindspace_types::error::ClassifyError;
use mindspace_types::sentiment::Prediction;

use crate::similarity::cosine_similarity;

/// Return the class of the centroid most similar to `query`.
///
/// Centroid pairs whose similarity is undefined (zero norm, non-finite
/// components) are skipped. If nothing can be scored the result is
/// [`ClassifyError::NoMatch`].
pub fn classify(query: &[f32], centroids: &CentroidMap) -> Result<Prediction, ClassifyError> {
    if centroids.is_empty() {
        return Err(ClassifyError::NotReady);
    }
    if query.len() != centroids.dimension() {
        return Err(ClassifyError::DimensionMismatch {
            expected: centroids.dimension(),
            actual: query.len(),
        });
    }

    let mut best: Option<Prediction> = None;
    for (label, class_centroids) in centroids.iter() {
        for centroid in class_centroids {
            let Some(similarity) = cosine_similarity(query, centroid) else {
                continue;
            };
            if best.is_none_or(|b| similarity > b.similarity) {
                best = Some(Prediction { label, similarity });
            }
        }
    }

    best.ok_or(ClassifyError::NoMatch)
}
