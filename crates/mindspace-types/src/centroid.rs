//! Per-class centroid storage.
//!
//! `CentroidMap` is built once at startup and only read afterwards. Classes
//! iterate in ascending label order, which is also the tie-break order used by
//! the nearest-centroid classifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CentroidError;
use crate::sentiment::Label;

/// A centroid (or any embedding) vector.
pub type Vector = Vec<f32>;

/// Mapping from class label to that class's centroids.
///
/// Every stored class has at least one centroid, and every centroid has
/// exactly `dimension()` components. Both are enforced by [`CentroidMap::insert`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentroidMap {
    classes: BTreeMap<Label, Vec<Vector>>,
    dimension: usize,
}

impl CentroidMap {
    /// Create an empty map for vectors of the given dimensionality.
    pub fn new(dimension: usize) -> Self {
        Self {
            classes: BTreeMap::new(),
            dimension,
        }
    }

    /// Store the centroids for `label`, replacing any previous entry.
    pub fn insert(&mut self, label: Label, centroids: Vec<Vector>) -> Result<(), CentroidError> {
        if centroids.is_empty() {
            return Err(CentroidError::EmptyClass(label));
        }
        if let Some(bad) = centroids.iter().find(|c| c.len() != self.dimension) {
            return Err(CentroidError::DimensionMismatch {
                label,
                expected: self.dimension,
                actual: bad.len(),
            });
        }
        self.classes.insert(label, centroids);
        Ok(())
    }

    pub fn get(&self, label: Label) -> Option<&[Vector]> {
        self.classes.get(&label).map(Vec::as_slice)
    }

    /// Iterate classes in ascending label order, centroids in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &[Vector])> {
        self.classes.iter().map(|(label, c)| (*label, c.as_slice()))
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.classes.keys().copied()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of centroids across all classes.
    pub fn total_centroids(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    /// Per-class centroid counts, in iteration order.
    pub fn class_summaries(&self) -> Vec<ClassSummary> {
        self.classes
            .iter()
            .map(|(label, centroids)| ClassSummary {
                label: *label,
                centroids: centroids.len(),
            })
            .collect()
    }
}

/// Centroid count for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub label: Label,
    pub centroids: usize,
}

/// Description of a prepared classifier, exposed by the CLI and HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentroidSummary {
    /// Embedding model code (e.g. "Xenova/bge-small-en-v1.5").
    pub model: String,
    pub dimension: usize,
    /// Number of labeled rows the centroids were built from.
    pub training_examples: usize,
    /// Configured cluster count per class (upper bound).
    pub clusters_per_class: usize,
    pub classes: Vec<ClassSummary>,
}
