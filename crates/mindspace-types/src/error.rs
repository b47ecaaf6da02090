use thiserror::Error;

use crate::sentiment::Label;

/// Errors from the embedding provider.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("unknown embedding model: '{0}'")]
    UnknownModel(String),

    #[error("failed to load embedding model: {0}")]
    ModelLoad(String),

    #[error("embedding inference failed: {0}")]
    Inference(String),

    #[error("embedding provider returned {actual} vectors for {expected} texts")]
    CountMismatch { expected: usize, actual: usize },
}

/// Errors raised while building per-class centroids at startup.
#[derive(Debug, Error)]
pub enum CentroidError {
    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("class {0} has no training vectors")]
    EmptyClass(Label),

    #[error("cluster count must be at least 1, got {0}")]
    InvalidClusterCount(usize),

    #[error("{examples} training examples but {embeddings} embeddings")]
    LengthMismatch { examples: usize, embeddings: usize },

    #[error("dimension mismatch in class {label}: expected {expected}, got {actual}")]
    DimensionMismatch {
        label: Label,
        expected: usize,
        actual: usize,
    },
}

/// Errors from the startup preparation step (embed + cluster).
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("failed to embed training set: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("failed to build centroids: {0}")]
    Centroid(#[from] CentroidError),
}

/// Errors from classifying a single text.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("no centroids available")]
    NotReady,

    #[error("no centroid produced a usable similarity")]
    NoMatch,

    #[error("query dimension {actual} does not match centroid dimension {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

/// Errors from loading the labeled training dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset '{path}': {message}")]
    Io { path: String, message: String },

    #[error("malformed dataset: {0}")]
    Malformed(String),

    #[error("dataset has no '{0}' column")]
    MissingColumn(String),

    #[error("invalid label on row {row}: {message}")]
    InvalidLabel { row: usize, message: String },

    #[error("dataset '{0}' contains no usable rows")]
    Empty(String),
}
