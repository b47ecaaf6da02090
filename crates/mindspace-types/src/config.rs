//! Service configuration types for Mindspace.
//!
//! `ServiceConfig` represents `mindspace.toml`. Every section and field has a
//! default, so an empty or missing file yields a runnable configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the sentiment service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub clustering: ClusteringConfig,

    #[serde(default)]
    pub embedding: EmbeddingConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Location and column layout of the labeled CSV dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,

    #[serde(default = "default_text_column")]
    pub text_column: String,

    #[serde(default = "default_label_column")]
    pub label_column: String,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("train_relabelled.csv")
}

fn default_text_column() -> String {
    "text".to_string()
}

fn default_label_column() -> String {
    "label_scaled".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            text_column: default_text_column(),
            label_column: default_label_column(),
        }
    }
}

/// Per-class k-means settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Upper bound on centroids per class; classes with fewer examples get one
    /// centroid per example.
    #[serde(default = "default_clusters")]
    pub clusters: usize,

    /// Seed for k-means++ initialization.
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Lloyd iteration stops once the summed squared centroid shift drops to
    /// this value or below.
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
}

fn default_clusters() -> usize {
    3
}

fn default_seed() -> u64 {
    42
}

fn default_max_iterations() -> usize {
    300
}

fn default_tolerance() -> f32 {
    1e-4
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            clusters: default_clusters(),
            seed: default_seed(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

/// Embedding model selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// fastembed model, either its variant name ("BGESmallENV15") or its
    /// model code ("Xenova/bge-small-en-v1.5").
    #[serde(default = "default_model")]
    pub model: String,

    /// Where model files are downloaded. Defaults to the platform cache dir.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Batch size passed to the model when embedding the training set.
    #[serde(default)]
    pub batch_size: Option<usize>,
}

fn default_model() -> String {
    "BGESmallENV15".to_string()
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            cache_dir: None,
            batch_size: None,
        }
    }
}

/// HTTP listener and CORS settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call the API with credentials.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}
