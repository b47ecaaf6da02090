//! Application state wiring the classifier together.
//!
//! AppState holds the prepared `ClassifierContext` used by both CLI commands
//! and REST API handlers. Preparation happens once, before the listener binds.

use std::sync::Arc;

use mindspace_core::clustering::ClusterParams;
use mindspace_core::context::ClassifierContext;
use mindspace_core::embedding::BoxEmbedder;
use mindspace_infra::dataset::load_training_set;
use mindspace_infra::embedding::FastEmbedEmbedder;
use mindspace_types::config::ServiceConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ClassifierContext>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Load the dataset, then the embedding model, then build centroids.
    ///
    /// The dataset is read first so a bad CSV fails before any model download.
    pub async fn init(config: ServiceConfig) -> anyhow::Result<Self> {
        let examples = load_training_set(&config.dataset).await?;
        let embedder = FastEmbedEmbedder::load(&config.embedding).await?;

        let classifier = ClassifierContext::prepare(
            BoxEmbedder::new(embedder),
            &examples,
            ClusterParams::from(&config.clustering),
        )
        .await?;

        Ok(Self::new(classifier, config))
    }

    pub fn new(classifier: ClassifierContext, config: ServiceConfig) -> Self {
        Self {
            classifier: Arc::new(classifier),
            config: Arc::new(config),
        }
    }
}
