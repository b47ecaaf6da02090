//! FastEmbed-based local embedding generator.
//!
//! Implements the `Embedder` trait from `mindspace-core` using fastembed's
//! ONNX runtime inference. The model session is not reentrant, so it sits
//! behind a mutex and every call runs on the blocking thread pool.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use mindspace_core::embedding::Embedder;
use mindspace_types::config::EmbeddingConfig;
use mindspace_types::error::EmbeddingError;

/// A fastembed model resolved from a configuration string.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub model: EmbeddingModel,
    /// Canonical model code (Hugging Face repository).
    pub code: String,
    pub dimension: usize,
}

/// Look up a fastembed text model by model code or enum variant name.
///
/// Matching order: exact model code, variant name, then repository name
/// without the owner prefix ("bge-small-en-v1.5"). All comparisons ignore
/// ASCII case.
pub fn resolve_model(name: &str) -> Result<ResolvedModel, EmbeddingError> {
    let wanted = name.trim();
    let models = TextEmbedding::list_supported_models();
    let repo_name = |code: &str| code.rsplit('/').next().unwrap_or(code).to_string();

    let found = models
        .iter()
        .find(|info| info.model_code.eq_ignore_ascii_case(wanted))
        .or_else(|| {
            models
                .iter()
                .find(|info| format!("{:?}", info.model).eq_ignore_ascii_case(wanted))
        })
        .or_else(|| {
            models
                .iter()
                .find(|info| repo_name(&info.model_code).eq_ignore_ascii_case(&repo_name(wanted)))
        });

    found
        .map(|info| ResolvedModel {
            model: info.model.clone(),
            code: info.model_code.clone(),
            dimension: info.dim,
        })
        .ok_or_else(|| EmbeddingError::UnknownModel(wanted.to_string()))
}

/// Default model download location: `{cache_dir}/mindspace/models`.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mindspace")
        .join("models")
}

/// Local fastembed embedder.
pub struct FastEmbedEmbedder {
    model: Arc<Mutex<TextEmbedding>>,
    model_code: String,
    dimension: usize,
    batch_size: Option<usize>,
}

impl FastEmbedEmbedder {
    /// Resolve the configured model and load it, downloading on first use.
    pub async fn load(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let resolved = resolve_model(&config.model)?;
        let cache_dir = config.cache_dir.clone().unwrap_or_else(default_cache_dir);

        tracing::info!(
            model = %resolved.code,
            dimension = resolved.dimension,
            cache_dir = %cache_dir.display(),
            "Loading embedding model"
        );
        let start = Instant::now();

        let model = resolved.model.clone();
        let text_embedding = tokio::task::spawn_blocking(move || {
            TextEmbedding::try_new(
                InitOptions::new(model)
                    .with_cache_dir(cache_dir)
                    .with_show_download_progress(false),
            )
        })
        .await
        .map_err(|e| EmbeddingError::ModelLoad(format!("loader task failed: {e}")))?
        .map_err(|e| EmbeddingError::ModelLoad(e.to_string()))?;

        tracing::info!(
            model = %resolved.code,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Embedding model loaded"
        );

        Ok(Self {
            model: Arc::new(Mutex::new(text_embedding)),
            model_code: resolved.code,
            dimension: resolved.dimension,
            batch_size: config.batch_size,
        })
    }
}

impl Embedder for FastEmbedEmbedder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let model = Arc::clone(&self.model);
        let batch = texts.to_vec();
        let batch_size = self.batch_size;
        let vectors = tokio::task::spawn_blocking(move || {
            let mut session = model
                .lock()
                .map_err(|_| EmbeddingError::Inference("embedding model lock poisoned".to_string()))?;
            session
                .embed(batch, batch_size)
                .map_err(|e| EmbeddingError::Inference(e.to_string()))
        })
        .await
        .map_err(|e| EmbeddingError::Inference(format!("embedding task failed: {e}")))??;

        if vectors.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            });
        }
        Ok(vectors)
    }

    fn model_name(&self) -> &str {
        &self.model_code
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
