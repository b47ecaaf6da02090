//! Service configuration loader for Mindspace.
//!
//! Reads `mindspace.toml` and deserializes it into [`ServiceConfig`]. Falls
//! back to defaults when the file is missing or malformed.

use std::path::Path;

use mindspace_types::config::ServiceConfig;

/// Config file name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "mindspace.toml";

/// Load service configuration from `path`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_service_config(path: &Path) -> ServiceConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServiceConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_service_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_service_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert_eq!(config, ServiceConfig::default());
    }

    #[tokio::test]
    async fn load_service_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &config_path,
            r#"
[dataset]
path = "data/train.csv"

[clustering]
clusters = 4
seed = 7

[server]
port = 8080
"#,
        )
        .await
        .unwrap();

        let config = load_service_config(&config_path).await;
        assert_eq!(config.dataset.path, Path::new("data/train.csv"));
        assert_eq!(config.clustering.clusters, 4);
        assert_eq!(config.clustering.seed, 7);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.embedding, Default::default());
    }

    #[tokio::test]
    async fn load_service_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_service_config(&config_path).await;
        assert_eq!(config, ServiceConfig::default());
    }
}
