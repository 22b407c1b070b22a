//! Service configuration loader.
//!
//! Reads `config.toml` and deserializes it into [`ServiceConfig`]. Falls
//! back to defaults when the file is missing or malformed, so the service
//! always starts.

use std::path::Path;

use tiendita_types::config::ServiceConfig;

/// Load the service configuration from a TOML file.
///
/// - Missing file: returns [`ServiceConfig::default()`].
/// - Unparseable file: logs a warning and returns the default.
/// - Valid file: returns the parsed config (absent keys take defaults).
pub async fn load_config(path: &Path) -> ServiceConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
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
    async fn test_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).await;
        assert_eq!(config.port, 5000);
        assert_eq!(config.model, "gemini-pro");
    }

    #[tokio::test]
    async fn test_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
port = 8080
catalog_path = "/srv/tiendita/store_data.json"
session_ttl_secs = 600
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path, "/srv/tiendita/store_data.json");
        assert_eq!(config.session_ttl_secs, 600);
        // Unspecified keys keep their defaults.
        assert_eq!(config.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn test_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.port, 5000);
    }
}
