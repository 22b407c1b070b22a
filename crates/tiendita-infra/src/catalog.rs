//! File-backed catalog source.
//!
//! The catalog JSON is read and parsed fresh on every `load()` so edits to
//! the file show up on the next chat turn without a restart.

use std::path::PathBuf;

use tiendita_core::catalog::CatalogSource;
use tiendita_types::catalog::StoreCatalog;
use tiendita_types::error::CatalogError;

/// Loads the store catalog from a fixed file path.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<StoreCatalog, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {e}", self.path.display())))?;

        serde_json::from_str(&content).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID_CATALOG: &str = r#"{
        "info_general": {
            "nombre": "Fashion Store",
            "horario": "10-20",
            "metodos_pago": ["tarjeta"],
            "politica_devoluciones": "30 días"
        },
        "categorias": {},
        "promociones": []
    }"#;

    #[tokio::test]
    async fn test_load_valid_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("store_data.json");
        tokio::fs::write(&path, VALID_CATALOG).await.unwrap();

        let catalog = FileCatalog::new(&path).load().await.unwrap();
        assert_eq!(catalog.info_general.nombre, "Fashion Store");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let catalog = FileCatalog::new("/nonexistent/store_data.json");
        let err = catalog.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("store_data.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = FileCatalog::new(&path).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_reload_sees_file_changes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("store_data.json");
        tokio::fs::write(&path, VALID_CATALOG).await.unwrap();

        let catalog = FileCatalog::new(&path);
        assert_eq!(catalog.load().await.unwrap().info_general.nombre, "Fashion Store");

        let updated = VALID_CATALOG.replace("Fashion Store", "Moda Lima");
        tokio::fs::write(&path, updated).await.unwrap();
        assert_eq!(catalog.load().await.unwrap().info_general.nombre, "Moda Lima");
    }
}
