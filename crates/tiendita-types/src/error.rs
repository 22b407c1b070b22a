use thiserror::Error;

use crate::llm::GatewayError;

/// Errors from session store operations (used by the trait definition in
/// tiendita-core; implementations live in tiendita-infra).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session not found")]
    NotFound,

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Errors from loading or parsing the store catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(String),

    #[error("failed to parse catalog: {0}")]
    Parse(String),
}

/// Errors surfaced by the chat service.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("session not found")]
    SessionNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::NotFound.to_string(), "session not found");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Parse("missing field `info_general`".to_string());
        assert!(err.to_string().contains("info_general"));
    }

    #[test]
    fn test_chat_error_from_gateway() {
        let err: ChatError = GatewayError::AuthenticationFailed.into();
        assert_eq!(err.to_string(), "authentication failed");
    }
}
