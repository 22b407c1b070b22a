//! CatalogSource trait definition.
//!
//! The store catalog is an external collaborator: read-only per request,
//! loaded fresh on every chat turn. The file-backed implementation lives
//! in tiendita-infra.

use tiendita_types::catalog::StoreCatalog;
use tiendita_types::error::CatalogError;

/// Source of the store catalog document.
pub trait CatalogSource: Send + Sync {
    /// Load the catalog. Called once per answered chat turn.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<StoreCatalog, CatalogError>> + Send;
}
