//! SessionStore trait definition.
//!
//! Keyed access to session records. Mutation goes through
//! [`SessionStore::with_session`], which runs the caller's closure under
//! whatever locking the implementation uses, so two turns on the same key
//! cannot lose each other's writes. Lifetime and concurrency policy belong
//! to the implementation, not the caller; the in-memory TTL store lives in
//! tiendita-infra. Uses native async fn in traits (RPITIT, Rust 2024
//! edition).

use tiendita_types::error::StoreError;
use tiendita_types::session::Session;

/// Repository trait for session records, keyed by the opaque session id.
pub trait SessionStore: Send + Sync {
    /// Insert a new session record.
    fn create(
        &self,
        session: Session,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Fetch a session by key. `Ok(None)` when the key is unknown or the
    /// record has expired.
    fn get(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Session>, StoreError>> + Send;

    /// Run `f` against the stored session, atomically with respect to
    /// other `with_session` calls on the same key. `Ok(None)` when the key
    /// is unknown or the record has expired.
    fn with_session<T, F>(
        &self,
        session_id: &str,
        f: F,
    ) -> impl std::future::Future<Output = Result<Option<T>, StoreError>> + Send
    where
        T: Send,
        F: FnOnce(&mut Session) -> T + Send;

    /// Remove a session record. Removing an unknown key is not an error.
    fn delete(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
