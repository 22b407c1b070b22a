//! In-memory session store with TTL expiry.
//!
//! DashMap gives per-entry locking; `with_session` runs the caller's
//! closure while holding the entry's write guard, so concurrent turns
//! against the same session key serialize on the entry instead of
//! clobbering each other's writes. Sessions idle
//! longer than the TTL (measured from `last_activity`) are treated as
//! gone: lazily on lookup, and in bulk by [`MemorySessionStore::purge_expired`],
//! which the API binary calls on an interval.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use tiendita_core::session::SessionStore;
use tiendita_types::error::StoreError;
use tiendita_types::session::Session;

/// Process-local session store. Cheap to clone (Arc inside).
#[derive(Clone)]
pub struct MemorySessionStore {
    sessions: Arc<DashMap<String, Session>>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl,
        }
    }

    fn is_expired(&self, session: &Session) -> bool {
        let idle = Utc::now().signed_duration_since(session.last_activity);
        idle.to_std().map_or(false, |idle| idle > self.ttl)
    }

    /// Drop every expired session. Returns how many were removed.
    ///
    /// Removals are counted inside the retain closure; a snapshot diff
    /// would miscount when sessions are created concurrently.
    pub fn purge_expired(&self) -> usize {
        let purged = AtomicUsize::new(0);
        self.sessions.retain(|_, session| {
            if self.is_expired(session) {
                purged.fetch_add(1, Ordering::Relaxed);
                false
            } else {
                true
            }
        });
        let purged = purged.into_inner();
        if purged > 0 {
            debug!(purged, remaining = self.sessions.len(), "expired sessions purged");
        }
        purged
    }

    /// Number of live (non-purged) sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    async fn create(&self, session: Session) -> Result<(), StoreError> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<Session>, StoreError> {
        match self.sessions.get(session_id) {
            Some(entry) if self.is_expired(&entry) => {
                drop(entry);
                self.sessions.remove(session_id);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.clone())),
            None => Ok(None),
        }
    }

    async fn with_session<T, F>(&self, session_id: &str, f: F) -> Result<Option<T>, StoreError>
    where
        T: Send,
        F: FnOnce(&mut Session) -> T + Send,
    {
        match self.sessions.get_mut(session_id) {
            Some(entry) if self.is_expired(&entry) => {
                drop(entry);
                self.sessions.remove(session_id);
                Ok(None)
            }
            Some(mut entry) => Ok(Some(f(&mut entry))),
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &str) -> Result<(), StoreError> {
        self.sessions.remove(session_id);
        Ok(())
    }
}
