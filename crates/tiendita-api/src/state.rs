//! Application state wiring the concrete services together.
//!
//! The chat service is generic over the store/catalog/generator traits;
//! AppState pins it to the infra implementations.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use tiendita_core::chat::ChatService;
use tiendita_infra::catalog::FileCatalog;
use tiendita_infra::llm::GeminiGenerator;
use tiendita_infra::memory::MemorySessionStore;
use tiendita_types::config::ServiceConfig;

/// The chat service pinned to the infra implementations.
pub type ConcreteChatService = ChatService<MemorySessionStore, FileCatalog, GeminiGenerator>;

/// Shared application state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    /// Kept separately so the background sweeper can purge expired sessions.
    pub session_store: MemorySessionStore,
}

impl AppState {
    /// Wire the services from config and the API key.
    pub fn new(config: &ServiceConfig, api_key: SecretString) -> Self {
        let session_store = MemorySessionStore::new(Duration::from_secs(config.session_ttl_secs));
        let catalog = FileCatalog::new(config.catalog_path.clone());
        let generator = GeminiGenerator::new(api_key, config.model.clone());

        let chat_service = ChatService::new(session_store.clone(), catalog, generator);

        Self {
            chat_service: Arc::new(chat_service),
            session_store,
        }
    }
}
