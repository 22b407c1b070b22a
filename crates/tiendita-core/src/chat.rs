//! Chat service orchestrating the full conversation lifecycle.
//!
//! One inbound message flows: session lookup/creation -> dialogue state
//! machine -> (early return asking for a field) OR (catalog -> context ->
//! prompt -> model gateway -> history append) -> reply.
//!
//! Generic over [`SessionStore`], [`CatalogSource`], and [`TextGenerator`]
//! so the core never depends on tiendita-infra.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use tiendita_types::error::ChatError;
use tiendita_types::session::{CustomerField, DialogueState, Exchange, Session};

use crate::catalog::CatalogSource;
use crate::context::format_store_context;
use crate::dialogue::requirements::GREETING;
use crate::dialogue::{advance, Turn};
use crate::gateway::TextGenerator;
use crate::prompt::PromptBuilder;
use crate::session::SessionStore;

/// Outcome of one chat turn, ready for wire serialization.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub session_id: String,
    pub response: String,
    /// Field the session is now waiting for, if any.
    pub waiting_for: Option<CustomerField>,
    /// Collected fields, included once the turn was answered by the model.
    pub collected_data: Option<BTreeMap<CustomerField, String>>,
    /// True when the message failed a field validation rule.
    pub rejected: bool,
}

/// Recorded history for a session, for the history endpoint.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    pub history: Vec<Exchange>,
    pub collected_data: BTreeMap<CustomerField, String>,
}

/// Orchestrates session lifecycle, field collection, and model calls.
pub struct ChatService<S: SessionStore, C: CatalogSource, G: TextGenerator> {
    sessions: S,
    catalog: C,
    generator: G,
}

impl<S: SessionStore, C: CatalogSource, G: TextGenerator> ChatService<S, C, G> {
    pub fn new(sessions: S, catalog: C, generator: G) -> Self {
        Self {
            sessions,
            catalog,
            generator,
        }
    }

    /// Handle one inbound chat message.
    ///
    /// An unknown or absent `session_id` creates a fresh session and
    /// returns the greeting asking for the customer's name; the caller
    /// echoes the returned id on subsequent turns.
    pub async fn handle_message(
        &self,
        session_id: Option<&str>,
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        // The advance step runs inside `with_session` so the whole
        // read-modify-write happens under the store's entry lock; a turn
        // that races on the same key cannot discard a validated field.
        // The snapshot feeds the prompt after the lock is released.
        let advanced = match session_id {
            Some(id) => {
                self.sessions
                    .with_session(id, |session| {
                        session.last_activity = Utc::now();
                        let turn = advance(session, message);
                        (turn, session.clone())
                    })
                    .await?
            }
            None => None,
        };

        let Some((turn, session)) = advanced else {
            return self.start_session().await;
        };

        match turn {
            Turn::Reprompt { field, reply } => Ok(ChatReply {
                session_id: session.id,
                response: reply.to_string(),
                waiting_for: Some(field),
                collected_data: None,
                rejected: true,
            }),
            Turn::Ask { field, reply } => {
                debug!(session_id = %session.id, %field, "requesting field");
                Ok(ChatReply {
                    session_id: session.id,
                    response: reply.to_string(),
                    waiting_for: Some(field),
                    collected_data: None,
                    rejected: false,
                })
            }
            Turn::Ready { query_type } => {
                let catalog = self.catalog.load().await?;
                let context = format_store_context(&catalog, Utc::now().date_naive());
                let prompt = PromptBuilder::build(&session, &context, message);

                let response = self.generator.generate(&prompt).await?;
                info!(
                    session_id = %session.id,
                    %query_type,
                    generator = self.generator.name(),
                    "chat turn answered"
                );

                let exchange = Exchange {
                    message: message.to_string(),
                    response: response.clone(),
                    timestamp: Utc::now(),
                };
                self.sessions
                    .with_session(&session.id, |s| s.history.push(exchange))
                    .await?;

                Ok(ChatReply {
                    session_id: session.id,
                    response,
                    waiting_for: None,
                    collected_data: Some(session.collected),
                    rejected: false,
                })
            }
        }
    }

    /// Fetch the recorded exchanges and collected fields for a session.
    pub async fn history(&self, session_id: &str) -> Result<SessionHistory, ChatError> {
        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(ChatError::SessionNotFound)?;

        Ok(SessionHistory {
            history: session.history,
            collected_data: session.collected,
        })
    }

    /// Create a new session and return the greeting turn.
    async fn start_session(&self) -> Result<ChatReply, ChatError> {
        let id = format!("session_{}", Uuid::now_v7().simple());
        let mut session = Session::new(id.clone());
        session.state = DialogueState::Collecting(CustomerField::Name);
        self.sessions.create(session).await?;
        info!(session_id = %id, "session created");

        Ok(ChatReply {
            session_id: id,
            response: GREETING.to_string(),
            waiting_for: Some(CustomerField::Name),
            collected_data: None,
            rejected: false,
        })
    }
}
