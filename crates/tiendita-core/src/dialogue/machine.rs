//! The dialogue state machine.
//!
//! One pure function, [`advance`], consumes the incoming message against
//! the session's current state and decides whether to re-prompt for an
//! invalid field, ask for the next missing field, or hand off to free-form
//! chat. Session creation and the model call live in the chat service;
//! this module owns only the transition logic.

use tracing::debug;

use tiendita_types::session::{CustomerField, DialogueState, QueryType, Session};

use crate::dialogue::requirements::{field_prompt, field_rejection, missing_fields};
use crate::dialogue::classify::classify_query;
use crate::validate::validate_field;

/// Outcome of one state-machine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The message failed the pending field's validation rule; state is
    /// unchanged and the same field is requested again.
    Reprompt {
        field: CustomerField,
        reply: &'static str,
    },
    /// A required field is still missing; the session now waits for it.
    Ask {
        field: CustomerField,
        reply: &'static str,
    },
    /// All required fields for the classified query type are on record;
    /// the caller may build the prompt and invoke the model.
    Ready { query_type: QueryType },
}

/// Advance the session by one turn.
///
/// Steps 2-5 of the transition algorithm: consume a pending field (with
/// validation), classify the message, then either request the first
/// missing field for the classified type or transition to `Active`.
/// Fields are requested one per turn, in table order; a field that has
/// been validated and stored is never requested again.
pub fn advance(session: &mut Session, message: &str) -> Turn {
    if let DialogueState::Collecting(field) = session.state {
        if !validate_field(field, message) {
            debug!(session_id = %session.id, %field, "field value rejected");
            return Turn::Reprompt {
                field,
                reply: field_rejection(field),
            };
        }
        session.collected.insert(field, message.trim().to_string());
        debug!(session_id = %session.id, %field, "field collected");
    }

    let query_type = classify_query(message);
    session.query_type = Some(query_type);

    let missing = missing_fields(session, query_type);
    match missing.first() {
        Some(&field) => {
            session.state = DialogueState::Collecting(field);
            Turn::Ask {
                field,
                reply: field_prompt(field),
            }
        }
        None => {
            session.state = DialogueState::Active;
            Turn::Ready { query_type }
        }
    }
}
