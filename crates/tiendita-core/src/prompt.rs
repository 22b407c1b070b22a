//! Prompt builder for answered chat turns.
//!
//! Assembles the final prompt from the persona instruction, the formatted
//! store context, the collected customer fields, recent history, and the
//! current message. Sections are delimited with tags so the model can tell
//! store data from customer data.
//!
//! Layout:
//! ```text
//! <persona>...</persona>
//! <cliente>nombre: Ana ...</cliente>
//! <tipo_consulta>precio</tipo_consulta>
//! <tienda>{formatted catalog}</tienda>
//! <historial>Cliente: ... / Asistente: ...</historial>
//! <mensaje>{current message}</mensaje>
//! ```

use tiendita_types::session::Session;

/// Only the most recent exchanges are replayed into the prompt.
const MAX_HISTORY_EXCHANGES: usize = 5;

/// Builds the model prompt for one answered turn.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Assemble the complete prompt for the current message.
    pub fn build(session: &Session, store_context: &str, message: &str) -> String {
        let mut sections = Vec::with_capacity(6);

        sections.push(
            "<persona>\n\
             Eres un asistente virtual de tienda.\n\
             Responde de manera amable y personalizada, usando solo la información\n\
             proporcionada y el nombre del cliente. Si te preguntan por algo que no\n\
             está en los datos, indícalo amablemente.\n\
             </persona>"
                .to_string(),
        );

        if !session.collected.is_empty() {
            let fields: Vec<String> = session
                .collected
                .iter()
                .map(|(field, value)| format!("{field}: {value}"))
                .collect();
            sections.push(format!("<cliente>\n{}\n</cliente>", fields.join("\n")));
        }

        if let Some(query_type) = session.query_type {
            sections.push(format!("<tipo_consulta>{query_type}</tipo_consulta>"));
        }

        sections.push(format!("<tienda>\n{store_context}\n</tienda>"));

        if !session.history.is_empty() {
            let recent: Vec<String> = session
                .history
                .iter()
                .rev()
                .take(MAX_HISTORY_EXCHANGES)
                .rev()
                .map(|e| format!("Cliente: {}\nAsistente: {}", e.message, e.response))
                .collect();
            sections.push(format!("<historial>\n{}\n</historial>", recent.join("\n")));
        }

        sections.push(format!("<mensaje>\n{message}\n</mensaje>"));

        sections.join("\n\n")
    }
}
