//! Dialogue session types for Tiendita.
//!
//! A [`Session`] tracks one customer conversation: where it stands in the
//! field-collection dialogue, which customer fields have been gathered,
//! and the recorded exchanges.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer field collected during the scripted dialogue.
///
/// Wire names are the Spanish protocol tokens the frontend already speaks
/// (`waiting_for: "nombre"` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CustomerField {
    #[serde(rename = "nombre")]
    Name,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "celular")]
    Phone,
    #[serde(rename = "direccion")]
    Address,
    #[serde(rename = "numero_pedido")]
    OrderNumber,
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerField::Name => write!(f, "nombre"),
            CustomerField::Email => write!(f, "email"),
            CustomerField::Phone => write!(f, "celular"),
            CustomerField::Address => write!(f, "direccion"),
            CustomerField::OrderNumber => write!(f, "numero_pedido"),
        }
    }
}

impl FromStr for CustomerField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nombre" => Ok(CustomerField::Name),
            "email" => Ok(CustomerField::Email),
            "celular" => Ok(CustomerField::Phone),
            "direccion" => Ok(CustomerField::Address),
            "numero_pedido" => Ok(CustomerField::OrderNumber),
            other => Err(format!("invalid customer field: '{other}'")),
        }
    }
}

/// Coarse topic classification of a customer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryType {
    #[serde(rename = "precio")]
    Price,
    #[serde(rename = "producto")]
    Product,
    #[serde(rename = "promocion")]
    Promotion,
    #[serde(rename = "envio")]
    Shipping,
    #[serde(rename = "reclamo")]
    Complaint,
    #[serde(rename = "general")]
    General,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Price => write!(f, "precio"),
            QueryType::Product => write!(f, "producto"),
            QueryType::Promotion => write!(f, "promocion"),
            QueryType::Shipping => write!(f, "envio"),
            QueryType::Complaint => write!(f, "reclamo"),
            QueryType::General => write!(f, "general"),
        }
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "precio" => Ok(QueryType::Price),
            "producto" => Ok(QueryType::Product),
            "promocion" => Ok(QueryType::Promotion),
            "envio" => Ok(QueryType::Shipping),
            "reclamo" => Ok(QueryType::Complaint),
            "general" => Ok(QueryType::General),
            other => Err(format!("invalid query type: '{other}'")),
        }
    }
}

/// Where a session stands in the field-collection dialogue.
///
/// Closed enum with exhaustive matching everywhere; an unhandled state is a
/// compile error, not a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "field", rename_all = "snake_case")]
pub enum DialogueState {
    /// Session just created, nothing collected yet.
    Initial,
    /// Waiting for the customer to supply one specific field.
    Collecting(CustomerField),
    /// All required fields present; free-form chat enabled.
    Active,
}

/// One recorded chat turn: the customer message and the model's reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub message: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// A per-conversation record: dialogue state, collected fields, history.
///
/// Identified by an opaque string key that the client echoes back on every
/// turn. Mutated in place by the dialogue machine; lifetime is governed by
/// the session store's TTL policy, not the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub state: DialogueState,
    /// Field values that have passed their validation rule.
    pub collected: BTreeMap<CustomerField, String>,
    /// Topic classification of the most recent message, once known.
    pub query_type: Option<QueryType>,
    pub history: Vec<Exchange>,
    pub started_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    /// Create a fresh session in the `Initial` state.
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            state: DialogueState::Initial,
            collected: BTreeMap::new(),
            query_type: None,
            history: Vec::new(),
            started_at: now,
            last_activity: now,
        }
    }

    /// True if a validated value for `field` is already on record.
    pub fn has_field(&self, field: CustomerField) -> bool {
        self.collected.contains_key(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_field_roundtrip() {
        for field in [
            CustomerField::Name,
            CustomerField::Email,
            CustomerField::Phone,
            CustomerField::Address,
            CustomerField::OrderNumber,
        ] {
            let s = field.to_string();
            let parsed: CustomerField = s.parse().unwrap();
            assert_eq!(field, parsed);
        }
    }

    #[test]
    fn test_customer_field_serde_wire_names() {
        let json = serde_json::to_string(&CustomerField::Phone).unwrap();
        assert_eq!(json, "\"celular\"");
        let parsed: CustomerField = serde_json::from_str("\"numero_pedido\"").unwrap();
        assert_eq!(parsed, CustomerField::OrderNumber);
    }

    #[test]
    fn test_query_type_roundtrip() {
        for qt in [
            QueryType::Price,
            QueryType::Product,
            QueryType::Promotion,
            QueryType::Shipping,
            QueryType::Complaint,
            QueryType::General,
        ] {
            let s = qt.to_string();
            let parsed: QueryType = s.parse().unwrap();
            assert_eq!(qt, parsed);
        }
    }

    #[test]
    fn test_new_session_starts_initial() {
        let session = Session::new("session_test".to_string());
        assert_eq!(session.state, DialogueState::Initial);
        assert!(session.collected.is_empty());
        assert!(session.history.is_empty());
        assert!(session.query_type.is_none());
    }

    #[test]
    fn test_session_serialize() {
        let mut session = Session::new("session_abc".to_string());
        session.state = DialogueState::Collecting(CustomerField::Email);
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"state\":\"collecting\""));
        assert!(json.contains("\"field\":\"email\""));
    }

    #[test]
    fn test_has_field() {
        let mut session = Session::new("session_abc".to_string());
        assert!(!session.has_field(CustomerField::Name));
        session
            .collected
            .insert(CustomerField::Name, "Ana".to_string());
        assert!(session.has_field(CustomerField::Name));
    }
}
