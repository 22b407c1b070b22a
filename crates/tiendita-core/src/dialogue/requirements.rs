//! The required-fields table and the scripted prompt texts.
//!
//! Static, process-wide constants. Fields are requested in the declaration
//! order of the table for the classified query type, one per turn.

use tiendita_types::session::{CustomerField, QueryType, Session};

use CustomerField::{Address, Email, Name, OrderNumber, Phone};

/// Fields that must be on record before a query of this type is answered.
///
/// Every type carries the baseline registration trio (name, email, phone);
/// shipping swaps email for a delivery address and complaints additionally
/// need the order number.
pub fn required_fields(query_type: QueryType) -> &'static [CustomerField] {
    match query_type {
        QueryType::Price => &[Name, Email],
        QueryType::Product => &[Name, Email, Phone],
        QueryType::Promotion => &[Name, Email, Phone],
        QueryType::Shipping => &[Name, Address, Phone],
        QueryType::Complaint => &[Name, Email, Phone, OrderNumber],
        QueryType::General => &[Name, Email, Phone],
    }
}

/// Required fields for `query_type` not yet collected, in table order.
pub fn missing_fields(session: &Session, query_type: QueryType) -> Vec<CustomerField> {
    required_fields(query_type)
        .iter()
        .copied()
        .filter(|f| !session.has_field(*f))
        .collect()
}

/// The scripted request text for a field.
pub fn field_prompt(field: CustomerField) -> &'static str {
    match field {
        Name => "Por favor, dime tu nombre:",
        Email => "¿Me podrías proporcionar tu email?",
        Phone => "Necesito tu número de celular (debe empezar con 9 y tener 9 dígitos):",
        Address => "¿Podrías proporcionarme tu dirección de envío?",
        OrderNumber => "¿Me podrías proporcionar el número de pedido?",
    }
}

/// The re-prompt text shown when a field value fails validation.
pub fn field_rejection(field: CustomerField) -> &'static str {
    match field {
        Email => "El formato del email no es válido. Por favor, ingresa un email válido.",
        Phone => {
            "El número de celular debe tener 9 dígitos y empezar con 9. Por favor, intenta nuevamente."
        }
        Name | Address | OrderNumber => "No recibí ningún dato. Por favor, intenta nuevamente.",
    }
}

/// Greeting for a brand-new session; always asks for the name first.
pub const GREETING: &str = "¡Hola! Para poder ayudarte mejor, ¿podrías decirme tu nombre?";
