//! Keyword-based query classification.

use tiendita_types::session::QueryType;

/// Classify a customer message by keyword membership.
///
/// Substring match on the lowercased message, first matching set wins.
/// Keywords keep their Spanish accents; the match is verbatim, so
/// "promocion" without the accent classifies via the `descuento`/`oferta`
/// companions rather than `promoción`.
pub fn classify_query(message: &str) -> QueryType {
    let message = message.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| message.contains(w));

    if contains_any(&["precio", "cuesta", "valor"]) {
        QueryType::Price
    } else if contains_any(&["producto", "artículo", "tienen", "stock"]) {
        QueryType::Product
    } else if contains_any(&["promoción", "descuento", "oferta"]) {
        QueryType::Promotion
    } else if contains_any(&["envío", "enviar", "entrega", "delivery"]) {
        QueryType::Shipping
    } else if contains_any(&["reclamo", "queja", "problema"]) {
        QueryType::Complaint
    } else {
        QueryType::General
    }
}
