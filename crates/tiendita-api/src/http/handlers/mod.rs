//! HTTP request handlers, one module per endpoint.

pub mod chat;
pub mod history;
