//! Business logic for Tiendita: field validation, query classification,
//! the dialogue state machine, context/prompt assembly, and the trait
//! seams (session store, catalog source, text generator) that the infra
//! layer implements.
//!
//! This crate never depends on tiendita-infra; everything here is pure
//! logic over the shared types plus RPITIT trait definitions.

pub mod catalog;
pub mod chat;
pub mod context;
pub mod dialogue;
pub mod gateway;
pub mod prompt;
pub mod session;
pub mod validate;
