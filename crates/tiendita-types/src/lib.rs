//! Shared domain types for Tiendita.
//!
//! This crate has no business logic: it defines the data shapes passed
//! between the core, infra, and API layers, plus the error taxonomies.

pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod session;
