//! Infrastructure implementations for Tiendita.
//!
//! Concrete backends for the trait seams defined in tiendita-core:
//! the DashMap-backed session store with TTL expiry, the file-backed
//! catalog source, and the Gemini text-generation client. Also hosts the
//! TOML config loader.

pub mod catalog;
pub mod config;
pub mod llm;
pub mod memory;
