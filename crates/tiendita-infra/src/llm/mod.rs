//! Model gateway implementations.
//!
//! Concrete implementations of the [`TextGenerator`] trait defined in
//! tiendita-core, starting with the Google Generative Language API.
//!
//! [`TextGenerator`]: tiendita_core::gateway::TextGenerator

pub mod gemini;

pub use gemini::GeminiGenerator;
