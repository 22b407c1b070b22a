//! TextGenerator trait definition.
//!
//! The model gateway seam: one prompt in, one reply out, synchronous from
//! the caller's point of view. No retry, no streaming. Failures come back
//! as the typed [`GatewayError`] taxonomy rather than one opaque error.
//!
//! Implementations live in tiendita-infra (e.g., `GeminiGenerator`).

use tiendita_types::llm::GatewayError;

/// Trait for external text-generation backends.
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a composed prompt and receive the generated reply text.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, GatewayError>> + Send;
}
