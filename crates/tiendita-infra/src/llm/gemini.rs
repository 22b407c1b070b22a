//! GeminiGenerator -- concrete [`TextGenerator`] for the Google
//! Generative Language API (`models/{model}:generateContent`).
//!
//! The API key is wrapped in [`secrecy::SecretString`] and only exposed
//! when building the request header; it never appears in Debug output or
//! tracing logs.
//!
//! [`TextGenerator`]: tiendita_core::gateway::TextGenerator

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use tiendita_core::gateway::TextGenerator;
use tiendita_types::llm::GatewayError;

/// Gemini text-generation client.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiGenerator {
    /// Create a new Gemini client for the given model.
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for tests or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

// GeminiGenerator intentionally does not derive Debug so the API key can
// never leak through formatting, even though SecretString redacts itself.

impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => GatewayError::AuthenticationFailed,
                429 => GatewayError::RateLimited {
                    retry_after_ms: None,
                },
                _ => GatewayError::Provider {
                    status: status.as_u16(),
                    message: error_body,
                },
            });
        }

        let gemini_resp: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(format!("failed to parse response: {e}")))?;

        let text = gemini_resp
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GatewayError::InvalidResponse(
                "response contained no candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}

// --- Wire mirror types for the generateContent endpoint ---

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_generator() -> GeminiGenerator {
        GeminiGenerator::new(
            SecretString::from("test-key-not-real"),
            "gemini-pro".to_string(),
        )
    }

    #[test]
    fn test_generator_name_and_model() {
        let generator = make_generator();
        assert_eq!(generator.name(), "gemini");
        assert_eq!(generator.model(), "gemini-pro");
    }

    #[test]
    fn test_url_includes_model() {
        let generator = make_generator().with_base_url("http://localhost:9999".to_string());
        assert_eq!(
            generator.url(),
            "http://localhost:9999/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_request_serialization() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hola".to_string(),
                }],
            }],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"hola"}]}]}"#);
    }

    #[test]
    fn test_response_parsing_joins_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "Hola "}, {"text": "Ana"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text: String = resp.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Hola Ana");
    }

    #[test]
    fn test_empty_candidates_parse() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.candidates.is_empty());
    }
}
