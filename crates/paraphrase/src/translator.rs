//! The translation capability boundary.
//!
//! The paraphrase routine depends on this contract only; the HTTP
//! implementation is untrusted I/O with its own timeouts, and the identity
//! stub keeps every test offline and deterministic.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::config::ParaphraseConfig;
use crate::error::ParaphraseError;

// Shared client with connection pooling; per-request timeouts come from the
// config at call time.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(8)
        .build()
        .expect("failed to build HTTP client")
});

/// A capability that translates text into a target language.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ParaphraseError>;
}

/// Translator backed by a Google-Translate-v2-shaped HTTP endpoint.
pub struct HttpTranslator {
    api_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpTranslator {
    pub fn new(cfg: &ParaphraseConfig) -> Self {
        Self {
            api_url: cfg.api_url.clone(),
            api_key: cfg.api_key.clone(),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ParaphraseError> {
        let mut request = HTTP_CLIENT
            .post(&self.api_url)
            .timeout(self.timeout)
            .json(&json!({
                "q": [text],
                "target": target_language,
                "format": "text",
            }));
        if let Some(key) = self.api_key.as_deref() {
            request = request.query(&[("key", key)]);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ParaphraseError::Translation(format!("HTTP request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ParaphraseError::Translation(format!(
                "HTTP error {status}: {body}"
            )));
        }

        let body = response.json::<Value>().await.map_err(|err| {
            ParaphraseError::Translation(format!("invalid JSON response: {err}"))
        })?;
        parse_translation(body)
    }
}

/// Pulls `data.translations[0].translatedText` out of the response body.
fn parse_translation(body: Value) -> Result<String, ParaphraseError> {
    let translated = body
        .get("data")
        .and_then(|data| data.get("translations"))
        .and_then(Value::as_array)
        .and_then(|translations| translations.first())
        .and_then(|entry| entry.get("translatedText"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ParaphraseError::Translation("response did not contain a translation".into())
        })?;
    Ok(translated.to_string())
}

/// Stub translator: returns its input unchanged.
///
/// Satisfies the same contract as [`HttpTranslator`] so the paraphrase
/// routine can be exercised without a network or an API key.
pub struct IdentityTranslator;

#[async_trait]
impl Translator for IdentityTranslator {
    async fn translate(
        &self,
        text: &str,
        _target_language: &str,
    ) -> Result<String, ParaphraseError> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_translation_happy_path() {
        let body = json!({
            "data": {
                "translations": [
                    { "translatedText": "bonjour le monde" }
                ]
            }
        });
        assert_eq!(parse_translation(body).unwrap(), "bonjour le monde");
    }

    #[test]
    fn parse_translation_rejects_unexpected_shapes() {
        for body in [
            json!({}),
            json!({ "data": {} }),
            json!({ "data": { "translations": [] } }),
            json!({ "data": { "translations": [{ "translatedText": 7 }] } }),
        ] {
            assert!(parse_translation(body).is_err());
        }
    }

    #[tokio::test]
    async fn identity_translator_echoes() {
        let out = IdentityTranslator
            .translate("hello world", "fr")
            .await
            .unwrap();
        assert_eq!(out, "hello world");
    }
}
