use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::LLMService;

pub struct OllamaService {
    client: Client,
    base_url: String,
}

impl OllamaService {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl LLMService for OllamaService {
    async fn execute_prompt(&self, model: &str, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(format!(
                "{}/api/generate",
                self.base_url.trim_end_matches('/')
            ))
            .json(&json!({
                "model": model,
                "prompt": prompt,
                "stream": false
            }))
            .send()
            .await
            .context("Failed to send request to Ollama API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Ollama request failed ({}): {}", status, error_text);
        }

        let result: Value = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        let content = result["response"]
            .as_str()
            .context("Invalid response format from Ollama")?;

        Ok(content.to_string())
    }
}
