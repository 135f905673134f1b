use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

pub mod gemini;
pub mod ollama;
pub mod openai;

#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini { api_key: String },
    OpenAI { api_key: String, org_id: Option<String> },
    Ollama { base_url: String },
}

impl LLMProvider {
    pub fn name(&self) -> &'static str {
        match self {
            LLMProvider::Gemini { .. } => "gemini",
            LLMProvider::OpenAI { .. } => "openai",
            LLMProvider::Ollama { .. } => "ollama",
        }
    }
}

/// A remote text-generation capability: submit a prompt to a named model,
/// get text back or an error.
#[async_trait]
pub trait LLMService {
    async fn execute_prompt(&self, model: &str, prompt: &str) -> Result<String>;
}

pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    /// No retries: callers run their own model fallback chain.
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::from_secs(1),
        }
    }
}

pub struct LLMClientConfig {
    pub timeout: Duration,
    pub retry_config: RetryConfig,
}

impl Default for LLMClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
        }
    }
}

pub struct LLMClient {
    service: Box<dyn LLMService + Send + Sync>,
    config: LLMClientConfig,
}

impl LLMClient {
    pub fn new(provider: LLMProvider, config: Option<LLMClientConfig>) -> Self {
        let service: Box<dyn LLMService + Send + Sync> = match provider {
            LLMProvider::Gemini { api_key } => Box::new(gemini::GeminiService::new(api_key)),
            LLMProvider::OpenAI { api_key, org_id } => {
                Box::new(openai::OpenAIService::new(api_key, org_id))
            }
            LLMProvider::Ollama { base_url } => Box::new(ollama::OllamaService::new(base_url)),
        };

        Self::from_service(service, config)
    }

    /// Wraps an already-built service, e.g. an in-memory double in tests.
    pub fn from_service(
        service: Box<dyn LLMService + Send + Sync>,
        config: Option<LLMClientConfig>,
    ) -> Self {
        Self {
            service,
            config: config.unwrap_or_default(),
        }
    }

    async fn execute_with_retry<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
        T: Send + 'static,
    {
        let mut retries = 0;
        let max_retries = self.config.retry_config.max_retries;
        let base_delay = self.config.retry_config.base_delay;

        loop {
            match timeout(self.config.timeout, operation()).await {
                Ok(result) => match result {
                    Ok(value) => return Ok(value),
                    Err(e) => {
                        if retries >= max_retries {
                            return Err(e.context(format!(
                                "Operation failed after {} retries",
                                retries
                            )));
                        }

                        tracing::warn!("Attempt {} failed: {:#}", retries + 1, e);

                        let delay = backoff_delay(base_delay, retries);
                        tokio::time::sleep(delay).await;
                        retries += 1;
                    }
                },
                Err(_) => {
                    if retries >= max_retries {
                        return Err(anyhow::anyhow!(
                            "Operation timed out after {:?} ({} retries)",
                            self.config.timeout,
                            retries
                        ));
                    }

                    tracing::warn!("Attempt {} timed out", retries + 1);

                    let delay = backoff_delay(base_delay, retries);
                    tokio::time::sleep(delay).await;
                    retries += 1;
                }
            }
        }
    }

    pub async fn execute_prompt(&self, model: &str, prompt: &str) -> Result<String> {
        self.execute_with_retry(|| async move { self.service.execute_prompt(model, prompt).await })
            .await
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.config.retry_config = retry_config;
        self
    }
}

fn backoff_delay(base_delay: Duration, retries: u32) -> Duration {
    base_delay.saturating_mul(2u32.saturating_pow(retries))
}
