use prosay_llm::LLMClient;

use crate::prompts::text_transformer_prompt::{PromptStyle, TextTransformerPrompt};
use crate::services::response_cache_service::ResponseCacheService;
use crate::text::fallback_transformer::FallbackTransformer;
use crate::text::output_sanitizer::sanitize_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Primary,
    Secondary,
    Fallback,
    Cache,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Primary => "primary",
            SourceKind::Secondary => "secondary",
            SourceKind::Fallback => "fallback",
            SourceKind::Cache => "cache",
        }
    }
}

/// One remote model call in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAttempt {
    pub model: String,
    pub style: PromptStyle,
}

impl ModelAttempt {
    pub fn new(model: impl Into<String>, style: PromptStyle) -> Self {
        Self {
            model: model.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub model: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub source: SourceKind,
    /// Remote attempts that failed or came back empty before `text` was found.
    pub failures: Vec<AttemptFailure>,
}

/// Resolves casual text to a professional rewrite.
///
/// Order: cache, then each remote model attempt in turn, then the offline
/// fallback. Remote errors never escape `resolve`; they are recorded in
/// [`Resolution::failures`] and the next step runs. Only remote results are
/// written to the cache.
pub struct TextTransformationService {
    llm_client: Option<LLMClient>,
    attempts: Vec<ModelAttempt>,
    cache: ResponseCacheService,
    fallback: FallbackTransformer,
}

impl TextTransformationService {
    /// `llm_client: None` runs fully offline.
    pub fn new(llm_client: Option<LLMClient>, primary_model: &str, secondary_model: &str) -> Self {
        Self {
            llm_client,
            attempts: vec![
                ModelAttempt::new(primary_model, PromptStyle::Structured),
                ModelAttempt::new(secondary_model, PromptStyle::Simple),
            ],
            cache: ResponseCacheService::new(),
            fallback: FallbackTransformer::new(),
        }
    }

    pub fn with_attempts(mut self, attempts: Vec<ModelAttempt>) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn with_cache(mut self, cache: ResponseCacheService) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackTransformer) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn attempts(&self) -> &[ModelAttempt] {
        &self.attempts
    }

    pub fn cache(&self) -> &ResponseCacheService {
        &self.cache
    }

    pub fn is_offline(&self) -> bool {
        self.llm_client.is_none()
    }

    pub async fn resolve(&self, text: &str) -> Resolution {
        if let Some(cached) = self.cache.get(text) {
            tracing::debug!("cache hit");
            return Resolution {
                text: cached,
                source: SourceKind::Cache,
                failures: Vec::new(),
            };
        }

        let mut failures = Vec::new();

        if let Some(llm_client) = &self.llm_client {
            for (index, attempt) in self.attempts.iter().enumerate() {
                let source = if index == 0 {
                    SourceKind::Primary
                } else {
                    SourceKind::Secondary
                };

                match Self::call_model(llm_client, attempt, text).await {
                    Ok(professional) => {
                        tracing::info!(model = %attempt.model, source = source.label(), "remote rewrite succeeded");
                        self.cache.put(text, &professional);
                        return Resolution {
                            text: professional,
                            source,
                            failures,
                        };
                    }
                    Err(reason) => {
                        tracing::warn!(model = %attempt.model, %reason, "remote rewrite unavailable");
                        failures.push(AttemptFailure {
                            model: attempt.model.clone(),
                            reason,
                        });
                    }
                }
            }
        }

        tracing::info!("using offline fallback");
        Resolution {
            text: self.fallback.transform(text),
            source: SourceKind::Fallback,
            failures,
        }
    }

    async fn call_model(
        llm_client: &LLMClient,
        attempt: &ModelAttempt,
        text: &str,
    ) -> Result<String, String> {
        let prompt = TextTransformerPrompt::get_prompt(attempt.style, text);
        match llm_client.execute_prompt(&attempt.model, &prompt).await {
            Ok(raw) => {
                let cleaned = sanitize_output(&raw);
                if cleaned.is_empty() {
                    Err("empty response".to_string())
                } else {
                    Ok(cleaned)
                }
            }
            Err(e) => Err(format!("{:#}", e)),
        }
    }
}
