use crate::core::app::settings::{ProviderKind, Settings};
use crate::core::error::ConfigError;
use crate::services::text_transformation_service::TextTransformationService;
use parking_lot::RwLock;
use prosay_llm::{LLMClient, LLMClientConfig, LLMProvider, RetryConfig};
use std::sync::Arc;
use std::time::Duration;

pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_ORG_ID: &str = "OPENAI_ORG_ID";

pub struct AppState {
    pub settings: Arc<RwLock<Settings>>,
    pub transformer: TextTransformationService,
}

impl AppState {
    pub fn new(settings: Settings, transformer: TextTransformationService) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            transformer,
        }
    }

    /// Builds the transformation chain from settings. `offline` skips the
    /// remote provider, and with it the API key requirement.
    pub fn from_settings<F>(settings: Settings, offline: bool, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        settings.validate()?;

        let llm_client = if offline {
            tracing::info!("offline mode, remote provider disabled");
            None
        } else {
            let provider = resolve_provider(&settings, lookup)?;
            tracing::info!(provider = provider.name(), "remote provider configured");
            Some(LLMClient::new(provider, Some(client_config(&settings))))
        };

        let transformer = TextTransformationService::new(
            llm_client,
            settings.primary_model(),
            settings.secondary_model(),
        );

        Ok(Self::new(settings, transformer))
    }

    pub fn debug(&self) -> bool {
        self.settings.read().debug
    }

    pub fn toggle_debug(&self) -> bool {
        let mut settings = self.settings.write();
        settings.debug = !settings.debug;
        settings.debug
    }

    pub fn copy_to_clipboard(&self) -> bool {
        self.settings.read().copy_to_clipboard
    }
}

fn client_config(settings: &Settings) -> LLMClientConfig {
    LLMClientConfig {
        timeout: Duration::from_secs(settings.timeout_secs),
        retry_config: RetryConfig {
            max_retries: settings.max_retries,
            ..RetryConfig::default()
        },
    }
}

pub fn resolve_provider<F>(settings: &Settings, lookup: F) -> Result<LLMProvider, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    match settings.provider {
        ProviderKind::Gemini => Ok(LLMProvider::Gemini {
            api_key: non_empty(ENV_GEMINI_API_KEY)
                .ok_or(ConfigError::MissingApiKey(ENV_GEMINI_API_KEY))?,
        }),
        ProviderKind::OpenAI => Ok(LLMProvider::OpenAI {
            api_key: non_empty(ENV_OPENAI_API_KEY)
                .ok_or(ConfigError::MissingApiKey(ENV_OPENAI_API_KEY))?,
            org_id: non_empty(ENV_OPENAI_ORG_ID),
        }),
        ProviderKind::Ollama => Ok(LLMProvider::Ollama {
            base_url: settings.ollama_url.clone(),
        }),
    }
}
