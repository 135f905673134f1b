use crate::core::error::ConfigError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = "prosay";
const SETTINGS_FILE: &str = "settings.json";

/// Upper bound for client-level retries; backoff doubles per retry.
pub const MAX_RETRIES_LIMIT: u32 = 5;

pub const ENV_PROVIDER: &str = "PROSAY_PROVIDER";
pub const ENV_PRIMARY_MODEL: &str = "PROSAY_PRIMARY_MODEL";
pub const ENV_SECONDARY_MODEL: &str = "PROSAY_SECONDARY_MODEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    #[value(name = "openai")]
    OpenAI,
    Ollama,
}

impl ProviderKind {
    /// (primary, secondary) model ids used when settings leave them unset.
    pub fn default_models(&self) -> (&'static str, &'static str) {
        match self {
            ProviderKind::Gemini => ("gemini-2.0-flash", "gemini-pro"),
            ProviderKind::OpenAI => ("gpt-4o-mini", "gpt-4o"),
            ProviderKind::Ollama => ("llama3", "llama2"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub provider: ProviderKind,
    pub primary_model: Option<String>,
    pub secondary_model: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub copy_to_clipboard: bool,
    pub debug: bool,
    pub ollama_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            primary_model: None,
            secondary_model: None,
            timeout_secs: 30,
            max_retries: 0,
            copy_to_clipboard: true,
            debug: false,
            ollama_url: "http://localhost:11434".to_string(),
        }
    }
}

/// Values given on the command line; `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub provider: Option<ProviderKind>,
    pub primary_model: Option<String>,
    pub secondary_model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub no_clipboard: bool,
    pub debug: bool,
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Reads settings from `path`, or from the default location when no path
    /// is given. A missing default file yields defaults; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if required {
                return Err(ConfigError::Loading(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let settings: Settings = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| format!("{}: {}", parent.display(), e))?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .map_err(|e| format!("{}: {}", path.display(), e).into())
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_PROVIDER) {
            self.provider = ProviderKind::from_str(raw.trim(), true).map_err(|_| {
                ConfigError::Invalid(format!("{} has unknown provider '{}'", ENV_PROVIDER, raw))
            })?;
        }
        if let Some(model) = lookup(ENV_PRIMARY_MODEL) {
            self.primary_model = Some(model);
        }
        if let Some(model) = lookup(ENV_SECONDARY_MODEL) {
            self.secondary_model = Some(model);
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(provider) = overrides.provider {
            self.provider = provider;
        }
        if let Some(model) = &overrides.primary_model {
            self.primary_model = Some(model.clone());
        }
        if let Some(model) = &overrides.secondary_model {
            self.secondary_model = Some(model.clone());
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout_secs = secs;
        }
        if overrides.no_clipboard {
            self.copy_to_clipboard = false;
        }
        if overrides.debug {
            self.debug = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.max_retries > MAX_RETRIES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_retries must be at most {}, got {}",
                MAX_RETRIES_LIMIT, self.max_retries
            )));
        }
        if self.primary_model().trim().is_empty() || self.secondary_model().trim().is_empty() {
            return Err(ConfigError::Invalid("model ids must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn primary_model(&self) -> &str {
        self.primary_model
            .as_deref()
            .unwrap_or(self.provider.default_models().0)
    }

    pub fn secondary_model(&self) -> &str {
        self.secondary_model
            .as_deref()
            .unwrap_or(self.provider.default_models().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_target_gemini_chain() {
        let settings = Settings::default();
        assert_eq!(settings.primary_model(), "gemini-2.0-flash");
        assert_eq!(settings.secondary_model(), "gemini-pro");
        assert!(settings.copy_to_clipboard);
        assert_eq!(settings.max_retries, 0);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "provider": "openai", "debug": true }"#).unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.provider, ProviderKind::OpenAI);
        assert!(settings.debug);
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.primary_model(), "gpt-4o-mini");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Loading(_)));
    }

    #[test]
    fn malformed_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ provider: ").unwrap();
        assert!(matches!(
            Settings::load(Some(path.as_path())).unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn save_then_load_keeps_models() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            primary_model: Some("gemini-1.5-pro".to_string()),
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(
            Settings::load(Some(path.as_path())).unwrap().primary_model(),
            "gemini-1.5-pro"
        );
    }

    #[test]
    fn env_then_cli_precedence() {
        let env: HashMap<&str, &str> = [
            (ENV_PROVIDER, "Ollama"),
            (ENV_PRIMARY_MODEL, "mistral"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.provider, ProviderKind::Ollama);
        assert_eq!(settings.primary_model(), "mistral");
        assert_eq!(settings.secondary_model(), "llama2");

        settings.apply_overrides(&SettingsOverrides {
            primary_model: Some("phi3".to_string()),
            no_clipboard: true,
            ..SettingsOverrides::default()
        });
        assert_eq!(settings.primary_model(), "phi3");
        assert!(!settings.copy_to_clipboard);
    }

    #[test]
    fn unknown_provider_in_env_is_rejected() {
        let mut settings = Settings::default();
        let err = settings
            .apply_env(|key| (key == ENV_PROVIDER).then(|| "watson".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let settings = Settings {
            timeout_secs: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn retries_above_limit_fail_validation() {
        let at_limit = Settings {
            max_retries: MAX_RETRIES_LIMIT,
            ..Settings::default()
        };
        assert!(at_limit.validate().is_ok());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "max_retries": 40 }"#).unwrap();
        let loaded = Settings::load(Some(path.as_path())).unwrap();
        assert!(matches!(loaded.validate(), Err(ConfigError::Invalid(_))));
    }
}
