use super::*;

impl From<String> for ConfigError {
    fn from(error: String) -> Self {
        ConfigError::Loading(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Invalid(error.to_string())
    }
}
