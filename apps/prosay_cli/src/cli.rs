use clap::Parser;
use std::path::PathBuf;

use crate::core::app::settings::{ProviderKind, SettingsOverrides};
use crate::core::app::setup::LogFormat;

/// Rewrite blunt text into workplace-appropriate language.
///
/// With TEXT, rewrites it once and exits. Without, starts an interactive
/// session.
#[derive(Parser, Debug)]
#[command(name = "prosay", version, about, long_about = None)]
pub struct Cli {
    /// Text to rewrite
    pub text: Vec<String>,

    /// Remote text-generation provider
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Model tried first
    #[arg(long)]
    pub primary_model: Option<String>,

    /// Model tried when the primary one fails
    #[arg(long)]
    pub secondary_model: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings to the settings file and exit
    #[arg(long)]
    pub write_config: bool,

    /// Do not copy results to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Never call a remote model; use the built-in phrasebook
    #[arg(long)]
    pub offline: bool,

    /// Show diagnostics and remote errors
    #[arg(long)]
    pub debug: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            provider: self.provider,
            primary_model: self.primary_model.clone(),
            secondary_model: self.secondary_model.clone(),
            timeout_secs: self.timeout,
            no_clipboard: self.no_clipboard,
            debug: self.debug,
        }
    }

    /// Positional words joined back into one line, if any were given.
    pub fn one_shot_text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_words_form_one_shot_text() {
        let cli = Cli::try_parse_from(["prosay", "this", "is", "stupid"]).unwrap();
        assert_eq!(cli.one_shot_text().as_deref(), Some("this is stupid"));
        assert!(!cli.offline);
    }

    #[test]
    fn no_text_means_interactive() {
        let cli = Cli::try_parse_from(["prosay", "--offline"]).unwrap();
        assert!(cli.one_shot_text().is_none());
        assert!(cli.offline);
    }

    #[test]
    fn flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "prosay",
            "--provider",
            "openai",
            "--secondary-model",
            "gpt-4o",
            "--timeout",
            "5",
            "--no-clipboard",
            "--log-format",
            "json",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.provider, Some(ProviderKind::OpenAI));
        assert_eq!(overrides.secondary_model.as_deref(), Some("gpt-4o"));
        assert_eq!(overrides.timeout_secs, Some(5));
        assert!(overrides.no_clipboard);
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
