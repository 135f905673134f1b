use anyhow::Context;
use clap::Parser;
use prosay_lib::{
    cli::Cli,
    core::app::{settings::Settings, setup, AppState},
    core::error::ConfigError,
    handlers::prompt_loop_handler::PromptLoopHandler,
    services::presentation_service::PresentationService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    settings
        .apply_env(|key| std::env::var(key).ok())
        .context("reading environment")?;
    settings.apply_overrides(&cli.overrides());

    setup::init_tracing(settings.debug, cli.log_format);

    if cli.write_config {
        let path = cli
            .config
            .clone()
            .or_else(Settings::default_path)
            .context("no config directory available; pass --config")?;
        settings.save(&path)?;
        println!("Wrote settings to {}", path.display());
        return Ok(());
    }

    let state = match AppState::from_settings(settings, cli.offline, |key| std::env::var(key).ok()) {
        Ok(state) => state,
        Err(e) => {
            let title = match e {
                ConfigError::MissingApiKey(_) => "API Key Missing",
                _ => "Configuration Error",
            };
            PresentationService::show_error(title, &e.to_string());
            return Err(e.into());
        }
    };

    match cli.one_shot_text() {
        Some(text) => PromptLoopHandler::run_once(&state, &text).await?,
        None => PromptLoopHandler::run_interactive(&state).await?,
    }

    Ok(())
}
