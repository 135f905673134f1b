use clap::ValueEnum;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "warn,prosay=debug,prosay_lib=debug,prosay_llm=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the rewritten text on stdout.
pub fn init_tracing(debug: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(
            subscriber_builder.compact().with_ansi(true).finish(),
        ),
        LogFormat::Json => tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        ),
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already set: {}", e);
    }
}
