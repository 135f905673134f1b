pub mod settings;
pub mod setup;
mod state;

pub use state::{resolve_provider, AppState, ENV_GEMINI_API_KEY, ENV_OPENAI_API_KEY, ENV_OPENAI_ORG_ID};
