pub mod cli;
pub mod core;
pub mod handlers;
pub mod prompts;
pub mod services;
pub mod text;

pub use crate::core::error::AppError;
