use console::style;
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::core::app::AppState;
use crate::core::error::AppError;
use crate::services::clipboard_service::ClipboardService;
use crate::services::presentation_service::PresentationService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Exit,
    ToggleDebug,
    Empty,
    Transform(String),
}

/// Classifies one line typed by the user. Control words are matched
/// case-insensitively; leading colons are dropped from text to transform.
pub fn parse_input(raw: &str) -> InputCommand {
    let trimmed = raw.trim();
    match trimmed.to_lowercase().as_str() {
        "exit" | "quit" | "q" => return InputCommand::Exit,
        "debug" => return InputCommand::ToggleDebug,
        _ => {}
    }

    let text = trimmed.trim_start_matches(':').trim();
    if text.is_empty() {
        InputCommand::Empty
    } else {
        InputCommand::Transform(text.to_string())
    }
}

/// How the interactive loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Finished,
    Interrupted,
}

pub struct PromptLoopHandler;

impl PromptLoopHandler {
    pub async fn run_interactive(state: &AppState) -> Result<(), AppError> {
        PresentationService::show_header();
        if state.transformer.is_offline() {
            println!("{}", style("Offline mode: using built-in phrasebook only").yellow());
        } else {
            println!("{} API key loaded successfully", style("✓").green());
        }

        let input = BufReader::new(tokio::io::stdin());
        match Self::drive(state, input, tokio::signal::ctrl_c()).await? {
            LoopExit::Interrupted => {
                println!("\n\n{}", style("Program interrupted. Goodbye!").blue().bright());
            }
            LoopExit::Finished => {
                println!(
                    "\n{}",
                    style("Thank you for using How To Professionally Say! Goodbye!")
                        .blue()
                        .bright()
                );
            }
        }
        Ok(())
    }

    /// Reads lines from `input` until exit or end of input. `interrupt` is
    /// polled for the whole session, both while waiting for a line and while
    /// a transformation is in flight.
    pub async fn drive<R, I>(state: &AppState, input: R, interrupt: I) -> Result<LoopExit, AppError>
    where
        R: AsyncBufRead + Unpin,
        I: Future,
    {
        tokio::pin!(interrupt);
        let mut lines = input.lines();

        loop {
            println!(
                "\n{} {}:",
                style("Enter your casual text").blue().bright(),
                style("(or 'exit' to quit)").dim()
            );
            print!("> ");
            std::io::stdout().flush()?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = &mut interrupt => return Ok(LoopExit::Interrupted),
            };

            let Some(line) = line else {
                tracing::debug!("input closed");
                return Ok(LoopExit::Finished);
            };

            match parse_input(&line) {
                InputCommand::Exit => return Ok(LoopExit::Finished),
                InputCommand::ToggleDebug => {
                    let on = state.toggle_debug();
                    println!(
                        "{}",
                        style(format!("Debug mode: {}", if on { "ON" } else { "OFF" })).yellow()
                    );
                }
                InputCommand::Empty => {
                    PresentationService::show_notice(
                        "Empty Input",
                        "No input provided. Please try again.",
                    );
                }
                InputCommand::Transform(text) => {
                    tokio::select! {
                        _ = Self::transform_and_show(state, &text) => {}
                        _ = &mut interrupt => {
                            tracing::debug!("interrupted during transformation");
                            return Ok(LoopExit::Interrupted);
                        }
                    }
                    println!(
                        "\n{}",
                        style("Press Enter for another transformation or type 'exit' to quit.")
                            .dim()
                            .italic()
                    );
                }
            }
        }
    }

    pub async fn run_once(state: &AppState, text: &str) -> Result<(), AppError> {
        match parse_input(text) {
            InputCommand::Transform(text) => {
                Self::transform_and_show(state, &text).await;
                Ok(())
            }
            _ => Err(AppError::Generic(
                "nothing to transform; pass the text as arguments".to_string(),
            )),
        }
    }

    async fn transform_and_show(state: &AppState, text: &str) {
        let debug = state.debug();

        let spinner = (!state.transformer.is_offline() && state.transformer.cache().get(text).is_none())
            .then(PresentationService::thinking_spinner);
        let resolution = state.transformer.resolve(text).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        PresentationService::show_resolution(text, &resolution, debug);

        if state.copy_to_clipboard() {
            let copied = ClipboardService::copy_text(&resolution.text);
            if let Err(e) = &copied {
                tracing::warn!("clipboard copy failed: {}", e);
            }
            PresentationService::show_clipboard_status(&copied, debug);
        }
    }
}
