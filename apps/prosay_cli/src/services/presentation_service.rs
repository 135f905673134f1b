use console::{measure_text_width, style, Color};
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};
use std::time::Duration;

use crate::core::error::SystemError;
use crate::services::text_transformation_service::{Resolution, SourceKind};

const PANEL_PADDING: usize = 2;

/// Terminal output for the interactive loop and one-shot mode.
pub struct PresentationService;

impl PresentationService {
    pub fn show_header() {
        let title = format!(
            "{}{}{}",
            style("How To ").cyan().bold(),
            style("Professionally ").cyan().bright().bold(),
            style("Say").white().bright().bold()
        );
        for line in render_panel(None, &title) {
            println!("{}", style(line).blue().bright());
        }
        println!(
            "{}",
            style("Transform your blunt thoughts into corporate-approved language")
                .italic()
                .dim()
        );
    }

    pub fn thinking_spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner().with_finish(ProgressFinish::AndClear);
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner:.yellow} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Generating professional response...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    pub fn show_resolution(original: &str, resolution: &Resolution, debug: bool) {
        if debug {
            for failure in &resolution.failures {
                Self::show_panel(
                    &format!("Error with {}", failure.model),
                    &failure.reason,
                    Color::Red,
                );
            }
        }

        if let Some(note) = source_note(resolution.source, debug) {
            println!("\n{}", style(note).yellow());
        }

        println!();
        Self::show_panel("Original Text", original, Color::Yellow);
        println!();
        Self::show_panel("Professional Version", &resolution.text, Color::Green);
    }

    pub fn show_clipboard_status(result: &Result<(), SystemError>, debug: bool) {
        match result {
            Ok(()) => println!("\n{}", style("✓ Copied to clipboard").green().dim().italic()),
            Err(e) => {
                println!("\n{}", style("✗ Failed to copy to clipboard").red().dim().italic());
                if debug {
                    println!("{}", style(e).red().dim());
                }
            }
        }
    }

    pub fn show_notice(title: &str, message: &str) {
        Self::show_panel(title, message, Color::Yellow);
    }

    pub fn show_error(title: &str, message: &str) {
        Self::show_panel(title, message, Color::Red);
    }

    fn show_panel(title: &str, body: &str, color: Color) {
        for line in render_panel(Some(title), body) {
            println!("{}", style(line).fg(color));
        }
    }
}

/// Line shown above the result boxes. Cache hits are only called out in
/// debug mode.
pub fn source_note(source: SourceKind, debug: bool) -> Option<&'static str> {
    match source {
        SourceKind::Fallback => Some("Using smart fallback transformation:"),
        SourceKind::Cache if debug => Some("Using cached response..."),
        _ => None,
    }
}

/// Draws `body` inside a rounded box, with `title` set into the top border.
pub fn render_panel(title: Option<&str>, body: &str) -> Vec<String> {
    let body_lines: Vec<&str> = if body.is_empty() {
        vec![""]
    } else {
        body.lines().collect()
    };
    let title_width = title.map(|t| measure_text_width(t) + 3).unwrap_or(0);
    let content_width = body_lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0)
        .max(title_width);
    let inner = content_width + PANEL_PADDING * 2;

    let top = match title {
        Some(title) => {
            let used = measure_text_width(title) + 3;
            format!("╭─ {} {}╮", title, "─".repeat(inner - used))
        }
        None => format!("╭{}╮", "─".repeat(inner)),
    };
    let blank = format!("│{}│", " ".repeat(inner));

    let mut lines = vec![top, blank.clone()];
    for line in body_lines {
        let fill = content_width - measure_text_width(line);
        lines.push(format!(
            "│{pad}{line}{fill}{pad}│",
            pad = " ".repeat(PANEL_PADDING),
            fill = " ".repeat(fill)
        ));
    }
    lines.push(blank);
    lines.push(format!("╰{}╯", "─".repeat(inner)));
    lines
}
