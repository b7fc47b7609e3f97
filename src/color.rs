use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{AnsiColors, DynColors, Style};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Resolve whether to color output from the CLI choice and environment, and
/// apply it to every [`ColorScheme`] call. Returns the decision.
///
/// Priority: --color flag > NO_COLOR env > terminal detection
pub(crate) fn init(choice: clap::ColorChoice) -> bool {
    let enabled = match choice {
        clap::ColorChoice::Always => true,
        clap::ColorChoice::Never => false,
        clap::ColorChoice::Auto => {
            // Check NO_COLOR environment variable (https://no-color.org/)
            match std::env::var("NO_COLOR") {
                Ok(val) if !val.is_empty() => false,
                // Messages go to stderr, so that is the stream to check.
                _ => std::io::stderr().is_terminal(),
            }
        }
    };

    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
    enabled
}

/// Semantic colors for CLI messages.
pub(crate) struct ColorScheme;

impl ColorScheme {
    pub fn path(text: &str) -> String {
        apply_style(
            Style::new().color(DynColors::Ansi(AnsiColors::Cyan)),
            text,
        )
    }

    pub fn success_label(text: &str) -> String {
        apply_style(
            Style::new().color(DynColors::Ansi(AnsiColors::Green)),
            text,
        )
    }

    pub fn error(text: &str) -> String {
        apply_style(Style::new().color(DynColors::Ansi(AnsiColors::Red)), text)
    }

    pub fn warning(text: &str) -> String {
        apply_style(
            Style::new()
                .color(DynColors::Ansi(AnsiColors::Yellow))
                .bold(),
            text,
        )
    }

    pub fn dimmed(text: &str) -> String {
        apply_style(Style::new().dimmed(), text)
    }
}

fn apply_style(style: Style, text: &str) -> String {
    if COLOR_ENABLED.load(Ordering::Relaxed) {
        style.style(text).to_string()
    } else {
        text.to_string()
    }
}
