use std::path::Path;

use crate::color::ColorScheme;
use crate::template::Diagnostic;

/// Output manager that respects quiet mode.
///
/// Messages go to stderr so they never mix with a template written to stdout.
#[derive(Debug, Clone)]
pub(crate) struct Output {
    quiet: bool,
}

impl Output {
    /// Create a new Output instance.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a success message (suppressed in quiet mode).
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", ColorScheme::success_label(message));
        }
    }

    /// Print a file written by generation.
    pub fn wrote(&self, schema: &Path, target: &Path) {
        if !self.quiet {
            eprintln!(
                "{} {} → {}",
                ColorScheme::success_label("Generated:"),
                ColorScheme::path(&schema.display().to_string()),
                ColorScheme::path(&target.display().to_string())
            );
        }
    }

    /// Print a schema problem.
    ///
    /// Warnings are shown even in quiet mode.
    pub fn diagnostic(&self, schema: &Path, diagnostic: &Diagnostic) {
        eprintln!(
            "{} {}: {diagnostic}",
            ColorScheme::warning("Warning:"),
            schema.display()
        );
    }

    /// Print a per-file summary for `check`.
    pub fn checked(&self, schema: &Path, problems: usize) {
        if problems == 0 {
            if !self.quiet {
                eprintln!(
                    "{} {}",
                    ColorScheme::success_label("OK:"),
                    schema.display()
                );
            }
        } else {
            eprintln!(
                "{} {} {}",
                ColorScheme::error("FAIL:"),
                schema.display(),
                ColorScheme::dimmed(&format!("({problems} problem(s))"))
            );
        }
    }
}
