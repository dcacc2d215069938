//! Output formatting for CLI commands

use serde::Serialize;

use crate::domain::Shape;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A computed area alongside the shape it was computed for
#[derive(Debug, Serialize)]
struct AreaReport<'a> {
    shape: &'a Shape,
    area: f64,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a computed area.
    ///
    /// Text mode prints the bare number using `f64`'s `Display`, so whole
    /// values have no fractional part (`24`, not `24.0`).
    pub fn area(&self, shape: &Shape, area: f64) {
        match self.format {
            OutputFormat::Text => println!("{}", area),
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(&AreaReport { shape, area }) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
