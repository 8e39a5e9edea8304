use std::fmt;

use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

use crate::args::OutputFormat;

/// Output driver: `--format json` dumps the complete view model, plain mode
/// delegates to the Display view. Color is decided here, once, from the
/// output stream.
pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn render<V: Serialize>(&self, model: &V, view: &dyn fmt::Display) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(model)?),
            OutputFormat::Plain => print!("{}", view),
        }
        Ok(())
    }

    /// One-line confirmations (login, logout, delete) that have no view
    /// model worth dumping; JSON mode wraps them as `{"message": ...}`.
    pub fn message(&self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "message": message }))?
            ),
            OutputFormat::Plain => println!("{}", message),
        }
        Ok(())
    }
}
