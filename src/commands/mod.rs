mod browse;
mod config;
mod search;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use search::{cmd_search, run_search};

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::error::Result;
use crate::search::{Notice, NoticeLevel};

/// Print a JSON value to stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output of a command in both of its forms
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as JSON when requested, otherwise as text (falling back to JSON)
    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

/// Print a notice to stderr, coloured by level
pub fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Warning => eprintln!("{}", notice.message.yellow()),
        NoticeLevel::Error => eprintln!("{}", notice.message.red()),
    }
}
