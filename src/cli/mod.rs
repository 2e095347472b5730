//! CLI module for rjsjai-dummy
//!
//! A reference client speaking the same command line as the homework
//! program the mock was written for:
//!
//! ```text
//! rjsjai-dummy (--chat|--draw|--math) <PROMPT> [-o|--output <FILE>]
//! ```

mod commands;

pub use commands::*;

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::types::RequestType;
use crate::VERSION;

/// Default destination for draw/math results when `--output` is omitted
pub const DEFAULT_BINARY_OUTPUT: &str = "output.bmp";

/// rjsjai-dummy: offline mock of the RJSJ AI service
#[derive(Parser, Debug)]
#[command(name = "rjsjai-dummy")]
#[command(version = VERSION)]
#[command(about = "Send one request to the mock RJSJ AI service")]
#[command(group(
    ArgGroup::new("kind")
        .required(true)
        .multiple(false)
        .args(["chat", "draw", "math"])
))]
pub struct Cli {
    /// Chat request
    #[arg(long, value_name = "PROMPT")]
    pub chat: Option<String>,

    /// Draw request (binary result)
    #[arg(long, value_name = "PROMPT")]
    pub draw: Option<String>,

    /// Wolfram request (binary result)
    #[arg(long, value_name = "PROMPT")]
    pub math: Option<String>,

    /// Write the result to a file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Token passed to ai_create
    #[arg(long, env = "DUMMY_AI_TOKEN", default_value = "dummy-token")]
    pub token: String,

    /// Simulate the unknown HTTP error (same as exporting DUMMY_AI_EXPECT_ERROR)
    #[arg(long)]
    pub expect_error: bool,

    /// Embed the prompt without escaping
    #[arg(long)]
    pub raw_prompt: bool,

    /// Configuration file path (YAML, TOML, or JSON)
    #[arg(short, long, env = "DUMMY_AI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides config and DUMMY_AI_LOG
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable JSON log output
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// The selected request kind and its prompt
    pub fn request(&self) -> Option<(RequestType, &str)> {
        [
            (RequestType::Chat, &self.chat),
            (RequestType::Draw, &self.draw),
            (RequestType::Wolfram, &self.math),
        ]
        .into_iter()
        .find_map(|(kind, prompt)| prompt.as_deref().map(|p| (kind, p)))
    }

    /// Where the result should be written, `None` meaning stdout
    pub fn output_path(&self, kind: RequestType) -> Option<PathBuf> {
        match (&self.output, kind.is_binary()) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(DEFAULT_BINARY_OUTPUT)),
            (None, false) => None,
        }
    }
}
