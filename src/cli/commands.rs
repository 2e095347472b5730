//! CLI command implementation

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{DummyConfig, PromptEscaping};
use crate::engine::MockAi;
use crate::telemetry::init_telemetry;

use super::Cli;

/// Execute the CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    init_telemetry(&config.telemetry).context("Failed to initialize telemetry")?;
    run(&cli, &config)
}

/// Send the request described by `cli` and deliver its result
pub fn run(cli: &Cli, config: &DummyConfig) -> Result<()> {
    let Some((kind, prompt)) = cli.request() else {
        bail!("No request type given; use --chat, --draw or --math");
    };

    let mut ai = MockAi::new(cli.token.as_str());
    let status = ai.send(kind.as_raw(), prompt, config);

    if !status.is_success() {
        tracing::error!(%kind, status = status.as_raw(), "Request failed");
        bail!("{} request failed: {} (status {})", kind, status, status.as_raw());
    }

    match cli.output_path(kind) {
        Some(path) => write_output(&path, ai.result())?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(ai.result())?;
            writeln!(stdout)?;
        }
    }

    tracing::info!(%kind, bytes = ai.result_len(), "Request completed");
    Ok(())
}

/// Resolve configuration from the process environment
pub fn build_config(cli: &Cli) -> Result<DummyConfig> {
    build_config_with(cli, |key| {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    })
}

/// Resolve configuration: file (or defaults), then environment, then flags.
///
/// Flags only override when given on the command line.
pub fn build_config_with<F>(cli: &Cli, lookup: F) -> Result<DummyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config {
        Some(path) => DummyConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DummyConfig::default(),
    };

    config
        .apply_env(lookup)
        .context("Invalid environment configuration")?;

    if cli.expect_error {
        config.expect_error = true;
    }
    if cli.raw_prompt {
        config.prompt_escaping = PromptEscaping::Raw;
    }

    config.telemetry.enabled = true;
    if let Some(level) = &cli.log_level {
        config.telemetry.log_level = level.clone();
    }
    if cli.json_logs {
        config.telemetry.json_logs = true;
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Result written");
    Ok(())
}
