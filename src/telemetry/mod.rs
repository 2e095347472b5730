//! Telemetry module
//!
//! Structured logging with `tracing`. The CLI initialises a subscriber from
//! its config; a C harness opts in by exporting `DUMMY_AI_LOG`, which is
//! picked up on the first `ai_create`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{DummyConfig, TelemetryConfig};
use crate::error::{DummyError, DummyResult};

static ENV_INIT: OnceCell<()> = OnceCell::new();

/// Initialize the telemetry subsystem
pub fn init_telemetry(config: &TelemetryConfig) -> DummyResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| DummyError::Config(format!("Invalid log filter: {}", e)))?;

    let subscriber = tracing_subscriber::registry().with(env_filter);

    // try_init: the host process may already own the global subscriber
    let installed = if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .with_target(true);

        subscriber.with(json_layer).try_init()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact();

        subscriber.with(fmt_layer).try_init()
    };

    if installed.is_ok() {
        tracing::info!(
            service = %config.service_name,
            version = %env!("CARGO_PKG_VERSION"),
            "Telemetry initialized"
        );
    }

    Ok(())
}

/// Install a subscriber from `DUMMY_AI_LOG`, at most once per process
pub fn init_from_env() {
    ENV_INIT.get_or_init(|| {
        let Some(level) = std::env::var_os(crate::config::ENV_LOG) else {
            return;
        };
        let mut config = DummyConfig::default();
        if config
            .apply_env(|key| (key == crate::config::ENV_LOG).then(|| level.to_string_lossy().into_owned()))
            .is_ok()
        {
            let _ = init_telemetry(&config.telemetry);
        }
    });
}
