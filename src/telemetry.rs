use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AuditError;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once. Logs go to stderr so CLI output on
/// stdout stays machine-readable; `RUST_LOG` overrides the `info` default.
pub fn init() -> Result<(), AuditError> {
    if TRACING_INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| AuditError::Telemetry(err.to_string()))?;

    let _ = TRACING_INIT.set(());
    Ok(())
}
