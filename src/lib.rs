// navfix - rewrites the Navbar component source in place
// Reports the file length on stdout and keeps diagnostics on stderr

pub mod error;
pub mod error_handling;
pub mod file;

pub use error::{PatchError, PatchResult};
pub use file::patcher::{PatchReport, Patcher, DEFAULT_TARGET};

use anyhow::{anyhow, Result};
use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize the tracing subscriber
///
/// Logs always go to stderr so stdout only ever carries the two report lines.
/// The filter comes from `RUST_LOG` and falls back to `warn`.
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(ansi_colors)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;

    debug!("Initializing navfix v{}", version());

    Ok(())
}
