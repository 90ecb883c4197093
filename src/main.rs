use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;

use navfix::Patcher;

/// Rewrite src/components/layout/Navbar.tsx in place and report its length
#[derive(Parser, Debug)]
#[command(name = "navfix", version, about)]
struct Args {
    /// Directory the Navbar path is resolved against (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    workspace: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    navfix::init_with_logger(false).context("Failed to initialize navfix")?;

    let patcher = match &args.workspace {
        Some(dir) => Patcher::new(dir),
        None => Patcher::in_current_dir(),
    };

    debug!("Target file: {}", patcher.target().display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = patcher.run(&mut out).map_err(|e| {
        debug!("Patch failed ({:?}) on {:?}", e.kind(), e.path());
        e
    })?;

    debug!(
        "Done: {} characters, {} bytes, changed: {}",
        report.char_len, report.byte_len, report.changed
    );

    Ok(())
}
