use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::substitutions::navbar_substitutions;
use super::target::TargetFile;
use crate::error::PatchResult;
use crate::error_handling::with_output_context;

/// Target path, relative to the workspace the patcher runs in
pub const DEFAULT_TARGET: &str = "src/components/layout/Navbar.tsx";

pub const LENGTH_LABEL: &str = "Original file length:";
pub const DONE_MESSAGE: &str = "Fixed both useEffect infinite loops";

/// Outcome of a single patch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub char_len: usize,
    pub byte_len: usize,
    pub substitutions_defined: usize,
    /// Whether the written content differs from what was read. Always false.
    pub changed: bool,
}

/// Loads the Navbar source, reports its length and writes it back
pub struct Patcher {
    target: PathBuf,
}

impl Patcher {
    /// Resolve the fixed target path against `workspace`
    pub fn new(workspace: impl AsRef<Path>) -> Self {
        Self {
            target: workspace.as_ref().join(DEFAULT_TARGET),
        }
    }

    /// Patcher for the fixed relative path, resolved against the process cwd
    pub fn in_current_dir() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Run load, define, persist in order, writing the two report lines to `out`
    ///
    /// A read fault returns before anything is written to `out`. A write fault
    /// returns after the length line has been flushed and before the
    /// completion line.
    pub fn run<W: Write>(&self, out: &mut W) -> PatchResult<PatchReport> {
        let target = TargetFile::load(&self.target)?;

        with_output_context(|| {
            writeln!(out, "{} {}", LENGTH_LABEL, target.char_len())?;
            out.flush()
        })?;

        let substitutions = navbar_substitutions();
        let applied = substitutions.iter().filter(|s| s.is_applied()).count();
        debug!(
            "{} substitutions defined, {} applied",
            substitutions.len(),
            applied
        );

        target.persist()?;

        with_output_context(|| {
            writeln!(out, "{}", DONE_MESSAGE)?;
            out.flush()
        })?;

        info!("Rewrote {}", target.path().display());

        Ok(PatchReport {
            path: target.path().to_path_buf(),
            char_len: target.char_len(),
            byte_len: target.byte_len(),
            substitutions_defined: substitutions.len(),
            changed: applied > 0,
        })
    }
}

impl Default for Patcher {
    fn default() -> Self {
        Self::in_current_dir()
    }
}
