use crate::error::{PatchError, PatchResult};
use std::path::Path;

/// Which side of the read/write sequence a filesystem call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsStage {
    Read,
    Write,
}

/// Safely executes filesystem operations with appropriate error handling
pub fn fs_operation<T, F>(operation: F, path: impl AsRef<Path>, stage: FsStage) -> PatchResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        tracing::debug!(
            "{:?} failed on {}: {} (at {}:{})",
            stage,
            path_ref.display(),
            e,
            file!(),
            line!()
        );

        match stage {
            FsStage::Read => PatchError::read_error(e, path_ref),
            FsStage::Write => PatchError::write_error(e, path_ref),
        }
    })
}

/// Maps a failed write to the report sink
pub fn with_output_context<T>(operation: impl FnOnce() -> std::io::Result<T>) -> PatchResult<T> {
    operation().map_err(|e| {
        tracing::debug!("Writing report failed: {}", e);
        PatchError::output_error(e)
    })
}
