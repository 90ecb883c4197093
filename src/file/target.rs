use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PatchResult;
use crate::error_handling::{fs_operation, FsStage};

/// A source file loaded fully into memory
///
/// Content is kept exactly as read. No newline translation happens on load
/// or on persist, so a round trip is byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
    content: String,
}

impl TargetFile {
    /// Read the whole file as UTF-8 text
    ///
    /// The handle is dropped before this returns.
    pub fn load(path: impl Into<PathBuf>) -> PatchResult<Self> {
        let path = path.into();

        let content = fs_operation(
            || {
                let mut file = File::open(&path)?;
                let mut content = String::new();
                file.read_to_string(&mut content)?;
                Ok(content)
            },
            &path,
            FsStage::Read,
        )?;

        debug!("Loaded {} ({} bytes)", path.display(), content.len());

        Ok(Self { path, content })
    }

    /// Write the loaded content back to the same path
    ///
    /// Truncates in place. There is no temp file and no backup, so an
    /// interrupted write can leave the file short.
    pub fn persist(&self) -> PatchResult<()> {
        fs_operation(
            || {
                let mut file = File::create(&self.path)?;
                file.write_all(self.content.as_bytes())?;
                file.flush()
            },
            &self.path,
            FsStage::Write,
        )?;

        debug!("Wrote {} ({} bytes)", self.path.display(), self.content.len());

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of characters in the content as text mode sees it
    ///
    /// A `\r\n` pair counts as a single line break. The stored bytes are not
    /// touched.
    pub fn char_len(&self) -> usize {
        self.content.chars().count() - self.content.matches("\r\n").count()
    }

    pub fn byte_len(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_counts_characters_not_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Navbar.tsx");
        fs::write(&path, "const é = '→';\n").unwrap();

        let target = TargetFile::load(&path).unwrap();
        assert_eq!(target.char_len(), 15);
        assert_eq!(target.byte_len(), 18);
        assert_eq!(target.path(), path.as_path());
    }

    #[test]
    fn test_persist_keeps_crlf_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Navbar.tsx");
        let original = b"line one\r\nline two\r\n";
        fs::write(&path, original).unwrap();

        let target = TargetFile::load(&path).unwrap();
        assert_eq!(target.char_len(), 18);
        target.persist().unwrap();

        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_lone_carriage_return_counts_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Navbar.tsx");
        fs::write(&path, "a\rb\r\nc\n").unwrap();

        let target = TargetFile::load(&path).unwrap();
        assert_eq!(target.char_len(), 6);
        assert_eq!(target.byte_len(), 7);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.tsx");

        match TargetFile::load(&path) {
            Err(PatchError::Read { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected read fault, got {:?}", other),
        }
    }

    #[test]
    fn test_load_directory_is_read_fault() {
        let dir = TempDir::new().unwrap();
        let result = TargetFile::load(dir.path());
        assert!(matches!(result, Err(PatchError::Read { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Navbar.tsx");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let err = TargetFile::load(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_persist_after_parent_removed() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("layout");
        fs::create_dir(&nested).unwrap();
        let path = nested.join("Navbar.tsx");
        fs::write(&path, "abc").unwrap();

        let target = TargetFile::load(&path).unwrap();
        fs::remove_dir_all(&nested).unwrap();

        let err = target.persist().unwrap_err();
        assert!(matches!(err, PatchError::Write { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }
}
