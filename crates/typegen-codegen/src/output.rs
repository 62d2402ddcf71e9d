//! Atomic replacement of the declaration file.
//!
//! The document is written to a temporary sibling first, synced, and then
//! renamed over the target. Readers see either the previous file or the
//! new one, never a partial write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use typegen_core::{Error, Result};

/// Writes `content` to `path` atomically, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] naming the path that could not be created,
/// written or renamed. The temporary file is removed on failure and any
/// previous file at `path` is left untouched.
///
/// # Examples
///
/// ```
/// use typegen_codegen::output::write_atomic;
///
/// let dir = tempfile::TempDir::new().unwrap();
/// let path = dir.path().join("declaration").join("api.d.ts");
///
/// write_atomic(&path, "declare namespace A {}\n").unwrap();
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "declare namespace A {}\n");
/// ```
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let temp_path = temp_path_for(path);

    if let Err(e) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error(path, e));
    }

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn write_and_sync(temp_path: &Path, content: &str) -> Result<()> {
    let mut file = fs::File::create(temp_path).map_err(|e| io_error(temp_path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| io_error(temp_path, e))?;
    file.sync_all().map_err(|e| io_error(temp_path, e))
}

/// `dir/name.d.ts` becomes `dir/.name.d.ts.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map_or_else(|| "output".into(), |n| n.to_string_lossy());
    path.with_file_name(format!(".{file_name}.tmp"))
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("declaration/openspace-api-js.d.ts"));
        assert_eq!(temp, Path::new("declaration/.openspace-api-js.d.ts.tmp"));
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api.d.ts");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("api.d.ts");

        write_atomic(&path, "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_failed_rename_cleans_up() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let path = dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "keep").unwrap();

        let err = write_atomic(&path, "content").unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(path.is_dir());
        assert_eq!(fs::read_to_string(path.join("keep.txt")).unwrap(), "keep");
        assert!(!temp_path_for(&path).exists());
    }
}
