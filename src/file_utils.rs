//! Thin file read/write wrappers.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FileError;

/// Read a whole file as UTF-8.
pub fn read_file(path: &Path) -> Result<String, FileError> {
    std::fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of `path` with `content`.
///
/// Writes to a temp file in the same directory and renames it over the
/// target, so readers never observe a half-written file.
pub fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    let write_err = |source: std::io::Error| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;

    // Temp files are created 0600; keep the target's mode.
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Print a file's contents to stdout.
pub fn print_file(path: &Path) -> Result<(), FileError> {
    let content = read_file(path)?;
    print!("{}", content);
    Ok(())
}
