//! File boundary: load the source Line Sequence and persist the output.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::lines::{join_lines, normalize_newlines, split_lines};

/// Read a source file into a Line Sequence.
///
/// `\r\n` terminators are normalized to `\n`.
pub fn read_source(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::MissingSource {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&normalize_newlines(&text));
    debug!(path = %path.display(), lines = lines.len(), "read source");
    Ok(lines)
}

/// Write a Line Sequence to `path` in a single atomic replace.
///
/// The output is staged in a temporary file next to `path` and renamed over
/// it, so the destination is either fully written or left as it was.
pub fn write_output<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged
        .write_all(join_lines(lines).as_bytes())
        .map_err(write_err)?;
    staged.flush().map_err(write_err)?;

    // Temp files are created 0600; give the output ordinary file permissions
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    staged.persist(path).map_err(|e| write_err(e.error))?;
    debug!(path = %path.display(), lines = lines.len(), "wrote output");
    Ok(())
}
