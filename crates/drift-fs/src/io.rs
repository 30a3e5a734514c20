//! Whole-file reads and atomic rewrites

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Permission mode applied to every rewritten config file (owner rw, group/other r).
pub const CONFIG_FILE_MODE: u32 = 0o644;

/// Read the full byte content of a file.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Replace the full content of a file atomically.
///
/// Holds an exclusive advisory lock on the target while a temp file in the
/// same directory is written, given [`CONFIG_FILE_MODE`], and renamed over
/// it. Fails with [`Error::LockFailed`] when another writer holds the lock.
/// The prior file mode is not preserved, and edits made by tools that do
/// not take the lock are not guarded against.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let target = open_for_lock(&native_path)?;
    target.try_lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let result = write_temp(&temp_path, content)
        .and_then(|()| set_config_mode(&temp_path))
        .and_then(|()| fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e)));

    if result.is_err() {
        // Best effort: the temp file is ours and useless once the rewrite failed.
        let _ = fs::remove_file(&temp_path);
    }

    // Also released on drop
    let _ = target.unlock();

    tracing::debug!(path = %path, bytes = content.len(), ok = result.is_ok(), "atomic write");
    result
}

/// Open the target only to hold its lock. A read handle is enough, so a
/// read-only target can still be replaced.
fn open_for_lock(path: &Path) -> Result<File> {
    match File::open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == ErrorKind::NotFound => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| Error::io(path, e)),
        Err(e) => Err(Error::io(path, e)),
    }
}

fn write_temp(temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))
}

#[cfg(unix)]
fn set_config_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(CONFIG_FILE_MODE))
        .map_err(|e| Error::io(path, e))
}

#[cfg(not(unix))]
fn set_config_mode(_path: &Path) -> Result<()> {
    Ok(())
}
