//! Loading the on-disk tree and rendering the canonical one

use serde::Serialize;

use drift_fs::{NormalizedPath, io};

use crate::error::{Error, Result, Side};
use crate::format::Format;
use crate::tree::ConfigTree;

/// Both sides of a comparison, decoded with the same codec.
///
/// The canonical side is rendered to bytes and decoded back rather than
/// compared as an object, so numeric formatting, key renames and table
/// layout match what the file format actually stores.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Decoded from the file's current bytes
    pub existing: ConfigTree,
    /// Exactly what an applied update writes to disk
    pub canonical_bytes: Vec<u8>,
    /// Decoded from `canonical_bytes`
    pub canonical: ConfigTree,
}

impl LoadedConfig {
    /// Load `path` and render `default` in `format`.
    pub fn load<T: Serialize + ?Sized>(
        path: &NormalizedPath,
        file_name: &str,
        format: Format,
        default: &T,
    ) -> Result<Self> {
        Self::load_with(path, file_name, format, |format| format.encode(default))
    }

    /// Load `path` and obtain the canonical bytes from `render`.
    ///
    /// The file is read and decoded before `render` runs, so an unreadable
    /// file is reported as such even if rendering would also fail.
    pub fn load_with<F>(path: &NormalizedPath, file_name: &str, format: Format, render: F) -> Result<Self>
    where
        F: FnOnce(Format) -> Result<Vec<u8>>,
    {
        let existing_bytes = io::read_bytes(path).map_err(|source| Error::Load {
            file: file_name.to_string(),
            source,
        })?;
        let existing = format
            .decode(&existing_bytes)
            .map_err(|e| e.for_file(file_name, Side::Existing))?;

        let canonical_bytes = render(format).map_err(|e| e.for_file(file_name, Side::Canonical))?;
        let canonical = format
            .decode(&canonical_bytes)
            .map_err(|e| e.for_file(file_name, Side::Canonical))?;

        tracing::debug!(
            file = file_name,
            %format,
            existing_keys = existing.len(),
            canonical_keys = canonical.len(),
            "loaded config pair"
        );

        Ok(Self {
            existing,
            canonical_bytes,
            canonical,
        })
    }
}
