//! Defaults command: print the canonical rendering of a known file

use std::io::Write;

use drift_core::Format;
use drift_fs::NormalizedPath;

use crate::defaults::{builtin_entry, known_file_names};
use crate::error::{CliError, Result};

/// Write the current default content of `file_name` to `out`.
pub fn run_defaults<W: Write>(file_name: &str, out: &mut W) -> Result<()> {
    let entry = builtin_entry(file_name).ok_or_else(|| unknown_file(file_name))?;
    let format = Format::from_path(&NormalizedPath::new(file_name))
        .ok_or_else(|| CliError::user(format!("Cannot tell the format of '{}'", file_name)))?;

    let bytes = entry
        .render(format)
        .map_err(|e| e.for_file(file_name, drift_core::Side::Canonical))?;
    out.write_all(&bytes)?;
    Ok(())
}

pub(crate) fn unknown_file(file_name: &str) -> CliError {
    CliError::user(format!(
        "Unknown config file '{}'. Known files: {}",
        file_name,
        known_file_names().join(", ")
    ))
}
