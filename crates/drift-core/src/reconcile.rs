//! Reconciliation driver
//!
//! Loads a config file and its canonical default, reports structural drift,
//! and rewrites the file when the decision policy says so.
//!
//! An applied update replaces the whole file with the canonical rendering.
//! Values the user customized are not carried over, even though the report
//! only lists structural differences.

use std::io::{Stdout, StdinLock, Write};
use std::path::Path;

use serde::Serialize;

use drift_fs::{NormalizedPath, io};

use crate::decision::{Confirm, LineConfirm, should_apply};
use crate::diff::{DiffResult, diff};
use crate::error::{Error, Result};
use crate::format::Format;
use crate::loader::LoadedConfig;
use crate::report;

/// Directory under the settings root holding the config files
pub const CONFIG_DIR: &str = "config";

type RenderFn = dyn Fn(Format) -> Result<Vec<u8>>;

/// A known config file paired with the factory for its canonical default.
pub struct ConfigEntry {
    file_name: String,
    render: Box<RenderFn>,
}

impl ConfigEntry {
    /// Register `file_name` with a factory producing its current default.
    ///
    /// The factory runs each time the entry is reconciled.
    pub fn new<T, F>(file_name: impl Into<String>, factory: F) -> Self
    where
        T: Serialize,
        F: Fn() -> T + 'static,
    {
        Self {
            file_name: file_name.into(),
            render: Box::new(move |format: Format| format.encode(&factory())),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Render the canonical default in `format`.
    pub fn render(&self, format: Format) -> Result<Vec<u8>> {
        (self.render)(format)
    }
}

impl std::fmt::Debug for ConfigEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigEntry")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// Result of reconciling one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileOutcome {
    pub file_name: String,
    pub diff: DiffResult,
    /// Any added, removed or modified key was found
    pub drift: bool,
    /// The file was replaced with the canonical content
    pub rewritten: bool,
}

impl ReconcileOutcome {
    fn in_sync(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            diff: DiffResult::default(),
            drift: false,
            rewritten: false,
        }
    }
}

/// Drives reconciliation, writing the report to `out` and asking `confirm`
/// whenever an update is not forced.
#[derive(Debug)]
pub struct Reconciler<C, W> {
    confirm: C,
    out: W,
}

impl Reconciler<LineConfirm<StdinLock<'static>, Stdout>, Stdout> {
    /// Report on stdout and prompt on stdin.
    pub fn stdio() -> Self {
        Self::new(LineConfirm::stdio(), std::io::stdout())
    }
}

impl<C: Confirm, W: Write> Reconciler<C, W> {
    pub fn new(confirm: C, out: W) -> Self {
        Self { confirm, out }
    }

    pub fn into_parts(self) -> (C, W) {
        (self.confirm, self.out)
    }

    /// Reconcile `<dir>/<file_name>` against `default`.
    ///
    /// The format is chosen from the file extension. No output is produced
    /// when the file has no drift. Declining the update is not an error.
    pub fn reconcile<T: Serialize + ?Sized>(
        &mut self,
        dir: &NormalizedPath,
        file_name: &str,
        default: &T,
        auto_apply: bool,
    ) -> Result<ReconcileOutcome> {
        self.reconcile_with(dir, file_name, auto_apply, |format| format.encode(default))
    }

    /// Reconcile a registered entry under `dir`.
    pub fn reconcile_entry(
        &mut self,
        dir: &NormalizedPath,
        entry: &ConfigEntry,
        auto_apply: bool,
    ) -> Result<ReconcileOutcome> {
        self.reconcile_with(dir, entry.file_name(), auto_apply, |format| entry.render(format))
    }

    /// Reconcile every entry under `<settings_dir>/config`, in order.
    ///
    /// Stops at the first file that fails; later files are not touched.
    pub fn check_config_files(
        &mut self,
        settings_dir: &NormalizedPath,
        entries: &[ConfigEntry],
        auto_apply: bool,
    ) -> Result<Vec<ReconcileOutcome>> {
        let config_dir = settings_dir.join(CONFIG_DIR);
        entries
            .iter()
            .map(|entry| self.reconcile_entry(&config_dir, entry, auto_apply))
            .collect()
    }

    fn reconcile_with<F>(
        &mut self,
        dir: &NormalizedPath,
        file_name: &str,
        auto_apply: bool,
        render: F,
    ) -> Result<ReconcileOutcome>
    where
        F: FnOnce(Format) -> Result<Vec<u8>>,
    {
        let path = dir.join(file_name);
        let format = Format::from_path(&path).ok_or_else(|| Error::UnsupportedFormat {
            file: file_name.to_string(),
        })?;

        let loaded = LoadedConfig::load_with(&path, file_name, format, render)?;
        let diff = diff(&loaded.existing, &loaded.canonical);

        if diff.is_empty() {
            tracing::debug!(file = file_name, "no structural drift");
            return Ok(ReconcileOutcome::in_sync(file_name));
        }

        tracing::debug!(
            file = file_name,
            added = diff.added.len(),
            removed = diff.removed.len(),
            modified = diff.modified.len(),
            "structural drift found"
        );
        report::write_report(&mut self.out, file_name, &diff)?;
        self.out.flush()?;

        let question = format!("Do you want to update {} with the new structure?", file_name);
        let rewritten = should_apply(&mut self.confirm, &question, auto_apply);

        if rewritten {
            io::write_atomic(&path, &loaded.canonical_bytes).map_err(|source| Error::Write {
                file: file_name.to_string(),
                source,
            })?;
            tracing::info!(path = %path, "config file replaced with canonical content");
            report::write_applied(&mut self.out, file_name)?;
        } else {
            report::write_declined(&mut self.out, file_name)?;
        }
        self.out.flush()?;

        Ok(ReconcileOutcome {
            file_name: file_name.to_string(),
            diff,
            drift: true,
            rewritten,
        })
    }
}

/// Interactively reconcile each entry under `<settings_dir>/config`,
/// reporting on stdout and prompting on stdin.
pub fn check_config_files(settings_dir: impl AsRef<Path>, entries: &[ConfigEntry]) -> Result<Vec<ReconcileOutcome>> {
    Reconciler::stdio().check_config_files(&NormalizedPath::new(settings_dir), entries, false)
}

/// Reconcile `<dir>/<file_name>` against `default` on stdout/stdin.
pub fn check_and_update_file<T: Serialize + ?Sized>(
    dir: impl AsRef<Path>,
    file_name: &str,
    default: &T,
    auto_apply: bool,
) -> Result<ReconcileOutcome> {
    Reconciler::stdio().reconcile(&NormalizedPath::new(dir), file_name, default, auto_apply)
}
