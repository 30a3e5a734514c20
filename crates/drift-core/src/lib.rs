//! Structural drift detection and reconciliation for config files
//!
//! Compares a config file on disk with the canonical rendering of its
//! current default, reports keys that were added, removed or modified, and
//! optionally replaces the file with the canonical content:
//!
//! - **tree**: format-independent `ConfigTree` / `ConfigValue` model
//! - **diff**: recursive structural differ producing a `DiffResult`
//! - **format** / **loader**: TOML, JSON and YAML codecs and the
//!   load-then-render pipeline
//! - **decision**: the `Confirm` capability and apply policy
//! - **reconcile**: the per-file driver and multi-file coordinator
//!
//! # Example
//!
//! ```no_run
//! use drift_core::{ConfigEntry, Decline, Reconciler};
//! use drift_fs::NormalizedPath;
//! use std::collections::BTreeMap;
//!
//! fn defaults() -> BTreeMap<&'static str, i64> {
//!     BTreeMap::from([("max_connections", 900)])
//! }
//!
//! let entries = vec![ConfigEntry::new("app.toml", defaults)];
//! let mut reconciler = Reconciler::new(Decline, std::io::stdout());
//! let outcomes = reconciler
//!     .check_config_files(&NormalizedPath::new("/srv/node"), &entries, false)
//!     .unwrap();
//! assert!(outcomes.iter().all(|o| !o.rewritten));
//! ```

pub mod decision;
pub mod diff;
pub mod error;
pub mod format;
pub mod loader;
pub mod reconcile;
pub mod report;
pub mod tree;

pub use decision::{Confirm, Decline, LineConfirm, is_affirmative, should_apply};
pub use diff::{DiffResult, diff};
pub use error::{Error, Result, Side};
pub use format::Format;
pub use loader::LoadedConfig;
pub use reconcile::{
    CONFIG_DIR, ConfigEntry, ReconcileOutcome, Reconciler, check_and_update_file, check_config_files,
};
pub use tree::{ConfigTree, ConfigValue, Scalar, lookup, push_segment, split_path};
