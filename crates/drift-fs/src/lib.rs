//! Filesystem primitives for config drift reconciliation
//!
//! Provides slash-normalized paths, whole-file reads, and atomic
//! rewrites that leave config files with a fixed permission mode.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::CONFIG_FILE_MODE;
pub use path::NormalizedPath;
