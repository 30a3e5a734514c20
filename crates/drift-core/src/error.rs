//! Error types for drift-core

use crate::format::Format;

/// Result type for drift-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a comparison a parse failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The file currently on disk
    Existing,
    /// The freshly rendered canonical default
    Canonical,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Existing => write!(f, "existing"),
            Self::Canonical => write!(f, "new"),
        }
    }
}

/// Errors that can occur while reconciling a config file.
///
/// Every per-file variant carries the file name; all of them are terminal
/// for that file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file on disk could not be read
    #[error("error reading {file}: {source}")]
    Load {
        file: String,
        #[source]
        source: drift_fs::Error,
    },

    /// Bytes could not be decoded as the file's format
    #[error("error parsing {side} {file}: {message}")]
    Parse {
        file: String,
        side: Side,
        format: Format,
        message: String,
    },

    /// The canonical default could not be encoded
    #[error("error generating new {file} content: {message}")]
    Render {
        file: String,
        format: Format,
        message: String,
    },

    /// The canonical content could not be written over the file
    #[error("error writing updated {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: drift_fs::Error,
    },

    #[error("unsupported config format for {file}")]
    UnsupportedFormat { file: String },

    /// Decoding failure not yet attributed to a file
    #[error("failed to decode {format} content: {message}")]
    Decode { format: Format, message: String },

    /// Encoding failure not yet attributed to a file
    #[error("failed to encode {format} content: {message}")]
    Encode { format: Format, message: String },

    /// Writing the report or prompt failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn decode(format: Format, message: impl Into<String>) -> Self {
        Self::Decode {
            format,
            message: message.into(),
        }
    }

    pub(crate) fn encode(format: Format, message: impl Into<String>) -> Self {
        Self::Encode {
            format,
            message: message.into(),
        }
    }

    /// Attach a file name to a codec failure.
    ///
    /// `Decode` becomes `Parse` for the given side and `Encode` becomes
    /// `Render`; anything else passes through untouched.
    pub fn for_file(self, file: &str, side: Side) -> Self {
        match self {
            Self::Decode { format, message } => Self::Parse {
                file: file.to_string(),
                side,
                format,
                message,
            },
            Self::Encode { format, message } => Self::Render {
                file: file.to_string(),
                format,
                message,
            },
            other => other,
        }
    }

    /// The file this error concerns, if it has been attributed to one.
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Load { file, .. }
            | Self::Parse { file, .. }
            | Self::Render { file, .. }
            | Self::Write { file, .. }
            | Self::UnsupportedFormat { file } => Some(file),
            Self::Decode { .. } | Self::Encode { .. } | Self::Io(_) => None,
        }
    }
}
