//! Config file formats and their codecs

use serde::Serialize;

use drift_fs::NormalizedPath;

use crate::error::{Error, Result};
use crate::tree::{self, ConfigTree, ConfigValue};

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &NormalizedPath) -> Option<Self> {
        path.extension().and_then(Self::from_extension)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Decode raw file bytes into a config tree.
    ///
    /// The top-level document must be a table. An empty YAML document
    /// decodes to an empty tree, like an empty TOML file does.
    pub fn decode(&self, bytes: &[u8]) -> Result<ConfigTree> {
        match self {
            Self::Toml => {
                let text = std::str::from_utf8(bytes).map_err(|e| Error::decode(*self, e.to_string()))?;
                let table: toml::Table =
                    toml::from_str(text).map_err(|e| Error::decode(*self, e.to_string()))?;
                Ok(tree::from_toml_table(table))
            }
            Self::Json => {
                let value: serde_json::Value =
                    serde_json::from_slice(bytes).map_err(|e| Error::decode(*self, e.to_string()))?;
                self.expect_table(ConfigValue::from(value))
            }
            Self::Yaml => {
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(ConfigTree::new());
                }
                let value: serde_yaml::Value =
                    serde_yaml::from_slice(bytes).map_err(|e| Error::decode(*self, e.to_string()))?;
                if value.is_null() {
                    return Ok(ConfigTree::new());
                }
                self.expect_table(ConfigValue::from(value))
            }
        }
    }

    /// Encode a value into this format's bytes.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        match self {
            Self::Toml => toml::to_string_pretty(value)
                .map(String::into_bytes)
                .map_err(|e| Error::encode(*self, e.to_string())),
            Self::Json => serde_json::to_vec_pretty(value)
                .map(|mut bytes| {
                    bytes.push(b'\n');
                    bytes
                })
                .map_err(|e| Error::encode(*self, e.to_string())),
            Self::Yaml => serde_yaml::to_string(value)
                .map(String::into_bytes)
                .map_err(|e| Error::encode(*self, e.to_string())),
        }
    }

    fn expect_table(&self, value: ConfigValue) -> Result<ConfigTree> {
        match value {
            ConfigValue::Table(table) => Ok(table),
            other => Err(Error::decode(
                *self,
                format!("top-level value is a {}, expected a table", other.kind()),
            )),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
