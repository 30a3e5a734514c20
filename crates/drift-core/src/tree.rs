//! Format-independent config tree
//!
//! Every supported format decodes into the same closed value type so the
//! differ can match exhaustively and compare like with like.

use std::collections::BTreeMap;

/// A table of config keys
pub type ConfigTree = BTreeMap<String, ConfigValue>;

/// A leaf value
#[derive(Debug, Clone)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Datetimes are kept in their rendered form
    Datetime(String),
    /// Only produced by JSON and YAML
    Null,
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            // NaN must compare equal to itself or diff(t, t) would report drift
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Datetime(a), Self::Datetime(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

/// A value stored under a config key
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Scalar(Scalar),
    List(Vec<ConfigValue>),
    Table(ConfigTree),
}

impl ConfigValue {
    pub fn as_table(&self) -> Option<&ConfigTree> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    /// Short name of the value's kind, for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::String(_)) => "string",
            Self::Scalar(Scalar::Integer(_)) => "integer",
            Self::Scalar(Scalar::Float(_)) => "float",
            Self::Scalar(Scalar::Boolean(_)) => "boolean",
            Self::Scalar(Scalar::Datetime(_)) => "datetime",
            Self::Scalar(Scalar::Null) => "null",
            Self::List(_) => "list",
            Self::Table(_) => "table",
        }
    }
}

/// Look up a key path such as `rpc.laddr`, as produced by [`push_segment`].
///
/// Returns `None` for a missing key or a malformed path.
pub fn lookup<'a>(tree: &'a ConfigTree, path: &str) -> Option<&'a ConfigValue> {
    let segments = split_path(path)?;
    let (first, rest) = segments.split_first()?;
    let mut current = tree.get(first.as_str())?;
    for segment in rest {
        current = current.as_table()?.get(segment.as_str())?;
    }
    Some(current)
}

/// Append `key` to the dotted key path `path`.
///
/// A key that is empty or contains `.` or `"` is written as a quoted
/// segment, TOML style, so distinct key sequences never share a path.
pub fn push_segment(path: &mut String, key: &str) {
    if !path.is_empty() {
        path.push('.');
    }
    if !key.is_empty() && !key.contains(['.', '"']) {
        path.push_str(key);
        return;
    }
    path.push('"');
    for c in key.chars() {
        if c == '"' || c == '\\' {
            path.push('\\');
        }
        path.push(c);
    }
    path.push('"');
}

/// Split a key path into its keys, undoing the quoting of [`push_segment`].
pub fn split_path(path: &str) -> Option<Vec<String>> {
    let mut segments = Vec::new();
    let mut chars = path.chars().peekable();

    loop {
        let mut segment = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            loop {
                match chars.next()? {
                    '"' => break,
                    '\\' => segment.push(chars.next()?),
                    c => segment.push(c),
                }
            }
        } else {
            while let Some(c) = chars.next_if(|c| *c != '.') {
                segment.push(c);
            }
            if segment.is_empty() {
                return None;
            }
        }
        segments.push(segment);

        match chars.next() {
            None => return Some(segments),
            Some('.') => {}
            Some(_) => return None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Integer(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Boolean(value))
    }
}

impl From<ConfigTree> for ConfigValue {
    fn from(value: ConfigTree) -> Self {
        Self::Table(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        Self::List(value)
    }
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::Scalar(Scalar::String(s)),
            toml::Value::Integer(i) => Self::Scalar(Scalar::Integer(i)),
            toml::Value::Float(f) => Self::Scalar(Scalar::Float(f)),
            toml::Value::Boolean(b) => Self::Scalar(Scalar::Boolean(b)),
            toml::Value::Datetime(dt) => Self::Scalar(Scalar::Datetime(dt.to_string())),
            toml::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(table) => Self::Table(from_toml_table(table)),
        }
    }
}

pub(crate) fn from_toml_table(table: toml::Table) -> ConfigTree {
    table
        .into_iter()
        .map(|(key, value)| (key, ConfigValue::from(value)))
        .collect()
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Boolean(b)),
            Value::Number(n) => Self::Scalar(json_number(&n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Table(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

fn json_number(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i)
    } else if let Some(f) = n.as_f64() {
        Scalar::Float(f)
    } else {
        Scalar::String(n.to_string())
    }
}

impl From<serde_yaml::Value> for ConfigValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Boolean(b)),
            Value::Number(n) => Self::Scalar(yaml_number(&n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Sequence(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Table(
                map.into_iter()
                    .map(|(key, value)| (yaml_key(key), Self::from(value)))
                    .collect(),
            ),
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i)
    } else if let Some(f) = n.as_f64() {
        Scalar::Float(f)
    } else {
        Scalar::String(n.to_string())
    }
}

/// YAML allows non-string mapping keys; flatten them to their text form.
fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
