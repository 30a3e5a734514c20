//! Structural diff between an existing config tree and its canonical form

use serde::Serialize;

use crate::tree::{ConfigTree, ConfigValue, push_segment};

/// Key paths that differ between two config trees.
///
/// Each sequence is sorted, and a path appears in at most one of them.
/// A path that is a table on both sides is never itself `modified`;
/// only its differing descendants are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    /// Present in the canonical tree, absent from the existing one
    pub added: Vec<String>,
    /// Present in the existing tree, absent from the canonical one
    pub removed: Vec<String>,
    /// Present in both with unequal values
    pub modified: Vec<String>,
}

impl DiffResult {
    /// True when the trees have no structural drift.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Total number of differing paths.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    fn sort(&mut self) {
        self.added.sort();
        self.removed.sort();
        self.modified.sort();
    }
}

/// Compare `existing` against `canonical`.
///
/// Tables present on both sides are compared key by key, at any depth.
/// Everything else (scalars, lists, and table-vs-scalar mismatches) is
/// compared as a whole value. A table missing from one side is reported
/// once at its root. Keys containing `.` appear as quoted path segments.
pub fn diff(existing: &ConfigTree, canonical: &ConfigTree) -> DiffResult {
    let mut result = DiffResult::default();
    // Worklist of table pairs still to compare; nesting depth is unbounded
    let mut pending = vec![(existing, canonical, String::new())];

    while let Some((existing, canonical, prefix)) = pending.pop() {
        diff_tables(existing, canonical, &prefix, &mut result, &mut pending);
    }

    result.sort();
    result
}

fn diff_tables<'a>(
    existing: &'a ConfigTree,
    canonical: &'a ConfigTree,
    prefix: &str,
    result: &mut DiffResult,
    pending: &mut Vec<(&'a ConfigTree, &'a ConfigTree, String)>,
) {
    for (key, canonical_value) in canonical {
        let path = child_path(prefix, key);

        match (existing.get(key), canonical_value) {
            (None, _) => result.added.push(path),
            (Some(ConfigValue::Table(old)), ConfigValue::Table(new)) => pending.push((old, new, path)),
            (Some(old), new) if old != new => {
                tracing::trace!(path = %path, old = old.kind(), new = new.kind(), "value differs");
                result.modified.push(path);
            }
            _ => {}
        }
    }

    for key in existing.keys() {
        if !canonical.contains_key(key) {
            result.removed.push(child_path(prefix, key));
        }
    }
}

fn child_path(prefix: &str, key: &str) -> String {
    let mut path = prefix.to_string();
    push_segment(&mut path, key);
    path
}
