//! Scope state for a build in progress.
//! A `Context` is a plain value snapshot of "where am I in the output tree";
//! scope operations swap fields in and restore the previous value on exit.

use indexmap::IndexMap;

/// Snapshot of the current scope.
///
/// The open file handle and the installed content handler live beside this
/// in the [`Builder`](crate::builder::Builder), since exactly one file may
/// be open at a time.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Current namespace, set by a namespace scope. Never empty once set.
    pub namespace: Option<String>,
    /// Current file category (e.g. "functions", "tags").
    pub category: Option<String>,
    /// Accumulated subdirectory segments, oldest first. This is literally
    /// the path suffix between the category and the file name.
    pub subdir_stack: Vec<String>,
    /// Name of the currently open file, including extension.
    pub file_name: Option<String>,
}

impl Context {
    /// Returns the stem of the currently open file (name minus extension).
    pub fn file_stem(&self) -> Option<&str> {
        self.file_name.as_deref().map(|name| match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        })
    }
}

/// File open mode for file scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Truncate and write from the start
    Write,
    /// Append to existing content, creating the file if absent
    Append,
}

/// Monotonic counters keyed by purpose, used to produce collision-free
/// generated identifiers. One instance lives for the whole build invocation
/// and is never reset mid-build.
#[derive(Debug, Default)]
pub struct Counters {
    counts: IndexMap<String, u64>,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value for `key` and advances it by one.
    pub fn next(&mut self, key: &str) -> u64 {
        let count = self.counts.entry(key.to_string()).or_insert(0);
        let value = *count;
        *count += 1;
        value
    }
}
