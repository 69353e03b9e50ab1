//! Output path derivation.
//! Maps the current scope (namespace, category, subdirectory stack) onto the
//! fixed `data/<namespace>/<category>/<subdir...>/<file>` layout and onto the
//! colon-separated resource identifier used for cross-file references.

use std::path::{Path, PathBuf};

use crate::constants::DATA_DIR;
use crate::error::{Error, Result};

/// Resolves the filesystem path for the current scope.
///
/// # Arguments
/// * `root_dir` - Base directory of the output tree
/// * `namespace` - Current namespace, if set
/// * `category` - Current file category (e.g. "functions", "tags"), if set
/// * `subdir_stack` - Accumulated subdirectory segments, oldest first
/// * `file_name` - File name to append, or None for the directory path
///
/// # Returns
/// * `Result<PathBuf>` - `root/data/<namespace>/<category>/<subdir...>[/<file>]`
///
/// # Errors
/// * `Error::ConfigError` if namespace or category is unset
pub fn resolve(
    root_dir: &Path,
    namespace: Option<&str>,
    category: Option<&str>,
    subdir_stack: &[String],
    file_name: Option<&str>,
) -> Result<PathBuf> {
    let category = category.ok_or_else(|| {
        Error::ConfigError(
            "File category not set! (e.g. pack/data/namespace/<category>/etc)".to_string(),
        )
    })?;
    let namespace = namespace.ok_or_else(|| {
        Error::ConfigError(
            "Namespace not set! (e.g. pack/data/<namespace>/functions/etc)".to_string(),
        )
    })?;

    let mut path = root_dir.join(DATA_DIR).join(namespace).join(category);
    for segment in subdir_stack {
        path.push(segment);
    }
    if let Some(file_name) = file_name {
        path.push(file_name);
    }
    Ok(path)
}

/// Builds the resource identifier for a file stem in the current scope.
///
/// Produces `<namespace>:<subdir1>/.../<stem>`. No escaping is performed;
/// callers are responsible for path-safe names.
pub fn to_resource_id(namespace: &str, subdir_stack: &[String], stem: &str) -> String {
    let mut segments: Vec<&str> = subdir_stack.iter().map(String::as_str).collect();
    segments.push(stem);
    format!("{}:{}", namespace, segments.join("/"))
}
