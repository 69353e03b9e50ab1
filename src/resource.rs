//! References to files created during a build.
//! A resource identifier is the colon-separated form used inside emitted
//! content (e.g. `my_pack:api/greeting`).

use std::fmt;

use crate::builder::Builder;
use crate::error::Result;

/// A reference to a file created by a file scope, held as its resource
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    id: String,
}

impl Resource {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The resource identifier string, for interpolation into content.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A reference to a command function file, callable from whatever file
/// scope is currently open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResource {
    resource: Resource,
}

impl FunctionResource {
    pub fn new(id: impl Into<String>) -> Self {
        Self { resource: Resource::new(id) }
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Emits a single line invoking this function into the currently open
    /// file scope.
    pub fn call(&self, builder: &mut Builder) -> Result<()> {
        builder.write(format!("function {}", self.resource))
    }
}

impl fmt::Display for FunctionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.resource.fmt(f)
    }
}
