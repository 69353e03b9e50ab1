//! NBT literal containers and their SNBT rendering.
//! Most commands accept these through `Display`; construct the variant
//! matching the literal suffix you need (`1b`, `1s`, `1.5f`, ...).

use std::fmt;

use indexmap::IndexMap;

/// An NBT value, rendered in SNBT form.
#[derive(Debug, Clone, PartialEq)]
pub enum Nbt {
    /// `true` / `false`
    Bool(bool),
    /// Suffixed `b`, e.g. `123b`
    Byte(i8),
    /// Suffixed `s`, e.g. `1s`
    Short(i16),
    /// Bare integer
    Int(i32),
    /// Suffixed `l`
    Long(i64),
    /// Suffixed `f`, e.g. `123.4f`
    Float(f32),
    /// Suffixed `d`
    Double(f64),
    /// Double-quoted with `"` escaped
    Str(String),
    /// `[a, b, c]`
    List(Vec<Nbt>),
    /// `{"key": value, ...}`, insertion-ordered
    Compound(IndexMap<String, Nbt>),
}

impl Nbt {
    /// Builds a compound from `(key, value)` pairs, preserving order.
    pub fn compound(entries: Vec<(&str, Nbt)>) -> Self {
        Nbt::Compound(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl fmt::Display for Nbt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nbt::Bool(value) => write!(f, "{}", if *value { "true" } else { "false" }),
            Nbt::Byte(value) => write!(f, "{}b", value),
            Nbt::Short(value) => write!(f, "{}s", value),
            Nbt::Int(value) => write!(f, "{}", value),
            Nbt::Long(value) => write!(f, "{}l", value),
            Nbt::Float(value) => write!(f, "{}f", value),
            Nbt::Double(value) => write!(f, "{}d", value),
            Nbt::Str(value) => write!(f, "\"{}\"", value.replace('"', "\\\"")),
            Nbt::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    value.fmt(f)?;
                }
                write!(f, "]")
            }
            Nbt::Compound(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Nbt {
    fn from(value: bool) -> Self {
        Nbt::Bool(value)
    }
}

impl From<i32> for Nbt {
    fn from(value: i32) -> Self {
        Nbt::Int(value)
    }
}

impl From<&str> for Nbt {
    fn from(value: &str) -> Self {
        Nbt::Str(value.to_string())
    }
}

impl From<String> for Nbt {
    fn from(value: String) -> Self {
        Nbt::Str(value)
    }
}

impl From<Vec<Nbt>> for Nbt {
    fn from(value: Vec<Nbt>) -> Self {
        Nbt::List(value)
    }
}

/// A dotted NBT data path, e.g. `this.ingredient[123]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NbtPath {
    path: String,
}

impl NbtPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Returns a new path extended with `.subpath`.
    pub fn key(&self, subpath: &str) -> NbtPath {
        NbtPath::new(format!("{}.{}", self.path, subpath))
    }

    /// Returns a new path indexing into a list, `path[index]`.
    pub fn at(&self, index: usize) -> NbtPath {
        NbtPath::new(format!("{}[{}]", self.path, index))
    }
}

impl fmt::Display for NbtPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
