//! Entity selector containers.

use std::fmt;

/// An entity selector with chained arguments, rendered `@e[k=v,...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    target: &'static str,
    arguments: Vec<(String, String)>,
}

impl Selector {
    fn new(target: &'static str) -> Self {
        Self { target, arguments: Vec::new() }
    }

    /// `@a` - all players
    pub fn all_players() -> Self {
        Self::new("@a")
    }

    /// `@s` - the executing entity
    pub fn current() -> Self {
        Self::new("@s")
    }

    /// `@r` - a random player
    pub fn random_player() -> Self {
        Self::new("@r")
    }

    /// `@p` - the nearest player
    pub fn nearest_player() -> Self {
        Self::new("@p")
    }

    /// `@e` - all entities
    pub fn entities() -> Self {
        Self::new("@e")
    }

    /// Adds a selector argument, keeping insertion order.
    pub fn arg(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.arguments.push((key.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target)?;
        if !self.arguments.is_empty() {
            write!(f, "[")?;
            for (idx, (key, value)) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
