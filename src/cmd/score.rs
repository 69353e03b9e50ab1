//! Scoreboard references and command text helpers.

use std::fmt;

/// A score holder / objective pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub holder: String,
    pub objective: String,
}

impl Score {
    pub fn new(holder: impl Into<String>, objective: impl Into<String>) -> Self {
        Self { holder: holder.into(), objective: objective.into() }
    }

    /// Condition fragment testing this score against a range,
    /// e.g. `score $holder obj matches 1..5`.
    pub fn matches(&self, range: &str) -> String {
        format!("score {} {} matches {}", self.holder, self.objective, range)
    }

    /// Command text setting this score to `value`.
    pub fn set(&self, value: i32) -> String {
        format!("scoreboard players set {} {} {}", self.holder, self.objective, value)
    }

    /// Command text adding `value` to this score.
    pub fn add(&self, value: i32) -> String {
        format!("scoreboard players add {} {} {}", self.holder, self.objective, value)
    }

    /// Command text reading this score.
    pub fn get(&self) -> String {
        format!("scoreboard players get {} {}", self.holder, self.objective)
    }

    /// Command text resetting this score.
    pub fn reset(&self) -> String {
        format!("scoreboard players reset {} {}", self.holder, self.objective)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.holder, self.objective)
    }
}

/// Command text creating an objective.
pub fn objective_add(objective: &str, criteria: &str) -> String {
    format!("scoreboard objectives add {} {}", objective, criteria)
}

/// Command text removing an objective.
pub fn objective_remove(objective: &str) -> String {
    format!("scoreboard objectives remove {}", objective)
}
