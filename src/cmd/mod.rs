//! Command value objects: small stringification helpers for the literals
//! that appear inside emitted commands.

pub mod nbt;
pub mod score;
pub mod selector;

/// Joins tokens with single spaces, dropping empty ones.
pub fn tokens_to_str(tokens: &[&str]) -> String {
    tokens
        .iter()
        .filter(|token| !token.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds an `if ...` condition fragment for each condition, space-joined.
pub fn if_cond(conditions: &[&str]) -> String {
    let fragments: Vec<String> =
        conditions.iter().map(|cond| format!("if {}", cond)).collect();
    let fragments: Vec<&str> = fragments.iter().map(String::as_str).collect();
    tokens_to_str(&fragments)
}

/// Builds an `unless ...` condition fragment for each condition, space-joined.
pub fn unless(conditions: &[&str]) -> String {
    let fragments: Vec<String> =
        conditions.iter().map(|cond| format!("unless {}", cond)).collect();
    let fragments: Vec<&str> = fragments.iter().map(String::as_str).collect();
    tokens_to_str(&fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_to_str_drops_empty_tokens() {
        assert_eq!(tokens_to_str(&["execute", "", "run", "say hi"]), "execute run say hi");
        assert_eq!(tokens_to_str(&[]), "");
    }
}
