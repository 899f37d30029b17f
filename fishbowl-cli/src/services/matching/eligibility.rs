//! Eligibility relation between givers and recipients
//!
//! The matcher only asks "can this giver be paired with this recipient?",
//! so any representation (dense history matrix, sparse adjacency, rule
//! closure) can drive it.

use std::collections::{HashMap, HashSet};

/// Query interface over ordered (giver, recipient) pairs
///
/// Implementations do not need to special-case self-pairs; the matcher
/// never asks about them.
pub trait Eligibility {
    fn is_eligible(&self, giver: &str, recipient: &str) -> bool;
}

/// Rule-based predicates
impl<F> Eligibility for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_eligible(&self, giver: &str, recipient: &str) -> bool {
        self(giver, recipient)
    }
}

/// Sparse adjacency: giver -> allowed recipients
///
/// Givers missing from the map have no eligible recipient.
impl Eligibility for HashMap<String, HashSet<String>> {
    fn is_eligible(&self, giver: &str, recipient: &str) -> bool {
        self.get(giver)
            .map(|allowed| allowed.contains(recipient))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_eligibility() {
        let rule = |giver: &str, recipient: &str| giver.len() == recipient.len();

        assert!(rule.is_eligible("Ann", "Bob"));
        assert!(!rule.is_eligible("Ann", "Carol"));
    }

    #[test]
    fn test_adjacency_eligibility() {
        let mut adjacency: HashMap<String, HashSet<String>> = HashMap::new();
        adjacency
            .entry("A".to_string())
            .or_default()
            .insert("B".to_string());

        assert!(adjacency.is_eligible("A", "B"));
        assert!(!adjacency.is_eligible("A", "C"));
        // Unknown giver
        assert!(!adjacency.is_eligible("Z", "A"));
    }
}
