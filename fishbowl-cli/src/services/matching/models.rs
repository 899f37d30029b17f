use std::collections::HashMap;

/// A complete giver -> recipient mapping
///
/// Pairs are kept in participant (giver) order so printing and recording
/// are deterministic for a fixed input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    pairs: Vec<(String, String)>,
    by_giver: HashMap<String, usize>,
}

impl Assignment {
    /// Build from (giver, recipient) pairs already in giver order
    pub(crate) fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let by_giver = pairs
            .iter()
            .enumerate()
            .map(|(idx, (giver, _))| (giver.clone(), idx))
            .collect();

        Self { pairs, by_giver }
    }

    /// Number of givers in the assignment
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Recipient assigned to a giver
    pub fn recipient_of(&self, giver: &str) -> Option<&str> {
        self.by_giver
            .get(giver)
            .map(|&idx| self.pairs[idx].1.as_str())
    }

    /// Iterate (giver, recipient) pairs in giver order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(giver, recipient)| (giver.as_str(), recipient.as_str()))
    }
}

/// No perfect assignment exists under the given eligibility relation
///
/// This is an expected outcome, recoverable only by changing the input
/// (for example by resetting the pairing history).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSolution {
    /// First giver (in participant order) that could not be matched
    pub unmatched_giver: String,
}

impl std::fmt::Display for NoSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No valid assignment possible under the current constraints \
             ({} could not be matched to any remaining recipient)",
            self.unmatched_giver
        )
    }
}

impl std::error::Error for NoSolution {}
