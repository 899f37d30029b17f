//! Perfect-matching search between givers and recipients
//!
//! Givers and recipients are two copies of the same participant list.
//! Uses Kuhn's augmenting-path algorithm: each giver in turn tries to
//! claim a recipient, displacing earlier givers onto other recipients
//! when that frees one up.

use super::eligibility::Eligibility;
use super::models::{Assignment, NoSolution};

/// Find an assignment where every participant gives to exactly one other
/// participant and receives from exactly one
///
/// Recipients are tried in participant order, so the result is
/// deterministic for a fixed input order. Self-pairs are never considered,
/// whatever the relation says about them.
///
/// Returns `NoSolution` as soon as one giver cannot be matched, even after
/// re-matching earlier givers.
pub fn find_assignment<E>(participants: &[String], eligible: &E) -> Result<Assignment, NoSolution>
where
    E: Eligibility + ?Sized,
{
    debug_assert!(
        {
            let mut seen = std::collections::HashSet::new();
            participants.iter().all(|p| seen.insert(p))
        },
        "participants must be distinct"
    );

    let adjacency = build_adjacency(participants, eligible);
    let mut search = AugmentingSearch::new(&adjacency);

    for giver in 0..participants.len() {
        search.visited.fill(false);

        if !search.try_augment(giver) {
            log::debug!(
                "No augmenting path for {} after matching {} givers",
                participants[giver],
                giver
            );
            return Err(NoSolution {
                unmatched_giver: participants[giver].clone(),
            });
        }
    }

    // Every giver augmented, so every recipient has an owner
    debug_assert!(search.owner.iter().all(Option::is_some));

    // Invert recipient -> giver into giver -> recipient
    let mut recipient_of = vec![0usize; participants.len()];
    for (recipient, giver) in search
        .owner
        .iter()
        .enumerate()
        .filter_map(|(recipient, owner)| owner.map(|giver| (recipient, giver)))
    {
        recipient_of[giver] = recipient;
    }

    let pairs = recipient_of
        .iter()
        .enumerate()
        .map(|(giver, &recipient)| {
            (
                participants[giver].clone(),
                participants[recipient].clone(),
            )
        })
        .collect();

    log::debug!("Found assignment for {} participants", participants.len());
    Ok(Assignment::from_pairs(pairs))
}

/// Eligible recipient indices per giver index, in participant order
fn build_adjacency<E>(participants: &[String], eligible: &E) -> Vec<Vec<usize>>
where
    E: Eligibility + ?Sized,
{
    participants
        .iter()
        .enumerate()
        .map(|(g, giver)| {
            participants
                .iter()
                .enumerate()
                .filter(|(r, recipient)| *r != g && eligible.is_eligible(giver, recipient))
                .map(|(r, _)| r)
                .collect()
        })
        .collect()
}

/// Per-call search state
struct AugmentingSearch<'a> {
    adjacency: &'a [Vec<usize>],
    /// recipient -> giver currently holding it
    owner: Vec<Option<usize>>,
    /// Recipients already explored in the current attempt
    visited: Vec<bool>,
}

impl<'a> AugmentingSearch<'a> {
    fn new(adjacency: &'a [Vec<usize>]) -> Self {
        let n = adjacency.len();
        Self {
            adjacency,
            owner: vec![None; n],
            visited: vec![false; n],
        }
    }

    /// Depth-first search for an augmenting path starting at `giver`
    fn try_augment(&mut self, giver: usize) -> bool {
        let adjacency = self.adjacency;

        for &recipient in &adjacency[giver] {
            if self.visited[recipient] {
                continue;
            }
            self.visited[recipient] = true;

            let free = match self.owner[recipient] {
                None => true,
                Some(holder) => self.try_augment(holder),
            };

            if free {
                self.owner[recipient] = Some(giver);
                return true;
            }
        }

        false
    }
}
