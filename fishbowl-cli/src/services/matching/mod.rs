// Matching service for computing giver -> recipient assignments
//
// This service provides the perfect-matching search over an eligibility
// relation. It performs no IO and keeps no state between calls.

pub mod core;
pub mod eligibility;
pub mod models;

// Re-export commonly used types
pub use self::core::find_assignment;
pub use eligibility::Eligibility;
pub use models::{Assignment, NoSolution};
