//! Gift-exchange pairing without repeats
//!
//! [`services::matching::find_assignment`] finds a perfect giver -> recipient
//! assignment over any [`services::matching::Eligibility`] relation;
//! [`history::HistoryMatrix`] is the CSV-backed record of past pairings that
//! the `fishbowl` binary feeds it.

pub mod cli;
pub mod config;
pub mod history;
pub mod services;
