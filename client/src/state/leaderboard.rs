//! Leaderboard presentation helpers.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use crate::net::types::LeaderboardEntry;

/// One ranked row. Rank follows the order the backend returns.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

pub fn rank(entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.into_iter().enumerate().map(|(i, entry)| RankedEntry { rank: i + 1, entry }).collect()
}

/// Average rating with two decimals.
pub fn format_rating(value: f64) -> String {
    format!("{value:.2}")
}
