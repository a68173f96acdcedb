use serde::{Deserialize, Serialize};

use crate::grid::Cell;

/// A single district: its grid territory plus two-party vote counts.
///
/// Every field defaults when absent from the payload, so a partially
/// malformed district degrades to zero values instead of rejecting the
/// whole plan. An empty or zero-vote district is valid; it contributes
/// degenerate (zero) values to the aggregates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct District {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub votes_party_a: u64,
    #[serde(default)]
    pub votes_party_b: u64,
}

impl District {
    /// Number of grid cells in this district's territory.
    #[inline] pub fn area(&self) -> usize { self.cells.len() }

    /// Combined two-party vote count for this district.
    #[inline] pub fn total_votes(&self) -> u64 { self.votes_party_a + self.votes_party_b }
}
