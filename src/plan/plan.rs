use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::plan::District;

/// A complete candidate solution: the district partition plus plan-level
/// vote totals.
///
/// The plan-level totals are expected to equal the per-district sums, but the
/// scorers never rely on that; they enter the computation only as the
/// efficiency-gap denominator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub districts: Vec<District>,
    #[serde(default)]
    pub total_votes_party_a: u64,
    #[serde(default)]
    pub total_votes_party_b: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle_id: Option<String>,
}

impl Plan {
    /// Parse a plan payload from JSON text.
    pub fn from_json(payload: &str) -> Result<Plan> {
        serde_json::from_str(payload).context("Failed to parse plan payload")
    }

    /// Number of districts in this plan.
    #[inline] pub fn num_districts(&self) -> usize { self.districts.len() }

    /// Combined two-party vote count across the whole plan.
    #[inline] pub fn total_votes(&self) -> u64 { self.total_votes_party_a + self.total_votes_party_b }
}

#[cfg(test)]
mod tests {
    use crate::plan::Plan;

    #[test]
    fn from_json_parses_a_minimal_payload() {
        let plan = Plan::from_json(r#"{"districts": [], "total_votes_party_a": 3}"#).unwrap();
        assert_eq!(plan.num_districts(), 0);
        assert_eq!(plan.total_votes(), 3);
        assert!(plan.puzzle_id.is_none());
    }

    #[test]
    fn from_json_rejects_malformed_payloads() {
        assert!(Plan::from_json("not a payload").is_err());
    }
}
