use serde::{Deserialize, Serialize};

use crate::plan::Plan;

/// Per-district compactness ratios plus their arithmetic mean.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CompactnessReport {
    pub average_ratio: f64,
    /// Aligned index-for-index with the plan's district order.
    pub individual_ratios: Vec<f64>,
}

/// The full metrics report for one scored plan.
///
/// The scorers leave `timestamp` and `puzzle_id` empty; the calling boundary
/// stamps them (and persists the report) after computation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricsReport {
    pub efficiency_gap: f64,
    pub polsby_popper: CompactnessReport,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle_id: Option<String>,
}

impl Plan {
    /// Score this plan, computing both metrics independently.
    pub fn compute_metrics(&self) -> MetricsReport {
        MetricsReport {
            efficiency_gap: self.efficiency_gap(),
            polsby_popper: self.polsby_popper(),
            timestamp: None,
            puzzle_id: None,
        }
    }
}
