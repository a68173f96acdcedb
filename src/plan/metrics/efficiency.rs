use crate::plan::{Plan, metrics::round3};

impl Plan {
    /// Compute the efficiency gap: the wasted-vote asymmetry between the two
    /// parties, normalized by the plan-level vote total and rounded to 3
    /// decimals.
    ///
    /// In a lost district every vote is wasted; in a won district the votes
    /// beyond the majority threshold (`district_total / 2 + 1`) are wasted.
    /// Positive values favor party A, negative favor party B. With no
    /// districts or a zero plan-level total the gap is exactly 0.0.
    ///
    /// A tied district falls into the party-B branch of the
    /// `votes_a > votes_b` test, so B's waste there is negative (the
    /// threshold exceeds `votes_b`); accumulation is signed to keep that
    /// arithmetic intact.
    pub fn efficiency_gap(&self) -> f64 {
        if self.districts.is_empty() || self.total_votes() == 0 { return 0.0 }

        let mut wasted_a: i64 = 0;
        let mut wasted_b: i64 = 0;

        for district in &self.districts {
            let votes_a = district.votes_party_a as i64;
            let votes_b = district.votes_party_b as i64;
            let district_total = votes_a + votes_b;
            if district_total == 0 { continue }

            let votes_to_win = district_total / 2 + 1;

            if votes_a > votes_b {
                wasted_a += votes_a - votes_to_win;
                wasted_b += votes_b;
            } else {
                wasted_b += votes_b - votes_to_win;
                wasted_a += votes_a;
            }
        }

        round3((wasted_b - wasted_a) as f64 / self.total_votes() as f64)
    }
}
