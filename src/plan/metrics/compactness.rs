use std::f64::consts::PI;

use crate::grid;
use crate::plan::{CompactnessReport, Plan, metrics::round3};

impl Plan {
    /// Compute the Polsby-Popper compactness ratio for each district.
    ///
    /// Formula: 4 * pi * area / (perimeter^2), with area measured in cells
    /// and perimeter in unit edges, rounded to 3 decimals. A district with a
    /// zero perimeter scores 0.0. No clamping is applied to the ratios.
    /// `individual_ratios` is aligned index-for-index with the district order;
    /// `average_ratio` is their arithmetic mean (0.0 for an empty plan).
    pub fn polsby_popper(&self) -> CompactnessReport {
        let individual_ratios = self.districts.iter()
            .map(|district| {
                let perimeter = grid::perimeter(&district.cells);
                if perimeter == 0 { return 0.0 }

                let area = district.area() as f64;
                round3(4.0 * PI * area / (perimeter * perimeter) as f64)
            })
            .collect::<Vec<_>>();

        let average_ratio = if individual_ratios.is_empty() {
            0.0
        } else {
            round3(individual_ratios.iter().sum::<f64>() / individual_ratios.len() as f64)
        };

        CompactnessReport { average_ratio, individual_ratios }
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Cell;
    use crate::plan::{District, Plan};

    fn district_with_cells(cells: Vec<Cell>) -> District {
        District { id: 1, cells, ..District::default() }
    }

    #[test]
    fn single_cell_ratio_is_pi_over_four() {
        // (4π·1)/16 ≈ 0.785
        let plan = Plan {
            districts: vec![district_with_cells(vec![Cell(0, 0)])],
            ..Plan::default()
        };

        let report = plan.polsby_popper();
        assert_eq!(report.individual_ratios, vec![0.785]);
        assert_eq!(report.average_ratio, 0.785);
    }

    #[test]
    fn three_by_three_square_ratio() {
        // 9 cells, perimeter 12: round((4π·9)/144, 3) = 0.785
        let square: Vec<Cell> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Cell(row, col)))
            .collect();
        let plan = Plan { districts: vec![district_with_cells(square)], ..Plan::default() };

        assert_eq!(plan.polsby_popper().individual_ratios, vec![0.785]);
    }

    #[test]
    fn empty_district_scores_zero_without_panicking() {
        let plan = Plan {
            districts: vec![district_with_cells(vec![]), district_with_cells(vec![Cell(5, 5)])],
            ..Plan::default()
        };

        let report = plan.polsby_popper();
        assert_eq!(report.individual_ratios, vec![0.0, 0.785]);
    }

    #[test]
    fn empty_plan_yields_zero_average_and_no_ratios() {
        let report = Plan::default().polsby_popper();
        assert_eq!(report.average_ratio, 0.0);
        assert!(report.individual_ratios.is_empty());
    }

    #[test]
    fn elongated_district_scores_below_square() {
        // 1×9 strip: area 9, perimeter 20 -> well below the 3×3 square.
        let strip: Vec<Cell> = (0..9).map(|col| Cell(0, col)).collect();
        let plan = Plan { districts: vec![district_with_cells(strip)], ..Plan::default() };

        let ratio = plan.polsby_popper().individual_ratios[0];
        assert!(ratio > 0.0 && ratio < 0.785);
    }
}
