use super::{
    calculation::{calculate_line, LineResult},
    entities::{LineValues, ManifoldId, Mode},
};

/// The four fixed chart categories, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartCategory {
    PickersPickable,
    PalletizersPickable,
    PickersTotal,
    PalletizersTotal,
}

impl ChartCategory {
    pub const ALL: [ChartCategory; 4] = [
        ChartCategory::PickersPickable,
        ChartCategory::PalletizersPickable,
        ChartCategory::PickersTotal,
        ChartCategory::PalletizersTotal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartCategory::PickersPickable => "Pickers (Pickable)",
            ChartCategory::PalletizersPickable => "Palletizers (Pickable)",
            ChartCategory::PickersTotal => "Pickers (Total)",
            ChartCategory::PalletizersTotal => "Palletizers (Total)",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ChartCategory::PickersPickable => "#c3a4f0",
            ChartCategory::PalletizersPickable => "#a178d1",
            ChartCategory::PickersTotal => "#F4A261",
            ChartCategory::PalletizersTotal => "#D94f30",
        }
    }
}

/// Outcome of one manifold after the validity gate.
#[derive(Clone, Debug, PartialEq)]
pub enum LineOutcome {
    /// Inputs did not pass validation; nothing was calculated.
    Awaiting,
    Complete(LineResult),
}

impl LineOutcome {
    pub const PLACEHOLDER: &'static str = "Awaiting valid parameters...";

    pub fn result(&self) -> Option<&LineResult> {
        match self {
            LineOutcome::Awaiting => None,
            LineOutcome::Complete(result) => Some(result),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateTotals {
    pub pickable_units: f64,
    pub non_pickable_units: f64,
    pub total_cost: f64,
    pub pickers: u64,
    pub palletizers: u64,
    pub total_pickers: u64,
    pub total_palletizers: u64,
    pub active_manifolds: usize,
}

impl AggregateTotals {
    /// Averaging divisor; never zero.
    pub fn divisor(&self) -> usize {
        self.active_manifolds.max(1)
    }

    /// Average operatives per active manifold, in [`ChartCategory::ALL`] order.
    pub fn chart_values(&self) -> [f64; 4] {
        let divisor = self.divisor() as f64;
        [
            self.pickers,
            self.palletizers,
            self.total_pickers,
            self.total_palletizers,
        ]
        .map(|sum| sum as f64 / divisor)
    }

    fn absorb(&mut self, result: &LineResult) {
        let [pickers, palletizers, total_pickers, total_palletizers] = result.operative_counts();
        self.active_manifolds += 1;
        self.pickers += pickers;
        self.palletizers += palletizers;
        self.total_pickers += total_pickers;
        self.total_palletizers += total_palletizers;
        self.total_cost += result.total_cost();
    }
}

pub struct Aggregation {
    pub outcomes: Vec<(ManifoldId, LineOutcome)>,
    pub totals: AggregateTotals,
}

impl Aggregation {
    pub fn outcome(&self, manifold: ManifoldId) -> &LineOutcome {
        self.outcomes
            .iter()
            .find(|(id, _)| *id == manifold)
            .map(|(_, outcome)| outcome)
            .unwrap_or(&LineOutcome::Awaiting)
    }
}

/// Calculates every manifold and rolls the results into totals.
///
/// Raw unit counts are summed for every line, valid or not; cost and
/// operatives only come from lines that pass the validity gate.
pub fn aggregate_lines(mode: Mode, lines: &[(ManifoldId, LineValues)]) -> Aggregation {
    let mut totals = AggregateTotals::default();
    let mut outcomes = Vec::with_capacity(lines.len());

    for (manifold, values) in lines {
        let outcome = if values.is_valid(mode) {
            let result = calculate_line(mode, values);
            totals.absorb(&result);
            LineOutcome::Complete(result)
        } else {
            LineOutcome::Awaiting
        };
        totals.pickable_units += values.total_units;
        totals.non_pickable_units += values.non_pickable_units;
        outcomes.push((*manifold, outcome));
    }

    Aggregation { outcomes, totals }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    fn operatives_line(total_units: f64) -> LineValues {
        LineValues {
            total_units,
            non_pickable_units: 50.0,
            time_frame: 3.0,
            picker_rate: 10.0,
            palletizer_rate: 25.0,
            picker_cost: 12.0,
            palletizer_cost: 20.0,
            ..LineValues::default()
        }
    }

    fn three(lines: [LineValues; 3]) -> Vec<(ManifoldId, LineValues)> {
        ManifoldId::ALL.into_iter().zip(lines).collect()
    }

    #[test]
    fn no_valid_lines_yields_zero_chart() {
        let aggregation = aggregate_lines(Mode::Operatives, &three([LineValues::default(); 3]));
        assert_eq!(aggregation.totals.active_manifolds, 0);
        assert_eq!(aggregation.totals.divisor(), 1);
        assert_eq!(aggregation.totals.chart_values(), [0.0; 4]);
        assert!(aggregation
            .outcomes
            .iter()
            .all(|(_, outcome)| *outcome == LineOutcome::Awaiting));
    }

    #[test]
    fn invalid_line_still_counts_raw_units() {
        let invalid = LineValues {
            total_units: 0.0,
            non_pickable_units: 70.0,
            ..operatives_line(0.0)
        };
        let aggregation = aggregate_lines(
            Mode::Operatives,
            &three([operatives_line(100.0), invalid, LineValues::default()]),
        );
        let totals = &aggregation.totals;
        assert_eq!(totals.active_manifolds, 1);
        assert_relative_eq!(totals.pickable_units, 100.0);
        assert_relative_eq!(totals.non_pickable_units, 120.0);
        // only the valid line: 150 units -> 5 pickers, 2 palletizers
        assert_relative_eq!(totals.total_cost, (5.0 * 12.0 + 2.0 * 20.0) * 3.0);
        assert_eq!(aggregation.outcome(ManifoldId::P2), &LineOutcome::Awaiting);
    }

    #[test]
    fn chart_averages_over_active_lines() {
        let aggregation = aggregate_lines(
            Mode::Operatives,
            &three([operatives_line(100.0), operatives_line(200.0), LineValues::default()]),
        );
        let totals = &aggregation.totals;
        // pickers: ceil(3.33)=4 and ceil(6.67)=7
        assert_eq!(totals.pickers, 11);
        let chart = totals.chart_values();
        assert_relative_eq!(chart[0], 5.5);
    }

    #[test]
    fn time_mode_sums_cost_but_not_operatives() {
        let line = LineValues {
            available_pickers: 2.0,
            available_palletizers: 1.0,
            ..operatives_line(100.0)
        };
        let aggregation = aggregate_lines(Mode::Time, &three([line; 3]));
        assert_eq!(aggregation.totals.active_manifolds, 3);
        assert_eq!(aggregation.totals.chart_values(), [0.0; 4]);
        assert!(aggregation.totals.total_cost > 0.0);
    }

    #[test]
    fn categories_keep_chart_order() {
        let labels: Vec<_> = ChartCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "Pickers (Pickable)",
                "Palletizers (Pickable)",
                "Pickers (Total)",
                "Palletizers (Total)"
            ]
        );
    }

    proptest! {
        #[test]
        fn chart_values_are_always_finite(
            units in prop::array::uniform3(-10.0f64..10_000.0),
            rate in 0.0f64..100.0,
            hours in 0.0f64..12.0,
        ) {
            let lines = units.map(|total_units| LineValues {
                total_units,
                time_frame: hours,
                picker_rate: rate,
                palletizer_rate: rate,
                ..LineValues::default()
            });
            let aggregation = aggregate_lines(Mode::Operatives, &three(lines));
            for value in aggregation.totals.chart_values() {
                prop_assert!(value.is_finite());
                prop_assert!(value >= 0.0);
            }
        }
    }
}
