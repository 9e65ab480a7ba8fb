//! Staffing and throughput arithmetic for a single manifold.
//!
//! Nothing here validates: callers gate on [`LineValues::is_valid`] first, which
//! guarantees every divisor below is strictly positive.

use super::entities::{LineValues, Mode};
use crate::util::format::{format_amount, format_hours};

/// Required headcount for a fixed time-frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperativesResult {
    pub pickers: u64,
    pub palletizers: u64,
    pub total_pickers: u64,
    pub total_palletizers: u64,
    pub pickable_cost: f64,
    pub total_cost: f64,
}

/// Stage that bounds completion time in time mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bottleneck {
    Picking,
    Palletizing,
}

impl Bottleneck {
    pub fn name(self) -> &'static str {
        match self {
            Bottleneck::Picking => "Picking",
            Bottleneck::Palletizing => "Palletizing",
        }
    }
}

/// Completion time for a fixed headcount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeResult {
    /// Hours to clear the pickable workload.
    pub pickable_time: f64,
    /// Hours to clear pickable plus non-pickable workload.
    pub total_time: f64,
    pub pickable_cost: f64,
    pub total_cost: f64,
    pub bottleneck: Bottleneck,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineResult {
    Operatives(OperativesResult),
    Time(TimeResult),
}

impl LineResult {
    pub fn total_cost(&self) -> f64 {
        match self {
            LineResult::Operatives(result) => result.total_cost,
            LineResult::Time(result) => result.total_cost,
        }
    }

    /// Operative counts fed into the chart, in chart category order.
    ///
    /// Time results carry no headcount requirement and contribute zeros.
    pub fn operative_counts(&self) -> [u64; 4] {
        match self {
            LineResult::Operatives(result) => [
                result.pickers,
                result.palletizers,
                result.total_pickers,
                result.total_palletizers,
            ],
            LineResult::Time(_) => [0; 4],
        }
    }

    /// Human-readable findings for the manifold's output log.
    pub fn summary(&self) -> Vec<SummaryRow> {
        match self {
            LineResult::Operatives(result) => vec![
                SummaryRow::new("Pickers (Pickable)", result.pickers.to_string()),
                SummaryRow::new("Palletizers (Pickable)", result.palletizers.to_string()),
                SummaryRow::new("Pickable Cost", format!("${}", format_amount(result.pickable_cost))),
                SummaryRow::divider(),
                SummaryRow::new("Pickers (Total)", result.total_pickers.to_string()),
                SummaryRow::new("Palletizers (Total)", result.total_palletizers.to_string()),
                SummaryRow::new(
                    "Total Workload Cost",
                    format!("${}", format_amount(result.total_cost)),
                ),
            ],
            LineResult::Time(result) => vec![
                SummaryRow::new("Time (Pickable)", format_hours(result.pickable_time)),
                SummaryRow::new("Pickable Cost", format!("${}", format_amount(result.pickable_cost))),
                SummaryRow::divider(),
                SummaryRow::new("Time (Total Workload)", format_hours(result.total_time)),
                SummaryRow::new("Bottleneck", result.bottleneck.name().to_string()),
                SummaryRow::new(
                    "Total Workload Cost",
                    format!("${}", format_amount(result.total_cost)),
                ),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
    /// Rendered as a separator before the following rows.
    pub divider: bool,
}

impl SummaryRow {
    fn new(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            divider: false,
        }
    }

    fn divider() -> Self {
        Self {
            label: "",
            value: String::new(),
            divider: true,
        }
    }
}

pub fn calculate_line(mode: Mode, values: &LineValues) -> LineResult {
    match mode {
        Mode::Operatives => LineResult::Operatives(calculate_operatives(values)),
        Mode::Time => LineResult::Time(estimate_time(values)),
    }
}

pub fn calculate_operatives(values: &LineValues) -> OperativesResult {
    let hours = values.time_frame;
    let pickable = values.total_units;
    let total = values.total_workload();

    let pickers = workers_needed(pickable, values.picker_rate, hours);
    let palletizers = workers_needed(pickable, values.palletizer_rate, hours);
    let total_pickers = workers_needed(total, values.picker_rate, hours);
    let total_palletizers = workers_needed(total, values.palletizer_rate, hours);

    let pickable_cost =
        (pickers as f64 * values.picker_cost + palletizers as f64 * values.palletizer_cost) * hours;
    let total_cost = (total_pickers as f64 * values.picker_cost
        + total_palletizers as f64 * values.palletizer_cost)
        * hours;

    OperativesResult {
        pickers,
        palletizers,
        total_pickers,
        total_palletizers,
        pickable_cost,
        total_cost,
    }
}

pub fn estimate_time(values: &LineValues) -> TimeResult {
    let picking_capacity = values.available_pickers * values.picker_rate;
    let palletizing_capacity = values.available_palletizers * values.palletizer_rate;

    let pickable_time = stage_time(values.total_units, picking_capacity, palletizing_capacity);
    let total_time = stage_time(values.total_workload(), picking_capacity, palletizing_capacity);

    let hourly_cost = values.available_pickers * values.picker_cost
        + values.available_palletizers * values.palletizer_cost;

    let bottleneck = if picking_capacity <= palletizing_capacity {
        Bottleneck::Picking
    } else {
        Bottleneck::Palletizing
    };

    TimeResult {
        pickable_time,
        total_time,
        pickable_cost: hourly_cost * pickable_time,
        total_cost: hourly_cost * total_time,
        bottleneck,
    }
}

/// Whole workers needed to clear `units` at `rate` per worker within `hours`.
///
/// A fractional requirement always costs a full extra worker.
fn workers_needed(units: f64, rate: f64, hours: f64) -> u64 {
    let exact = (units / rate) / hours;
    if exact.is_finite() && exact > 0.0 {
        exact.ceil() as u64
    } else {
        0
    }
}

/// The slower of the two stages bounds completion.
fn stage_time(units: f64, picking_capacity: f64, palletizing_capacity: f64) -> f64 {
    (units / picking_capacity).max(units / palletizing_capacity)
}
