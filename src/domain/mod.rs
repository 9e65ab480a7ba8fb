//! Staffing model for the three manifolds lives here.

pub mod aggregate;
pub mod app_state;
pub mod calculation;
pub mod entities;

#[allow(unused_imports)]
pub use aggregate::{aggregate_lines, AggregateTotals, Aggregation, ChartCategory, LineOutcome};
#[allow(unused_imports)]
pub use app_state::{AppState, ManifoldForm, PersistedSettings, Theme};
#[allow(unused_imports)]
pub use calculation::{
    calculate_line, calculate_operatives, estimate_time, Bottleneck, LineResult, OperativesResult,
    SummaryRow, TimeResult,
};
#[allow(unused_imports)]
pub use entities::{parse_field, Field, FieldId, LineValues, ManifoldId, Mode};
