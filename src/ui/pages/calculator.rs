use dioxus::prelude::*;

use crate::{
    domain::{AppState, ManifoldId},
    ui::components::{
        kpi_card::KpiCard, manifold_panel::ManifoldPanel, operatives_chart::OperativesChart,
    },
    util::format::{format_amount, format_money},
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let (aggregation, theme) = state.with(|st| (st.aggregate(), st.theme));
    let totals = aggregation.totals.clone();
    let panels: Vec<_> = ManifoldId::ALL
        .into_iter()
        .map(|manifold| (manifold, aggregation.outcome(manifold).clone()))
        .collect();

    rsx! {
        div {
            class: "chassis",
            for (manifold, outcome) in panels {
                ManifoldPanel { key: "{manifold.prefix()}", manifold, outcome }
            }
            section {
                class: "panel",
                h2 { "Aggregate Output" }
                KpiCard {
                    title: "Total Pickable Units".to_string(),
                    value: format_amount(totals.pickable_units),
                }
                KpiCard {
                    title: "Total Non-Pickable Units".to_string(),
                    value: format_amount(totals.non_pickable_units),
                }
                KpiCard {
                    title: "Total Cost".to_string(),
                    value: format_money(totals.total_cost),
                    description: Some(format!(
                        "{} of {} manifolds active",
                        totals.active_manifolds,
                        ManifoldId::ALL.len()
                    )),
                }
                OperativesChart { values: totals.chart_values(), theme }
            }
        }
    }
}
