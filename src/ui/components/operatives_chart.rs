use dioxus::prelude::*;

use crate::{
    domain::{ChartCategory, Theme},
    ui::theme,
    util::format::format_average,
};

/// Bar heights as a share of the tallest bar, in percent.
///
/// An all-zero series stays flat rather than dividing by zero.
pub fn bar_heights(values: [f64; 4]) -> [f64; 4] {
    let tallest = values.iter().copied().fold(0.0, f64::max);
    if tallest <= 0.0 {
        return [0.0; 4];
    }
    values.map(|value| (value.max(0.0) / tallest) * 100.0)
}

#[component]
pub fn OperativesChart(values: [f64; 4], theme: Theme) -> Element {
    let heights = bar_heights(values);
    let bars: Vec<(ChartCategory, String, f64)> = ChartCategory::ALL
        .into_iter()
        .zip(values)
        .zip(heights)
        .map(|((category, value), height)| (category, format_average(value), height))
        .collect();

    rsx! {
        figure {
            class: "operatives-chart",
            figcaption { style: "color: {theme::chart_text(theme)}", "Average Operatives Required" }
            div {
                class: "chart",
                style: "border-color: {theme::chart_grid(theme)}",
                for (category, label, height) in bars.clone() {
                    div {
                        key: "{category.label()}",
                        class: "chart-bar",
                        title: "{category.label()}: {label}",
                        style: "height: {height}%; background: {category.color()}; border-color: {theme::bar_border(theme)}",
                    }
                }
            }
            div {
                class: "chart-labels",
                style: "color: {theme::chart_text(theme)}",
                for (category, label, _) in bars {
                    span { key: "{category.label()}", "{category.label()} ({label})" }
                }
            }
        }
    }
}
