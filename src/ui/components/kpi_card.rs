use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "kpi",
            span { "{title}" }
            strong { "{value}" }
        }
        if let Some(desc) = description {
            p { class: "kpi-note", "{desc}" }
        }
    }
}
