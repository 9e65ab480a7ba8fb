use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, SettingsHandle},
    domain::{AppState, Field, FieldId, LineOutcome, ManifoldId},
};

#[component]
pub fn ManifoldPanel(manifold: ManifoldId, outcome: LineOutcome) -> Element {
    let state = use_context::<Signal<AppState>>();
    let mode = state.with(|st| st.mode);
    let fields: Vec<FieldId> = Field::ALL
        .into_iter()
        .filter(|field| field.is_visible(mode))
        .map(|field| FieldId::new(manifold, field))
        .collect();

    rsx! {
        section {
            class: "panel",
            h2 { "{manifold.title()}" }
            for id in fields {
                FieldInput { key: "{id.storage_key()}", id }
            }
            OutputLog { outcome }
        }
    }
}

#[component]
fn FieldInput(id: FieldId) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let settings = use_context::<SettingsHandle>();
    let (raw, editable, flagged) = state.with(|st| {
        (
            st.raw(id).to_string(),
            st.is_editable(id),
            st.is_flagged(id),
        )
    });
    let input_id = id.storage_key();
    let class = if flagged { "invalid-input" } else { "" };

    rsx! {
        div {
            class: "field",
            label { r#for: "{input_id}", "{id.field.label()}" }
            input {
                id: "{input_id}",
                class: "{class}",
                r#type: "number",
                min: "0",
                step: "any",
                value: "{raw}",
                disabled: !editable,
                oninput: move |evt| {
                    state.with_mut(|st| st.set_field(id, evt.value()));
                    persist_user_state(&state, &settings);
                },
            }
        }
    }
}

#[component]
fn OutputLog(outcome: LineOutcome) -> Element {
    let Some(result) = outcome.result() else {
        return rsx! {
            div {
                class: "output-log",
                p { class: "awaiting", "{LineOutcome::PLACEHOLDER}" }
            }
        };
    };
    let rows = result.summary();

    rsx! {
        div {
            class: "output-log",
            h3 { "Calculus Complete:" }
            ul {
                for row in rows {
                    if row.divider {
                        hr {}
                    } else {
                        li {
                            span { "{row.label}:" }
                            strong { "{row.value}" }
                        }
                    }
                }
            }
        }
    }
}
