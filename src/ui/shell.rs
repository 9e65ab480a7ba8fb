use dioxus::prelude::*;

use crate::{
    app::{persist_user_state, SettingsHandle},
    domain::{AppState, Theme},
    ui::theme,
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let settings = use_context::<SettingsHandle>();
    let (mode, sync, current_theme) = state.with(|st| (st.mode, st.sync_rates(), st.theme));

    let on_theme = {
        let settings = settings.clone();
        move |evt: FormEvent| {
            let Some(theme) = Theme::from_class_name(&evt.value()) else {
                return;
            };
            state.with_mut(|st| st.theme = theme);
            persist_user_state(&state, &settings);
        }
    };

    let on_mode = {
        let settings = settings.clone();
        move |_: MouseEvent| {
            state.with_mut(|st| st.toggle_mode());
            persist_user_state(&state, &settings);
        }
    };

    let on_sync = {
        let settings = settings.clone();
        move |evt: FormEvent| {
            let enabled = evt.checked();
            state.with_mut(|st| st.set_sync_rates(enabled));
            persist_user_state(&state, &settings);
        }
    };

    rsx! {
        div {
            class: "{theme::window_class(current_theme)}",
            header {
                class: "controls",
                h1 { "{APP_NAME}" }
                button {
                    id: "mode-selector",
                    class: "mode-toggle",
                    title: "Switch to {mode.toggled().name()}",
                    onclick: on_mode,
                    "Mode: {mode.name()}"
                }
                label {
                    input {
                        id: "sync-rates-checkbox",
                        r#type: "checkbox",
                        checked: sync,
                        onchange: on_sync,
                    }
                    " Sync rates & costs from Manifold I"
                }
                label {
                    "Theme: "
                    select {
                        id: "theme-selector",
                        value: "{current_theme.class_name()}",
                        onchange: on_theme,
                        for choice in Theme::ALL {
                            option {
                                key: "{choice.class_name()}",
                                value: "{choice.class_name()}",
                                selected: choice == current_theme,
                                "{choice.name()}"
                            }
                        }
                    }
                }
            }
            main { id: "main-chassis", {children} }
            footer { "{APP_NAME} {version_label()}" }
        }
    }
}
