use std::rc::Rc;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{pages::CalculatorPage, shell::Shell},
    util::{
        assets,
        persistence::{load_settings, persist_best_effort, FileStore, SettingsStore},
    },
};

/// Settings store shared through context.
#[derive(Clone)]
pub struct SettingsHandle(Rc<dyn SettingsStore>);

impl SettingsHandle {
    pub fn new(store: impl SettingsStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.0.as_ref()
    }
}

impl PartialEq for SettingsHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
pub fn App() -> Element {
    let settings = use_hook(|| SettingsHandle::new(FileStore::new()));
    let state = use_signal({
        let settings = settings.clone();
        move || restore_state(settings.store())
    });
    use_context_provider(|| state);
    use_context_provider(|| settings.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell { CalculatorPage {} }
    }
}

/// Default form overlaid with whatever the store still remembers.
pub fn restore_state(store: &dyn SettingsStore) -> AppState {
    let mut state = AppState::default();
    if let Some(saved) = load_settings(store) {
        state.apply_persisted(saved);
    }
    state
}

pub fn persist_user_state(state: &Signal<AppState>, settings: &SettingsHandle) {
    let snapshot = state.with(|st| st.to_persisted());
    persist_best_effort(settings.store(), &snapshot);
}
