use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    aggregate::{aggregate_lines, Aggregation},
    entities::{parse_field, Field, FieldId, LineValues, ManifoldId, Mode},
};

pub const MODE_KEY: &str = "mode-operatives";
pub const SYNC_KEY: &str = "sync-rates-checkbox";
pub const THEME_KEY: &str = "theme-selector";

/// Colour scheme applied to the whole window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Cogitator,
    Forge,
    Daylight,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Cogitator, Theme::Forge, Theme::Daylight];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Cogitator => "Cogitator",
            Theme::Forge => "Forge",
            Theme::Daylight => "Daylight",
        }
    }

    /// Body class, also the persisted value.
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Cogitator => "theme-cogitator",
            Theme::Forge => "theme-forge",
            Theme::Daylight => "theme-daylight",
        }
    }

    pub fn from_class_name(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.class_name() == value)
    }
}

/// Raw text of every input on one manifold, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifoldForm {
    values: BTreeMap<Field, String>,
}

impl ManifoldForm {
    pub fn raw(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn set_raw(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn number(&self, field: Field) -> f64 {
        parse_field(self.raw(field))
    }

    pub fn values(&self) -> LineValues {
        LineValues {
            total_units: self.number(Field::TotalUnits),
            non_pickable_units: self.number(Field::NonPickable),
            time_frame: self.number(Field::TimeFrame),
            picker_rate: self.number(Field::PickerRate),
            palletizer_rate: self.number(Field::PalletizerRate),
            picker_cost: self.number(Field::PickerCost),
            palletizer_cost: self.number(Field::PalletizerCost),
            available_pickers: self.number(Field::AvailablePickers),
            available_palletizers: self.number(Field::AvailablePalletizers),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub mode: Mode,
    pub theme: Theme,
    sync_rates: bool,
    manifolds: [ManifoldForm; 3],
}

impl AppState {
    pub fn manifold(&self, id: ManifoldId) -> &ManifoldForm {
        &self.manifolds[id.index()]
    }

    pub fn raw(&self, id: FieldId) -> &str {
        self.manifold(id.manifold).raw(id.field)
    }

    pub fn sync_rates(&self) -> bool {
        self.sync_rates
    }

    /// Records an edit and, while sync is on, mirrors primary rates and costs.
    ///
    /// Edits to mirrored fields on secondary manifolds are ignored while sync is on.
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        if !self.is_editable(id) {
            return;
        }
        self.manifolds[id.manifold.index()].set_raw(id.field, value);
        if self.sync_rates && id.manifold.is_primary() && id.field.is_synced() {
            self.mirror_primary();
        }
    }

    /// Turning sync on copies the primary values over; turning it off keeps
    /// whatever the secondary manifolds currently hold.
    pub fn set_sync_rates(&mut self, enabled: bool) {
        self.sync_rates = enabled;
        if enabled {
            self.mirror_primary();
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn is_editable(&self, id: FieldId) -> bool {
        let locked_by_sync =
            self.sync_rates && !id.manifold.is_primary() && id.field.is_synced();
        let locked_by_mode = id.field == Field::TimeFrame && !self.mode.is_operatives();
        !locked_by_sync && !locked_by_mode
    }

    /// Flag for individual inputs holding a non-positive number.
    pub fn is_flagged(&self, id: FieldId) -> bool {
        let raw = self.raw(id).trim();
        !raw.is_empty() && parse_field(raw) <= 0.0
    }

    pub fn line_values(&self) -> Vec<(ManifoldId, LineValues)> {
        ManifoldId::ALL
            .into_iter()
            .map(|id| (id, self.manifold(id).values()))
            .collect()
    }

    /// Full recalculation across all manifolds for the current mode.
    pub fn aggregate(&self) -> Aggregation {
        aggregate_lines(self.mode, &self.line_values())
    }

    fn mirror_primary(&mut self) {
        let primary = self.manifold(ManifoldId::PRIMARY).clone();
        for manifold in ManifoldId::ALL.into_iter().filter(|id| !id.is_primary()) {
            let form = &mut self.manifolds[manifold.index()];
            for field in Field::ALL.into_iter().filter(|field| field.is_synced()) {
                form.set_raw(field, primary.raw(field));
            }
        }
    }

    /// Applies persisted settings; unknown keys and unreadable values are skipped.
    pub fn apply_persisted(&mut self, persisted: PersistedSettings) {
        for (key, value) in &persisted.entries {
            if let Some(id) = FieldId::from_storage_key(key) {
                self.manifolds[id.manifold.index()].set_raw(id.field, value.clone());
            }
        }
        if let Some(operatives) = persisted.get(MODE_KEY).and_then(parse_flag) {
            self.mode = if operatives { Mode::Operatives } else { Mode::Time };
        }
        if let Some(theme) = persisted.get(THEME_KEY).and_then(Theme::from_class_name) {
            self.theme = theme;
        }
        if let Some(sync) = persisted.get(SYNC_KEY).and_then(parse_flag) {
            self.set_sync_rates(sync);
        }
    }

    pub fn to_persisted(&self) -> PersistedSettings {
        let mut entries = BTreeMap::new();
        for manifold in ManifoldId::ALL {
            let form = self.manifold(manifold);
            for (field, value) in &form.values {
                entries.insert(FieldId::new(manifold, *field).storage_key(), value.clone());
            }
        }
        entries.insert(MODE_KEY.to_string(), self.mode.is_operatives().to_string());
        entries.insert(SYNC_KEY.to_string(), self.sync_rates.to_string());
        entries.insert(THEME_KEY.to_string(), self.theme.class_name().to_string());
        PersistedSettings { entries }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Flat key to string settings, one entry per form control.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedSettings {
    pub entries: BTreeMap<String, String>,
}

impl PersistedSettings {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::domain::aggregate::LineOutcome;

    fn id(manifold: ManifoldId, field: Field) -> FieldId {
        FieldId::new(manifold, field)
    }

    fn filled_state() -> AppState {
        let mut state = AppState::default();
        for manifold in ManifoldId::ALL {
            state.set_field(id(manifold, Field::TotalUnits), "100");
            state.set_field(id(manifold, Field::TimeFrame), "3");
            state.set_field(id(manifold, Field::PickerRate), "10");
            state.set_field(id(manifold, Field::PalletizerRate), "25");
            state.set_field(id(manifold, Field::PickerCost), "12.50");
            state.set_field(id(manifold, Field::PalletizerCost), "20");
        }
        state
    }

    #[test]
    fn enabling_sync_copies_primary_rates_and_locks_secondaries() {
        let mut state = filled_state();
        state.set_field(id(ManifoldId::P1, Field::PickerRate), "50");
        state.set_sync_rates(true);

        for manifold in [ManifoldId::P2, ManifoldId::P3] {
            assert_eq!(state.raw(id(manifold, Field::PickerRate)), "50");
            assert!(!state.is_editable(id(manifold, Field::PickerRate)));
            assert!(state.is_editable(id(manifold, Field::TotalUnits)));
        }
        assert!(state.is_editable(id(ManifoldId::P1, Field::PickerRate)));
    }

    #[test]
    fn primary_edits_are_mirrored_while_synced() {
        let mut state = filled_state();
        state.set_sync_rates(true);
        state.set_field(id(ManifoldId::P1, Field::PalletizerCost), "33");
        assert_eq!(state.raw(id(ManifoldId::P3, Field::PalletizerCost)), "33");

        state.set_field(id(ManifoldId::P1, Field::TotalUnits), "999");
        assert_eq!(state.raw(id(ManifoldId::P2, Field::TotalUnits)), "100");
    }

    #[test]
    fn secondary_edits_to_locked_fields_are_ignored() {
        let mut state = filled_state();
        state.set_sync_rates(true);
        state.set_field(id(ManifoldId::P2, Field::PickerRate), "1");
        assert_eq!(state.raw(id(ManifoldId::P2, Field::PickerRate)), "10");
    }

    #[test]
    fn disabling_sync_keeps_values_and_unlocks() {
        let mut state = filled_state();
        state.set_field(id(ManifoldId::P1, Field::PickerRate), "50");
        state.set_sync_rates(true);
        state.set_sync_rates(false);

        assert_eq!(state.raw(id(ManifoldId::P2, Field::PickerRate)), "50");
        assert!(state.is_editable(id(ManifoldId::P2, Field::PickerRate)));

        state.set_field(id(ManifoldId::P2, Field::PickerRate), "7");
        assert_eq!(state.raw(id(ManifoldId::P2, Field::PickerRate)), "7");
        assert_eq!(state.raw(id(ManifoldId::P1, Field::PickerRate)), "50");
    }

    #[test]
    fn time_frame_locks_in_time_mode() {
        let mut state = filled_state();
        let time_frame = id(ManifoldId::P1, Field::TimeFrame);
        assert!(state.is_editable(time_frame));
        state.toggle_mode();
        assert_eq!(state.mode, Mode::Time);
        assert!(!state.is_editable(time_frame));
        state.toggle_mode();
        assert!(state.is_editable(time_frame));
    }

    #[test]
    fn mode_switch_recalculates() {
        let mut state = filled_state();
        assert_eq!(state.aggregate().totals.active_manifolds, 3);

        state.mode = Mode::Time;
        let aggregation = state.aggregate();
        assert_eq!(aggregation.totals.active_manifolds, 0);
        assert_eq!(aggregation.outcome(ManifoldId::P1), &LineOutcome::Awaiting);

        for manifold in ManifoldId::ALL {
            state.set_field(id(manifold, Field::AvailablePickers), "4");
            state.set_field(id(manifold, Field::AvailablePalletizers), "2");
        }
        let totals = state.aggregate().totals;
        assert_eq!(totals.active_manifolds, 3);
        assert_relative_eq!(totals.pickable_units, 300.0);
    }

    #[test]
    fn non_positive_inputs_are_flagged() {
        let mut state = AppState::default();
        let units = id(ManifoldId::P2, Field::TotalUnits);
        assert!(!state.is_flagged(units));
        state.set_field(units, "0");
        assert!(state.is_flagged(units));
        state.set_field(units, "-4");
        assert!(state.is_flagged(units));
        state.set_field(units, "12");
        assert!(!state.is_flagged(units));
    }

    #[test]
    fn persisted_settings_round_trip_exactly() {
        let mut state = filled_state();
        state.set_field(id(ManifoldId::P3, Field::NonPickable), "0012.500");
        state.set_sync_rates(true);
        state.mode = Mode::Time;
        state.theme = Theme::Forge;

        let persisted = state.to_persisted();
        assert_eq!(persisted.get("p3-non-pickable"), Some("0012.500"));
        assert_eq!(persisted.get(MODE_KEY), Some("false"));
        assert_eq!(persisted.get(SYNC_KEY), Some("true"));
        assert_eq!(persisted.get(THEME_KEY), Some("theme-forge"));

        let mut restored = AppState::default();
        restored.apply_persisted(persisted);
        assert_eq!(restored, state);
    }

    #[test]
    fn unknown_or_malformed_settings_are_skipped() {
        let mut persisted = PersistedSettings::default();
        persisted.insert("p9-total-units", "5");
        persisted.insert("legacy-field", "1");
        persisted.insert(MODE_KEY, "maybe");
        persisted.insert(THEME_KEY, "theme-neon");
        persisted.insert("p1-total-units", "42");

        let mut state = AppState::default();
        state.apply_persisted(persisted);
        assert_eq!(state.mode, Mode::Operatives);
        assert_eq!(state.theme, Theme::Cogitator);
        assert_eq!(state.raw(id(ManifoldId::P1, Field::TotalUnits)), "42");
    }
}
