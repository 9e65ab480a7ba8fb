/// Which quantity the calculator solves for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Fixed time-frame, solve for the number of operatives.
    #[default]
    Operatives,
    /// Fixed operatives, solve for the completion time.
    Time,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Operatives => Mode::Time,
            Mode::Time => Mode::Operatives,
        }
    }

    pub fn is_operatives(self) -> bool {
        matches!(self, Mode::Operatives)
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Operatives => "Calculate Operatives",
            Mode::Time => "Estimate Time",
        }
    }
}

/// One of the three fixed processing lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ManifoldId {
    P1,
    P2,
    P3,
}

impl ManifoldId {
    pub const ALL: [ManifoldId; 3] = [ManifoldId::P1, ManifoldId::P2, ManifoldId::P3];

    /// The line whose rates and costs are mirrored while sync is on.
    pub const PRIMARY: ManifoldId = ManifoldId::P1;

    pub fn index(self) -> usize {
        match self {
            ManifoldId::P1 => 0,
            ManifoldId::P2 => 1,
            ManifoldId::P3 => 2,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            ManifoldId::P1 => "p1",
            ManifoldId::P2 => "p2",
            ManifoldId::P3 => "p3",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ManifoldId::P1 => "Manifold I",
            ManifoldId::P2 => "Manifold II",
            ManifoldId::P3 => "Manifold III",
        }
    }

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.prefix() == prefix)
    }
}

/// Every numeric input a manifold carries.
///
/// Hourly cost and available headcount are separate fields; the form decides
/// which pair is shown for the current [`Mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    TotalUnits,
    NonPickable,
    TimeFrame,
    PickerRate,
    PalletizerRate,
    PickerCost,
    PalletizerCost,
    AvailablePickers,
    AvailablePalletizers,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::TotalUnits,
        Field::NonPickable,
        Field::TimeFrame,
        Field::PickerRate,
        Field::PalletizerRate,
        Field::PickerCost,
        Field::PalletizerCost,
        Field::AvailablePickers,
        Field::AvailablePalletizers,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::TotalUnits => "total-units",
            Field::NonPickable => "non-pickable",
            Field::TimeFrame => "time-frame",
            Field::PickerRate => "picker-rate",
            Field::PalletizerRate => "palletizer-rate",
            Field::PickerCost => "picker-cost",
            Field::PalletizerCost => "palletizer-cost",
            Field::AvailablePickers => "available-pickers",
            Field::AvailablePalletizers => "available-palletizers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Rate and worker fields that follow the primary manifold while sync is on.
    pub fn is_synced(self) -> bool {
        matches!(
            self,
            Field::PickerRate
                | Field::PalletizerRate
                | Field::PickerCost
                | Field::PalletizerCost
                | Field::AvailablePickers
                | Field::AvailablePalletizers
        )
    }

    /// Whether the field is shown on the form in `mode`.
    ///
    /// Headcounts only matter when solving for time; hourly costs are needed in both modes.
    pub fn is_visible(self, mode: Mode) -> bool {
        match self {
            Field::AvailablePickers | Field::AvailablePalletizers => !mode.is_operatives(),
            _ => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::TotalUnits => "Total Pickable Units:",
            Field::NonPickable => "Non-Pickable Units:",
            Field::TimeFrame => "Time Frame (Hours):",
            Field::PickerRate => "Picker Rate (Units/Hour):",
            Field::PalletizerRate => "Palletizer Rate (Units/Hour):",
            Field::PickerCost => "Picker Cost/Hour:",
            Field::PalletizerCost => "Palletizer Cost/Hour:",
            Field::AvailablePickers => "Available Pickers:",
            Field::AvailablePalletizers => "Available Palletizers:",
        }
    }
}

/// Address of one input on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub manifold: ManifoldId,
    pub field: Field,
}

impl FieldId {
    pub fn new(manifold: ManifoldId, field: Field) -> Self {
        Self { manifold, field }
    }

    /// Settings key, e.g. `p2-picker-rate`.
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.manifold.prefix(), self.field.key())
    }

    pub fn from_storage_key(key: &str) -> Option<Self> {
        let (prefix, field) = key.split_once('-')?;
        Some(Self {
            manifold: ManifoldId::from_prefix(prefix)?,
            field: Field::from_key(field)?,
        })
    }
}

/// Parsed numeric inputs of one manifold.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineValues {
    pub total_units: f64,
    pub non_pickable_units: f64,
    /// Hours.
    pub time_frame: f64,
    /// Units per hour per picker.
    pub picker_rate: f64,
    /// Units per hour per palletizer.
    pub palletizer_rate: f64,
    /// Cost per hour per picker.
    pub picker_cost: f64,
    /// Cost per hour per palletizer.
    pub palletizer_cost: f64,
    pub available_pickers: f64,
    pub available_palletizers: f64,
}

impl LineValues {
    pub fn total_workload(&self) -> f64 {
        self.total_units + self.non_pickable_units
    }

    /// Whether the line carries enough information to be calculated in `mode`.
    ///
    /// Every divisor the engine uses is strictly positive once this holds.
    pub fn is_valid(&self, mode: Mode) -> bool {
        let common = self.total_units > 0.0 && self.picker_rate > 0.0 && self.palletizer_rate > 0.0;
        let mode_specific = match mode {
            Mode::Operatives => self.time_frame > 0.0,
            Mode::Time => self.available_pickers > 0.0 && self.available_palletizers > 0.0,
        };
        common && mode_specific
    }
}

/// Lenient numeric read of a form value; anything unparseable counts as zero.
pub fn parse_field(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
