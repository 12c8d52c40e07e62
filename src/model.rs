use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantSize {
    Small,
    Medium,
    Large,
}

impl PlantSize {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlantSize::Small => "small",
            PlantSize::Medium => "medium",
            PlantSize::Large => "large",
        }
    }
}

/// `JustAdded` is a legacy value still present in older saves; new
/// plants are created with one of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantCondition {
    Healthy,
    NeedsAttention,
    Struggling,
    JustAdded,
}

impl PlantCondition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlantCondition::Healthy => "healthy",
            PlantCondition::NeedsAttention => "needs-attention",
            PlantCondition::Struggling => "struggling",
            PlantCondition::JustAdded => "just-added",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightLevel {
    Low,
    Medium,
    BrightIndirect,
    Direct,
}

impl LightLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LightLevel::Low => "low",
            LightLevel::Medium => "medium",
            LightLevel::BrightIndirect => "bright-indirect",
            LightLevel::Direct => "direct",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomTemperature {
    Cold,
    Cool,
    Moderate,
    Warm,
    Hot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowDirection {
    North,
    South,
    East,
    West,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HumidityLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoilMoisture {
    BoneDry,
    Dry,
    SlightlyMoist,
    Moist,
    Wet,
    Soggy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafCondition {
    Healthy,
    Drooping,
    Yellowing,
    BrownTips,
    BrownEdges,
    Spotted,
    Crispy,
    Wilting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckInAction {
    Watered,
    Fertilized,
    Rotated,
    Misted,
    Pruned,
    Repotted,
    Nothing,
}

/// Urgency label derived per plant; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantStatus {
    NeedsAttention,
    CheckSoon,
    RecentlyChecked,
    MayHaveIssue,
}

impl PlantStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlantStatus::NeedsAttention => "needs-attention",
            PlantStatus::CheckSoon => "check-soon",
            PlantStatus::RecentlyChecked => "recently-checked",
            PlantStatus::MayHaveIssue => "may-have-issue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoilPreference {
    Dry,
    SlightlyMoist,
    Moist,
    Wet,
}

/// A tracked plant. Either `species_id` points into the static catalog,
/// or `is_custom` is set and the `custom_*` fields carry inline care
/// data. `date_added` is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species_id: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    pub custom_name: String,
    pub room_id: String,
    pub size: PlantSize,
    pub condition: PlantCondition,
    pub date_added: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_scientific_name: Option<String>,
    /// Days between checks, not waterings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_check_frequency: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_light_level: Option<LightLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_care_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_leaf_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_leaf_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_growth_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_special_features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Actual light in this room, not a species requirement.
    pub light_level: LightLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_direction: Option<WindowDirection>,
    pub temperature: RoomTemperature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<HumidityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One observation event. Append-only; `date` is set at creation and
/// never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: String,
    pub plant_id: String,
    pub date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<SoilMoisture>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leaf_condition: Vec<LeafCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub actions_taken: Vec<CheckInAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub field: String,
    pub old_value: String,
    pub new_value: String,
}

/// One update event, holding every field diff that update produced.
/// Append-only, written only when a plant update changed something.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRecord {
    pub id: String,
    pub plant_id: String,
    pub date: i64,
    pub changes: Vec<FieldChange>,
}

/// Inline care data for plants that are not in the catalog.
#[derive(Debug, Clone, Default)]
pub struct CustomCare {
    pub scientific_name: Option<String>,
    pub check_frequency: Option<i64>,
    pub light_level: Option<LightLevel>,
    pub care_notes: Option<String>,
    pub leaf_shape: Option<String>,
    pub leaf_size: Option<String>,
    pub growth_pattern: Option<String>,
    pub special_features: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum PlantOrigin {
    Catalog { species_id: String },
    Custom(CustomCare),
}

#[derive(Debug, Clone)]
pub struct PlantInput {
    pub custom_name: String,
    pub room_id: String,
    pub size: PlantSize,
    pub condition: PlantCondition,
    pub origin: PlantOrigin,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

/// Partial update for a plant. `None` leaves a field untouched; for
/// optional fields the inner `Option` distinguishes setting a value
/// from clearing it. Identity fields and the catalog/custom split are
/// not updatable.
#[derive(Debug, Clone, Default)]
pub struct PlantUpdate {
    pub custom_name: Option<String>,
    pub room_id: Option<String>,
    pub size: Option<PlantSize>,
    pub condition: Option<PlantCondition>,
    pub custom_scientific_name: Option<Option<String>>,
    pub custom_check_frequency: Option<Option<i64>>,
    pub custom_light_level: Option<Option<LightLevel>>,
    pub custom_care_notes: Option<Option<String>>,
    pub custom_leaf_shape: Option<Option<String>>,
    pub custom_leaf_size: Option<Option<String>>,
    pub custom_growth_pattern: Option<Option<String>>,
    pub custom_special_features: Option<Vec<String>>,
    pub notes: Option<Option<String>>,
    pub photo_url: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct CheckInInput {
    pub plant_id: String,
    pub soil_moisture: Option<SoilMoisture>,
    pub leaf_condition: Vec<LeafCondition>,
    pub actions_taken: Vec<CheckInAction>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RoomInput {
    pub name: String,
    pub light_level: LightLevel,
    pub temperature: RoomTemperature,
    pub window_direction: Option<WindowDirection>,
    pub humidity: Option<HumidityLevel>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RoomUpdate {
    pub name: Option<String>,
    pub light_level: Option<LightLevel>,
    pub temperature: Option<RoomTemperature>,
    pub window_direction: Option<Option<WindowDirection>>,
    pub humidity: Option<Option<HumidityLevel>>,
    pub notes: Option<Option<String>>,
}
