//! Symptom-to-solution matching. Compares the most recent check-in
//! against the species' common-issue table; custom plants have no
//! table, so they never match.

use crate::catalog::{self, CommonIssue};
use crate::model::{CheckIn, LeafCondition, Plant, SoilMoisture};

/// Issues from the plant's species table whose symptom text lines up
/// with the latest observations. Each table entry is evaluated once,
/// so the result carries no duplicates.
#[must_use]
pub fn relevant_issues(plant: &Plant, last_check_in: Option<&CheckIn>) -> Vec<&'static CommonIssue> {
    if plant.is_custom {
        return Vec::new();
    }
    let Some(species) = plant.species_id.as_deref().and_then(catalog::find) else {
        return Vec::new();
    };
    let Some(check_in) = last_check_in else {
        return Vec::new();
    };

    species
        .common_issues
        .iter()
        .filter(|issue| issue_applies(issue, check_in))
        .collect()
}

fn issue_applies(issue: &CommonIssue, check_in: &CheckIn) -> bool {
    let symptom = issue.symptom.to_lowercase();

    // Waterlogged soil points at the rot/yellowing family of symptoms.
    if matches!(
        check_in.soil_moisture,
        Some(SoilMoisture::Soggy) | Some(SoilMoisture::Wet)
    ) && ["yellow", "mushy", "rot"]
        .iter()
        .any(|keyword| symptom.contains(keyword))
    {
        return true;
    }

    check_in
        .leaf_condition
        .iter()
        .any(|leaf| leaf_matches(*leaf, &symptom))
}

fn leaf_matches(leaf: LeafCondition, symptom: &str) -> bool {
    match leaf {
        LeafCondition::Yellowing => symptom.contains("yellow"),
        LeafCondition::BrownTips => symptom.contains("brown") && symptom.contains("tip"),
        LeafCondition::BrownEdges => symptom.contains("brown") && symptom.contains("edge"),
        LeafCondition::Drooping => symptom.contains("droop"),
        LeafCondition::Wilting => symptom.contains("wilt"),
        LeafCondition::Spotted => symptom.contains("spot"),
        LeafCondition::Crispy => symptom.contains("crisp") || symptom.contains("dry"),
        LeafCondition::Healthy => false,
    }
}
