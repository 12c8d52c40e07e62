//! Urgency classification. Overdue thresholds are checked before the
//! leaf-pattern heuristic; the order is load-bearing.

use crate::model::{CheckIn, LeafCondition, Plant, PlantStatus};
use crate::schedule;

/// Leaf observations that count toward the "may have issue" pattern.
pub const CONCERNING_LEAF: [LeafCondition; 6] = [
    LeafCondition::Yellowing,
    LeafCondition::BrownTips,
    LeafCondition::BrownEdges,
    LeafCondition::Spotted,
    LeafCondition::Crispy,
    LeafCondition::Wilting,
];

/// Classifies a plant given its check-in history (sorted descending by
/// date) and an effective check frequency in days.
///
/// 1. more than 1.5x the frequency since the base date: needs-attention
/// 2. at or past the frequency: check-soon
/// 3. under a day: recently-checked
/// 4. both of the last two check-ins show a concerning leaf condition:
///    may-have-issue
/// 5. otherwise recently-checked
#[must_use]
pub fn classify(
    plant: &Plant,
    check_ins_desc: &[CheckIn],
    frequency_days: i64,
    now: i64,
) -> PlantStatus {
    let days = schedule::days_since_base(plant, check_ins_desc, now);

    // Strict inequality: day 10 on a 7-day frequency is still check-soon.
    if days as f64 > frequency_days as f64 * 1.5 {
        return PlantStatus::NeedsAttention;
    }
    if days >= frequency_days {
        return PlantStatus::CheckSoon;
    }
    if days < 1 {
        return PlantStatus::RecentlyChecked;
    }

    if check_ins_desc.len() >= 2
        && check_ins_desc[..2].iter().all(has_concerning_leaf)
    {
        return PlantStatus::MayHaveIssue;
    }

    PlantStatus::RecentlyChecked
}

fn has_concerning_leaf(check_in: &CheckIn) -> bool {
    check_in
        .leaf_condition
        .iter()
        .any(|condition| CONCERNING_LEAF.contains(condition))
}
