//! Unified per-plant activity feed: creation, check-ins, and edits
//! merged into one descending-chronological list. Rebuilt on every
//! read, never persisted.

use serde::Serialize;

use crate::model::{CheckIn, EditRecord, Plant};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HistoryEntry {
    Created { date: i64 },
    CheckIn { data: CheckIn },
    Edit { data: EditRecord },
}

impl HistoryEntry {
    #[must_use]
    pub fn effective_date(&self) -> i64 {
        match self {
            HistoryEntry::Created { date } => *date,
            HistoryEntry::CheckIn { data } => data.date,
            HistoryEntry::Edit { data } => data.date,
        }
    }
}

/// Merges one `created` entry, all check-ins, and all edit records
/// into a feed sorted descending by effective date. The sort is
/// stable, so same-date entries keep insertion order (created, then
/// check-ins, then edits).
#[must_use]
pub fn build(plant: &Plant, check_ins: &[CheckIn], edits: &[EditRecord]) -> Vec<HistoryEntry> {
    let mut feed = Vec::with_capacity(1 + check_ins.len() + edits.len());
    feed.push(HistoryEntry::Created {
        date: plant.date_added,
    });
    feed.extend(
        check_ins
            .iter()
            .cloned()
            .map(|data| HistoryEntry::CheckIn { data }),
    );
    feed.extend(edits.iter().cloned().map(|data| HistoryEntry::Edit { data }));
    feed.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
    feed
}

/// Human label for a diffed field key, for hosts rendering edit
/// entries. Unmapped keys fall through unchanged.
#[must_use]
pub fn field_display_name(field: &str) -> &str {
    match field {
        "customName" => "Name",
        "roomId" => "Location",
        "size" => "Size",
        "condition" => "Condition",
        "notes" => "Notes",
        "photoUrl" => "Photo",
        _ => field,
    }
}
