//! Next-check scheduling. Pure functions over a plant and its check-in
//! history; callers pass state in, nothing here reads the clock.

use crate::catalog;
use crate::model::{CheckIn, Plant};
use crate::time::{days_between, MS_PER_DAY};

/// Fallback when neither a custom frequency nor a catalog entry
/// resolves.
pub const DEFAULT_CHECK_FREQUENCY: i64 = 7;

/// Days between checks for a plant: the inline value for custom
/// plants, the catalog value otherwise, 7 when neither resolves.
#[must_use]
pub fn effective_check_frequency(plant: &Plant) -> i64 {
    if plant.is_custom {
        plant
            .custom_check_frequency
            .unwrap_or(DEFAULT_CHECK_FREQUENCY)
    } else {
        plant
            .species_id
            .as_deref()
            .and_then(catalog::find)
            .map(|species| species.check_frequency_days)
            .unwrap_or(DEFAULT_CHECK_FREQUENCY)
    }
}

/// Anchor for schedule math: the most recent check-in, or `date_added`
/// when the plant has never been checked. `check_ins` must be sorted
/// descending by date.
#[must_use]
pub fn base_date(plant: &Plant, check_ins: &[CheckIn]) -> i64 {
    check_ins.first().map_or(plant.date_added, |c| c.date)
}

#[must_use]
pub fn next_check_date(plant: &Plant, check_ins: &[CheckIn], frequency_days: i64) -> i64 {
    base_date(plant, check_ins) + frequency_days * MS_PER_DAY
}

/// A plant is due once its next check date has arrived.
#[must_use]
pub fn is_due(plant: &Plant, check_ins: &[CheckIn], frequency_days: i64, now: i64) -> bool {
    next_check_date(plant, check_ins, frequency_days) <= now
}

/// Whole days since the base date, floored.
#[must_use]
pub fn days_since_base(plant: &Plant, check_ins: &[CheckIn], now: i64) -> i64 {
    days_between(base_date(plant, check_ins), now)
}
