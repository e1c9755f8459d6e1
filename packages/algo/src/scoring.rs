//! Candidate Scorer - priority scores for ranked skill selection.
//!
//! Lower score = higher priority. The score blends weakness (`1 - strength`)
//! with urgency: due items get a fixed boost, not-yet-due items a penalty
//! growing with hours until due, capped at [`NOT_DUE_PENALTY_MAX`].
//!
//! The boost is a bias, not a partition: a very strong, just-due skill can
//! still rank behind a very weak, soon-due one. That blend is intentional.

use chrono::{DateTime, Utc};

use crate::types::{DUE_BOOST, NOT_DUE_HORIZON_HOURS, NOT_DUE_PENALTY_MAX};

/// A skill is due when it was never scheduled or its review instant arrived.
pub fn is_due(next_due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    next_due.map_or(true, |due| due <= now)
}

/// Priority score for one candidate skill; lower means practice sooner.
pub fn score_candidate(
    is_due: bool,
    strength: f64,
    next_due: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> f64 {
    let base = 1.0 - strength;

    if is_due {
        return base - DUE_BOOST;
    }

    match next_due {
        Some(due) => {
            let hours_until_due = (due - now).num_seconds() as f64 / 3600.0;
            base + (hours_until_due / NOT_DUE_HORIZON_HOURS).clamp(0.0, NOT_DUE_PENALTY_MAX)
        }
        // Unreachable given the is_due definition, kept as a guard.
        None => base + NOT_DUE_PENALTY_MAX,
    }
}
