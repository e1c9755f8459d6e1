//! Update Engine - the per-skill mastery/interval transition.
//!
//! One observation with quality q in [0, 5] maps an old [`SkillState`] to a
//! new one:
//!
//! - q < 3 (failure): strength -= 0.15, ease -= 0.15, interval resets to 1
//!   day and the skill comes back after an 8 hour retry window
//! - q >= 3 (success): ease follows the SM-2 adjustment
//!   `ease += 0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)`, the first successful
//!   repetition jumps to a 2 day interval, later ones grow by the ease
//!   multiplier, and strength gains `(0.08 + 0.02 * (q - 3)) * (1 - strength)`
//!
//! Strength stays in [0, 1] and ease in [1.3, 2.7] after every transition.

use chrono::{DateTime, Duration, Utc};

use crate::types::{
    SkillState, EASE_MAX, EASE_MIN, FAILURE_RETRY_HOURS, QUALITY_MAX, QUALITY_MIN,
};

/// Apply one graded observation to a skill's scheduling state.
///
/// `quality` outside [0, 5] is clamped, not rejected. `now` must be the single
/// clock reading for this logical operation; `last_seen` is always set to it.
pub fn update_skill(state: &SkillState, quality: i32, now: DateTime<Utc>) -> SkillState {
    let q = (quality as f64).clamp(QUALITY_MIN, QUALITY_MAX);
    let mut next = state.clone();

    if q < 3.0 {
        // Failure: degrade mastery and ease, schedule a quick retry.
        next.mistakes += 1;
        next.streak = 0;
        next.strength = (next.strength - 0.15).clamp(0.0, 1.0);
        next.ease = (next.ease - 0.15).clamp(EASE_MIN, EASE_MAX);
        next.interval_days = 1;
        next.next_due = Some(now + Duration::hours(FAILURE_RETRY_HOURS));
    } else {
        next.streak += 1;

        // SM-2 style ease adjustment; a bare pass (q=3) still lowers ease.
        next.ease =
            (next.ease + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02))).clamp(EASE_MIN, EASE_MAX);

        // First successful repetition always lands on 2 days.
        if next.interval_days <= 1 {
            next.interval_days = 2;
        } else {
            next.interval_days = (next.interval_days as f64 * next.ease).round() as i64;
        }

        // Asymptotic approach to full mastery.
        let gain = 0.08 + 0.02 * (q - 3.0);
        next.strength = (next.strength + gain * (1.0 - next.strength)).clamp(0.0, 1.0);

        // The interval recurrence is unbounded; a long streak can push it
        // past what a DateTime can represent, so saturate instead of
        // overflowing.
        next.next_due = Some(
            Duration::try_days(next.interval_days)
                .and_then(|delta| now.checked_add_signed(delta))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        );
    }

    next.last_seen = Some(now);
    next
}
