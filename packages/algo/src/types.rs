//! Common types and constants shared across the scheduler modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Lowest accepted quality score
pub const QUALITY_MIN: f64 = 0.0;

/// Highest accepted quality score
pub const QUALITY_MAX: f64 = 5.0;

/// Ease multiplier floor
pub const EASE_MIN: f64 = 1.3;

/// Ease multiplier ceiling
pub const EASE_MAX: f64 = 2.7;

/// Retry window after a failed observation (hours)
pub const FAILURE_RETRY_HOURS: i64 = 8;

/// Priority boost subtracted from the score of due items
pub const DUE_BOOST: f64 = 0.5;

/// Horizon over which the not-yet-due penalty ramps up (hours)
pub const NOT_DUE_HORIZON_HOURS: f64 = 72.0;

/// Cap on the not-yet-due penalty
pub const NOT_DUE_PENALTY_MAX: f64 = 2.0;

/// Smallest plan limit accepted by the composer
pub const PLAN_LIMIT_MIN: usize = 1;

/// Largest plan limit accepted by the composer
pub const PLAN_LIMIT_MAX: usize = 20;

/// The composer always considers at least this many ranked candidates
pub const MIN_CANDIDATE_WINDOW: usize = 10;

/// Maximum number of new-skill suggestions per plan
pub const MAX_NEW_SKILLS: usize = 3;

// ==================== Skill state ====================

/// Scheduling state for one (learner, skill) pair.
///
/// Mutated exclusively through [`crate::scheduler::update_skill`], once per
/// observation. `last_seen`/`next_due` stay `None` until the first
/// observation arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillState {
    /// Mastery estimate, clamped to [0, 1]
    pub strength: f64,
    /// Interval growth multiplier, clamped to [1.3, 2.7]
    pub ease: f64,
    /// Days until the next scheduled review, never below 1
    pub interval_days: i64,
    /// Last time this skill was exercised
    pub last_seen: Option<DateTime<Utc>>,
    /// When this skill should next be practiced
    pub next_due: Option<DateTime<Utc>>,
    /// Consecutive successful observations
    pub streak: u32,
    /// Lifetime count of failed observations
    pub mistakes: u32,
}

impl Default for SkillState {
    fn default() -> Self {
        Self {
            strength: 0.3,
            ease: 2.0,
            interval_days: 1,
            last_seen: None,
            next_due: None,
            streak: 0,
            mistakes: 0,
        }
    }
}

/// One graded interaction result for a skill, produced by an external
/// observer. Consumed exactly once by the update engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub skill_id: String,
    /// Quality grade 0..=5; out-of-range values are clamped on use
    pub quality: i32,
}

// ==================== Plan read-models ====================

/// A scored skill, computed fresh on every planning request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub score: f64,
    pub is_due: bool,
    pub skill_id: String,
    pub strength: f64,
    pub next_due: Option<DateTime<Utc>>,
}

/// Per-skill read-model exposed in a practice plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillOut {
    pub skill_id: String,
    pub strength: f64,
    pub next_due: Option<DateTime<Utc>>,
    pub streak: u32,
    pub mistakes: u32,
}

/// Result of one planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticePlan {
    /// Skills whose review instant has arrived, strongest priority first
    pub due: Vec<SkillOut>,
    /// Not-yet-due skills worth reinforcing
    pub weak: Vec<SkillOut>,
    /// Suggested new skill ids not yet tracked for this learner
    pub new: Vec<String>,
    /// Conversation opener for the requested context
    pub scenario_prompt: String,
}

// ==================== Tests ====================
