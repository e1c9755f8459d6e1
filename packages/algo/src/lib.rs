//! # tutor-algo - Adaptive practice scheduling for a conversational language tutor
//!
//! This crate provides the pure scheduling core:
//!
//! - **Update Engine** - SM-2 style per-skill mastery/interval transition
//! - **Candidate Scorer** - due/weak prioritization (lower score = higher priority)
//! - **Practice Plan Composer** - turns ranked skills into a bounded practice plan
//! - **Scenario tables** - static per-context prompts and new-skill suggestions
//!
//! Design goals:
//!
//! - **Pure** - no I/O, no clock reads; the caller supplies `now` once per
//!   logical operation and every instant is `chrono::DateTime<Utc>`
//! - **Total** - never fails on well-typed input apart from an out-of-range
//!   plan limit; out-of-range quality scores are clamped, not rejected
//! - **Deterministic** - stable tie ordering, static lookup tables
//!
//! ## Module structure
//!
//! - [`types`] - skill state, plan read-models, shared constants
//! - [`scheduler`] - the update transition
//! - [`scoring`] - candidate priority scores
//! - [`plan`] - plan composition under list-size limits
//! - [`scenarios`] - static scenario/vocabulary lookup tables
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use tutor_algo::{compose_plan, update_skill, SkillState};
//!
//! let now = Utc::now();
//! let state = update_skill(&SkillState::default(), 5, now);
//! assert_eq!(state.interval_days, 2);
//!
//! let skills = vec![("phrase:check_in".to_string(), state)];
//! let plan = compose_plan(&skills, 6, "Airport", now).unwrap();
//! assert!(plan.new.len() <= 3);
//! ```

pub mod plan;
pub mod scenarios;
pub mod scheduler;
pub mod scoring;
pub mod types;

pub use plan::{compose_plan, PlanError};
pub use scenarios::{scenario_prompt, suggested_skills};
pub use scheduler::update_skill;
pub use scoring::{is_due, score_candidate};
pub use types::*;
