//! Practice Plan Composer - ranks a learner's skills and assembles a bounded
//! due/weak practice plan with new-skill suggestions and a scenario prompt.
//!
//! The composition is a pure, total function over its inputs apart from the
//! `limit` validation: an empty skill list yields empty due/weak buckets and
//! only the new-skill suggestions.

use std::collections::HashSet;

use thiserror::Error;

use chrono::{DateTime, Utc};

use crate::scenarios::{scenario_prompt, suggested_skills};
use crate::scoring::{is_due, score_candidate};
use crate::types::{
    PracticePlan, RankedCandidate, SkillOut, SkillState, MAX_NEW_SKILLS, MIN_CANDIDATE_WINDOW,
    PLAN_LIMIT_MAX, PLAN_LIMIT_MIN,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("limit must be between {PLAN_LIMIT_MIN} and {PLAN_LIMIT_MAX}, got {0}")]
    InvalidLimit(usize),
}

/// Compose a practice plan from a learner's skills.
///
/// `skills` is the full (skill id, state) collection for one learner; its
/// enumeration order is the tie-break for equal scores. `now` must be the
/// single clock reading for this planning request.
pub fn compose_plan(
    skills: &[(String, SkillState)],
    limit: usize,
    context: &str,
    now: DateTime<Utc>,
) -> Result<PracticePlan, PlanError> {
    if !(PLAN_LIMIT_MIN..=PLAN_LIMIT_MAX).contains(&limit) {
        return Err(PlanError::InvalidLimit(limit));
    }

    let mut ranked: Vec<(RankedCandidate, usize)> = skills
        .iter()
        .enumerate()
        .map(|(index, (skill_id, state))| {
            let due = is_due(state.next_due, now);
            let candidate = RankedCandidate {
                score: score_candidate(due, state.strength, state.next_due, now),
                is_due: due,
                skill_id: skill_id.clone(),
                strength: state.strength,
                next_due: state.next_due,
            };
            (candidate, index)
        })
        .collect();

    // Stable sort keeps input order on score ties.
    ranked.sort_by(|a, b| a.0.score.total_cmp(&b.0.score));

    let mut due = Vec::new();
    let mut weak = Vec::new();

    for (candidate, index) in ranked.iter().take(limit.max(MIN_CANDIDATE_WINDOW)) {
        let state = &skills[*index].1;
        let out = SkillOut {
            skill_id: candidate.skill_id.clone(),
            strength: candidate.strength,
            next_due: candidate.next_due,
            streak: state.streak,
            mistakes: state.mistakes,
        };

        // Hard caps: the weak bucket only gets what the due bucket left over.
        if candidate.is_due && due.len() < limit {
            due.push(out);
        } else if !candidate.is_due && weak.len() < limit.saturating_sub(due.len()) {
            weak.push(out);
        }
    }

    let existing: HashSet<&str> = skills.iter().map(|(skill_id, _)| skill_id.as_str()).collect();
    let new: Vec<String> = suggested_skills(context)
        .iter()
        .filter(|suggestion| !existing.contains(**suggestion))
        .take(MAX_NEW_SKILLS)
        .map(|suggestion| suggestion.to_string())
        .collect();

    Ok(PracticePlan {
        due,
        weak,
        new,
        scenario_prompt: scenario_prompt(context).to_string(),
    })
}
