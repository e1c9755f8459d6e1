//! In-memory store for skill, profile, and activity records.
//!
//! Stands in for the external persistence collaborator: it owns the
//! read-modify-write serialization for skill updates (the write lock is held
//! across load, update, and write-back, so concurrent observations for the
//! same (user, skill) record cannot race) and keeps per-user insertion order
//! so the composer's tie-break stays deterministic.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use tutor_algo::{update_skill, SkillState};

/// Full skill record as exposed by the skill listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SkillRecord {
    pub skill_id: String,
    pub strength: f64,
    pub ease: f64,
    pub interval_days: i64,
    pub last_seen: Option<DateTime<Utc>>,
    pub next_due: Option<DateTime<Utc>>,
    pub streak: u32,
    pub mistakes: u32,
}

impl SkillRecord {
    fn from_state(skill_id: &str, state: &SkillState) -> Self {
        Self {
            skill_id: skill_id.to_string(),
            strength: state.strength,
            ease: state.ease,
            interval_days: state.interval_days,
            last_seen: state.last_seen,
            next_due: state.next_due,
            streak: state.streak,
            mistakes: state.mistakes,
        }
    }
}

/// Learner profile settings.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub user_id: String,
    pub native_language: String,
    pub target_language: String,
    pub level: String,
    pub daily_minutes_goal: u32,
    pub weekly_minutes_goal: u32,
    pub focus_contexts: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields accepted on upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    #[serde(default = "default_language")]
    pub native_language: String,
    #[serde(default = "default_language")]
    pub target_language: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_daily_goal")]
    pub daily_minutes_goal: u32,
    #[serde(default = "default_weekly_goal")]
    pub weekly_minutes_goal: u32,
    #[serde(default = "default_focus_contexts")]
    pub focus_contexts: Vec<String>,
}

fn default_language() -> String {
    "English".to_string()
}

fn default_level() -> String {
    "Beginner".to_string()
}

fn default_daily_goal() -> u32 {
    10
}

fn default_weekly_goal() -> u32 {
    70
}

fn default_focus_contexts() -> Vec<String> {
    vec!["Airport".to_string(), "Restaurant".to_string()]
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            native_language: default_language(),
            target_language: default_language(),
            level: default_level(),
            daily_minutes_goal: default_daily_goal(),
            weekly_minutes_goal: default_weekly_goal(),
            focus_contexts: default_focus_contexts(),
        }
    }
}

#[derive(Debug, Clone)]
struct ActivityEntry {
    context: String,
    minutes: u32,
    turns: u32,
    ts: DateTime<Utc>,
}

/// Minute totals against the profile goals.
#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub user_id: String,
    pub today_minutes: u32,
    pub week_minutes: u32,
    pub daily_goal: u32,
    pub weekly_goal: u32,
    pub daily_pct: f64,
    pub weekly_pct: f64,
    pub last_activity: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct UserData {
    // Insertion-ordered; the plan composer's tie-break depends on it.
    skills: Vec<(String, SkillState)>,
    profile: Option<Profile>,
    activity: Vec<ActivityEntry>,
}

/// Lock-guarded per-user records.
#[derive(Default)]
pub struct SkillStore {
    users: RwLock<HashMap<String, UserData>>,
}

impl SkillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a user's skills in insertion order.
    pub fn skills_for(&self, user_id: &str) -> Vec<(String, SkillState)> {
        self.users
            .read()
            .get(user_id)
            .map(|data| data.skills.clone())
            .unwrap_or_default()
    }

    /// Apply one graded observation, creating the record with documented
    /// defaults on first contact. The write lock spans the whole
    /// read-modify-write.
    pub fn apply_observation(
        &self,
        user_id: &str,
        skill_id: &str,
        quality: i32,
        now: DateTime<Utc>,
    ) -> SkillRecord {
        let mut users = self.users.write();
        let data = users.entry(user_id.to_string()).or_default();

        if let Some((_, state)) = data.skills.iter_mut().find(|(id, _)| id == skill_id) {
            *state = update_skill(state, quality, now);
            return SkillRecord::from_state(skill_id, state);
        }

        let state = update_skill(&SkillState::default(), quality, now);
        let record = SkillRecord::from_state(skill_id, &state);
        data.skills.push((skill_id.to_string(), state));
        record
    }

    /// All skill records for a user, next_due ascending with never-scheduled
    /// skills first.
    pub fn list_records(&self, user_id: &str) -> Vec<SkillRecord> {
        let mut records: Vec<SkillRecord> = self
            .users
            .read()
            .get(user_id)
            .map(|data| {
                data.skills
                    .iter()
                    .map(|(id, state)| SkillRecord::from_state(id, state))
                    .collect()
            })
            .unwrap_or_default();

        records.sort_by(|a, b| match (a.next_due, b.next_due) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (Some(x), Some(y)) => x.cmp(&y),
        });
        records
    }

    /// Fetch a profile, creating it with defaults on first read.
    pub fn profile_for(&self, user_id: &str, now: DateTime<Utc>) -> Profile {
        let mut users = self.users.write();
        let data = users.entry(user_id.to_string()).or_default();

        data.profile
            .get_or_insert_with(|| build_profile(user_id, &ProfileInput::default(), now, now))
            .clone()
    }

    pub fn upsert_profile(
        &self,
        user_id: &str,
        input: &ProfileInput,
        now: DateTime<Utc>,
    ) -> Profile {
        let mut users = self.users.write();
        let data = users.entry(user_id.to_string()).or_default();

        let created_at = data.profile.as_ref().map(|p| p.created_at).unwrap_or(now);
        let profile = build_profile(user_id, input, created_at, now);
        data.profile = Some(profile.clone());
        profile
    }

    pub fn log_activity(
        &self,
        user_id: &str,
        context: &str,
        minutes: u32,
        turns: u32,
        now: DateTime<Utc>,
    ) {
        let mut users = self.users.write();
        let data = users.entry(user_id.to_string()).or_default();
        data.activity.push(ActivityEntry {
            context: context.to_string(),
            minutes,
            turns,
            ts: now,
        });
    }

    /// Today / rolling-7-day minute totals against the profile goals.
    /// Day boundaries are UTC; percentages cap at 1.0.
    pub fn progress(&self, user_id: &str, now: DateTime<Utc>) -> Progress {
        let profile = self.profile_for(user_id, now);

        let start_today = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc();
        let start_week = start_today - Duration::days(6);

        let users = self.users.read();
        let activity = users
            .get(user_id)
            .map(|data| data.activity.as_slice())
            .unwrap_or(&[]);

        let today_minutes: u32 = activity
            .iter()
            .filter(|entry| entry.ts >= start_today)
            .map(|entry| entry.minutes)
            .sum();
        let week_minutes: u32 = activity
            .iter()
            .filter(|entry| entry.ts >= start_week)
            .map(|entry| entry.minutes)
            .sum();
        let last_activity = activity.iter().map(|entry| entry.ts).max();

        Progress {
            user_id: user_id.to_string(),
            today_minutes,
            week_minutes,
            daily_goal: profile.daily_minutes_goal,
            weekly_goal: profile.weekly_minutes_goal,
            daily_pct: goal_pct(today_minutes, profile.daily_minutes_goal),
            weekly_pct: goal_pct(week_minutes, profile.weekly_minutes_goal),
            last_activity,
        }
    }
}

fn build_profile(
    user_id: &str,
    input: &ProfileInput,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        native_language: input.native_language.clone(),
        target_language: input.target_language.clone(),
        level: input.level.clone(),
        daily_minutes_goal: input.daily_minutes_goal,
        weekly_minutes_goal: input.weekly_minutes_goal,
        focus_contexts: input.focus_contexts.clone(),
        created_at,
        updated_at,
    }
}

fn goal_pct(minutes: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (minutes as f64 / goal as f64).min(1.0)
}
