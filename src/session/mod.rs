//! Session manager for plan history and journey tracking
//!
//! Keeps the plans generated in this run plus the user's journey progress
//! so repeated generations can show how far along the program they are.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::plan::PlanRecord;

/// Maximum number of plans to keep in history
const MAX_HISTORY_SIZE: usize = 32;

/// Length of the journey in weeks
pub const JOURNEY_WEEKS: u32 = 12;

/// Session manager maintaining generation state
///
/// Tracks:
/// - Plan history (bounded to MAX_HISTORY_SIZE, FIFO eviction)
/// - Journey progress in weeks (clamped to JOURNEY_WEEKS)
/// - Session metadata
pub struct SessionManager {
    history: VecDeque<PlanRecord>,
    progress_weeks: u32,
    session_start: u64,
    plan_count: usize,
}

impl SessionManager {
    pub fn new() -> Self {
        let session_start = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        SessionManager {
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
            progress_weeks: 0,
            session_start,
            plan_count: 0,
        }
    }

    /// Record a generated plan, evicting the oldest at capacity
    pub fn record_plan(&mut self, record: PlanRecord) {
        if self.history.len() >= MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(record);
        self.plan_count += 1;
    }

    /// Most recently generated plan, if any
    pub fn latest(&self) -> Option<&PlanRecord> {
        self.history.back()
    }

    /// Plan history, newest first
    pub fn get_history(&self, limit: usize) -> Vec<&PlanRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    /// Set journey progress; values past the journey length are clamped
    pub fn set_progress(&mut self, weeks: u32) {
        self.progress_weeks = weeks.min(JOURNEY_WEEKS);
    }

    pub fn progress(&self) -> u32 {
        self.progress_weeks
    }

    /// Clear session state
    pub fn reset(&mut self) {
        self.history.clear();
        self.progress_weeks = 0;
        self.plan_count = 0;
        self.session_start = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
    }

    /// Total plans generated, including evicted ones
    pub fn plan_count(&self) -> usize {
        self.plan_count
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Session duration in seconds
    pub fn session_duration(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(self.session_start);
        now.saturating_sub(self.session_start)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{HealthPlan, Macros, WhoAnalysis};

    fn create_test_record(date: &str) -> PlanRecord {
        PlanRecord {
            generated: date.to_string(),
            plan: HealthPlan {
                overview: vec!["Stay hydrated".to_string()],
                macros: Macros {
                    protein_grams: 120,
                    carbs_grams: 200,
                    fats_grams: 60,
                    daily_calories: 1900,
                },
                who_analysis: WhoAnalysis {
                    score: "8/10".to_string(),
                    feedback: "Well balanced".to_string(),
                },
                diet: vec![],
                workout: vec![],
            },
        }
    }

    #[test]
    fn test_session_creation() {
        let session = SessionManager::new();
        assert_eq!(session.plan_count(), 0);
        assert_eq!(session.history_len(), 0);
        assert_eq!(session.progress(), 0);
        assert!(session.latest().is_none());
    }

    #[test]
    fn test_record_plan() {
        let mut session = SessionManager::new();
        session.record_plan(create_test_record("2026-08-29"));

        assert_eq!(session.plan_count(), 1);
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.latest().unwrap().generated, "2026-08-29");
    }

    #[test]
    fn test_history_bounded() {
        let mut session = SessionManager::new();
        for i in 0..40 {
            session.record_plan(create_test_record(&format!("day-{}", i)));
        }

        assert_eq!(session.history_len(), MAX_HISTORY_SIZE);
        assert_eq!(session.plan_count(), 40);
        // oldest entries evicted first
        assert_eq!(session.latest().unwrap().generated, "day-39");
        let oldest = session.get_history(MAX_HISTORY_SIZE);
        assert_eq!(oldest.last().unwrap().generated, "day-8");
    }

    #[test]
    fn test_get_history_newest_first() {
        let mut session = SessionManager::new();
        for i in 0..5 {
            session.record_plan(create_test_record(&format!("day-{}", i)));
        }

        let history = session.get_history(3);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].generated, "day-4");
        assert_eq!(history[2].generated, "day-2");
    }

    #[test]
    fn test_progress_clamped() {
        let mut session = SessionManager::new();
        session.set_progress(5);
        assert_eq!(session.progress(), 5);

        session.set_progress(99);
        assert_eq!(session.progress(), JOURNEY_WEEKS);
    }

    #[test]
    fn test_reset() {
        let mut session = SessionManager::new();
        session.record_plan(create_test_record("2026-08-29"));
        session.set_progress(4);

        session.reset();

        assert_eq!(session.plan_count(), 0);
        assert_eq!(session.history_len(), 0);
        assert_eq!(session.progress(), 0);
    }

    #[test]
    fn test_session_duration() {
        let session = SessionManager::new();
        assert!(session.session_duration() < 5);
    }
}
