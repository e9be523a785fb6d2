//! Plan data model
//!
//! Types for the JSON structure the model is asked to return, plus the
//! [`PlanDocument`] value handed to the PDF report renderer.

use serde::{Deserialize, Serialize};

/// One day of the diet schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRow {
    pub day: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// One day of the workout schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRow {
    pub day: String,
    pub workout: String,
    pub duration: String,
    pub intensity: String,
}

/// Daily macro targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_grams: u32,
    pub carbs_grams: u32,
    pub fats_grams: u32,
    pub daily_calories: u32,
}

/// WHO guideline compliance assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAnalysis {
    /// Score string such as "8/10"
    pub score: String,
    pub feedback: String,
}

/// Complete parsed model response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPlan {
    #[serde(default)]
    pub overview: Vec<String>,
    pub macros: Macros,
    pub who_analysis: WhoAnalysis,
    #[serde(default)]
    pub diet: Vec<DietRow>,
    #[serde(default)]
    pub workout: Vec<WorkoutRow>,
}

/// A dated plan as kept in the session history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Generation date, `%Y-%m-%d`
    pub generated: String,
    pub plan: HealthPlan,
}

/// Input boundary of the report renderer.
///
/// Only the sections that appear in the PDF. Macro and WHO data stay on
/// the terminal surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDocument {
    pub generated_date: String,
    pub overview: Vec<String>,
    pub diet_rows: Vec<DietRow>,
    pub workout_rows: Vec<WorkoutRow>,
}

impl From<&PlanRecord> for PlanDocument {
    fn from(record: &PlanRecord) -> Self {
        PlanDocument {
            generated_date: record.generated.clone(),
            overview: record.plan.overview.clone(),
            diet_rows: record.plan.diet.clone(),
            workout_rows: record.plan.workout.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> HealthPlan {
        HealthPlan {
            overview: vec!["Drink water".to_string()],
            macros: Macros {
                protein_grams: 120,
                carbs_grams: 200,
                fats_grams: 60,
                daily_calories: 1900,
            },
            who_analysis: WhoAnalysis {
                score: "8/10".to_string(),
                feedback: "Balanced".to_string(),
            },
            diet: vec![DietRow {
                day: "Mon".to_string(),
                breakfast: "Idli".to_string(),
                lunch: "Rice".to_string(),
                dinner: "Dosa".to_string(),
            }],
            workout: vec![WorkoutRow {
                day: "Mon".to_string(),
                workout: "Walk".to_string(),
                duration: "30 min".to_string(),
                intensity: "Low".to_string(),
            }],
        }
    }

    #[test]
    fn test_plan_json_round_trip() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: HealthPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }

    #[test]
    fn test_plan_parses_without_optional_sections() {
        // The model occasionally omits list sections; they default to empty
        let json = r#"{
            "macros": {"protein_grams": 1, "carbs_grams": 2, "fats_grams": 3, "daily_calories": 4},
            "who_analysis": {"score": "7/10", "feedback": "ok"}
        }"#;
        let plan: HealthPlan = serde_json::from_str(json).unwrap();
        assert!(plan.overview.is_empty());
        assert!(plan.diet.is_empty());
        assert!(plan.workout.is_empty());
    }

    #[test]
    fn test_plan_document_from_record() {
        let record = PlanRecord {
            generated: "2026-08-29".to_string(),
            plan: sample_plan(),
        };
        let doc = PlanDocument::from(&record);
        assert_eq!(doc.generated_date, "2026-08-29");
        assert_eq!(doc.diet_rows.len(), 1);
        assert_eq!(doc.workout_rows.len(), 1);
        assert_eq!(doc.overview, vec!["Drink water".to_string()]);
    }
}
