//! Prompt construction for the nutritionist persona
//!
//! One deterministic prompt per profile. The model is told to answer with
//! JSON only; `engine::parser` copes with the fences it adds anyway.

use crate::profile::UserProfile;

/// Build the plan generation prompt for a profile
pub fn build_prompt(profile: &UserProfile) -> String {
    format!(
        r#"Act as a professional Nutritionist. Return ONLY valid JSON.
PROFILE: Age: {age}, BMI: {bmi}, Activity: {activity}, Diet: {diet}, Goal: {goal}
CONSTRAINTS: Budget: {budget}, Cuisine: {cuisine}.
JSON Structure:
{{
  "overview": ["tip1", "tip2", "tip3"],
  "macros": {{ "protein_grams": 0, "carbs_grams": 0, "fats_grams": 0, "daily_calories": 0 }},
  "who_analysis": {{ "score": "8/10", "feedback": "Brief WHO analysis." }},
  "diet": [ {{"day":"Mon", "breakfast":"...", "lunch":"...", "dinner":"..."}}, ... ],
  "workout": [ {{"day":"Mon", "workout":"...", "duration":"...", "intensity":"..."}}, ... ]
}}"#,
        age = profile.age,
        bmi = profile.bmi(),
        activity = profile.activity,
        diet = profile.diet,
        goal = profile.goal,
        budget = profile.budget,
        cuisine = profile.cuisine,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, BudgetTier, DietType, Goal};

    fn profile() -> UserProfile {
        UserProfile {
            age: 22,
            height_cm: 170,
            weight_kg: 65,
            activity: ActivityLevel::Active,
            diet: DietType::Vegan,
            goal: Goal::MuscleGain,
            budget: BudgetTier::Premium,
            cuisine: "Continental".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_profile_values() {
        let prompt = build_prompt(&profile());
        assert!(prompt.contains("Age: 22"));
        assert!(prompt.contains("BMI: 22.49"));
        assert!(prompt.contains("Activity: Active"));
        assert!(prompt.contains("Diet: Vegan"));
        assert!(prompt.contains("Goal: Muscle Gain"));
        assert!(prompt.contains("Budget: Premium"));
        assert!(prompt.contains("Cuisine: Continental"));
    }

    #[test]
    fn test_prompt_declares_schema_sections() {
        let prompt = build_prompt(&profile());
        for key in ["overview", "macros", "who_analysis", "diet", "workout"] {
            assert!(prompt.contains(key), "missing section {}", key);
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&profile()), build_prompt(&profile()));
    }
}
