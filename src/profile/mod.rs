//! Biometric profile
//!
//! Typed user inputs: biometrics, preferences and constraints, with
//! range validation before anything reaches the model.

use crate::errors::{PlanError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Moderate,
    Active,
}

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

/// Overall fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

/// Budget constraint tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum BudgetTier {
    Student,
    Standard,
    Premium,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
            DietType::Vegan => "Vegan",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Maintenance => "Maintenance",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BudgetTier::Student => "Student (Low Cost)",
            BudgetTier::Standard => "Standard",
            BudgetTier::Premium => "Premium",
        };
        write!(f, "{}", s)
    }
}

/// Validated user profile handed to the plan engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: u32,
    pub activity: ActivityLevel,
    pub diet: DietType,
    pub goal: Goal,
    pub budget: BudgetTier,
    pub cuisine: String,
}

/// Accepted biometric input ranges
pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const HEIGHT_RANGE: (u32, u32) = (120, 220);
pub const WEIGHT_RANGE: (u32, u32) = (30, 200);

impl UserProfile {
    /// Validate biometric ranges
    pub fn validate(&self) -> Result<()> {
        check_range("age", self.age, AGE_RANGE)?;
        check_range("height", self.height_cm, HEIGHT_RANGE)?;
        check_range("weight", self.weight_kg, WEIGHT_RANGE)?;
        if self.cuisine.trim().is_empty() {
            return Err(PlanError::ProfileError(
                "cuisine must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Body mass index, rounded to two decimals
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm as f64 / 100.0;
        let raw = self.weight_kg as f64 / (height_m * height_m);
        (raw * 100.0).round() / 100.0
    }
}

fn check_range(field: &str, value: u32, (lo, hi): (u32, u32)) -> Result<()> {
    if value < lo || value > hi {
        return Err(PlanError::ProfileError(format!(
            "{} {} out of range {}-{}",
            field, value, lo, hi
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> UserProfile {
        UserProfile {
            age: 22,
            height_cm: 170,
            weight_kg: 65,
            activity: ActivityLevel::Moderate,
            diet: DietType::Vegetarian,
            goal: Goal::WeightLoss,
            budget: BudgetTier::Student,
            cuisine: "South Indian".to_string(),
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(base_profile().validate().is_ok());
    }

    #[test]
    fn test_bmi_two_decimals() {
        let profile = base_profile();
        // 65 / 1.70^2 = 22.4913... -> 22.49
        assert_eq!(profile.bmi(), 22.49);
    }

    #[test]
    fn test_age_out_of_range() {
        let mut profile = base_profile();
        profile.age = 9;
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_height_out_of_range() {
        let mut profile = base_profile();
        profile.height_cm = 250;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_weight_bounds_inclusive() {
        let mut profile = base_profile();
        profile.weight_kg = 30;
        assert!(profile.validate().is_ok());
        profile.weight_kg = 200;
        assert!(profile.validate().is_ok());
        profile.weight_kg = 201;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_empty_cuisine_rejected() {
        let mut profile = base_profile();
        profile.cuisine = "  ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(DietType::NonVegetarian.to_string(), "Non-Vegetarian");
        assert_eq!(BudgetTier::Student.to_string(), "Student (Low Cost)");
        assert_eq!(Goal::WeightLoss.to_string(), "Weight Loss");
    }
}
