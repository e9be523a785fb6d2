//! End-to-end pipeline tests: model response text through parsing,
//! document conversion, layout, and PDF export.

use healtharchitect::engine::parser::parse_plan;
use healtharchitect::plan::{PlanDocument, PlanRecord};
use healtharchitect::report::{self, layout_document, Item, PAGE_BOTTOM_LIMIT};

const MODEL_RESPONSE: &str = r#"Here is your personalized plan:
```json
{
  "overview": [
    "Aim for 2.5 liters of water daily",
    "Eat within a 12 hour window"
  ],
  "macros": {
    "protein_grams": 110,
    "carbs_grams": 220,
    "fats_grams": 55,
    "daily_calories": 1850
  },
  "who_analysis": {
    "score": "8/10",
    "feedback": "Meets WHO activity and sodium guidance"
  },
  "diet": [
    {"day": "Monday", "breakfast": "Idli with sambar and coconut chutney", "lunch": "Curd rice with pickle", "dinner": "Chapati with mixed vegetable curry"},
    {"day": "Tuesday", "breakfast": "Oats upma with peanuts", "lunch": "Lemon rice with papad", "dinner": "Vegetable khichdi with raita"}
  ],
  "workout": [
    {"day": "Monday", "workout": "Brisk walking and light stretching", "duration": "45 min", "intensity": "Moderate"},
    {"day": "Tuesday", "workout": "Bodyweight strength circuit", "duration": "30 min", "intensity": "High"}
  ]
}
```
Stay consistent!"#;

fn record_from_response() -> PlanRecord {
    let plan = parse_plan(MODEL_RESPONSE).unwrap();
    PlanRecord {
        generated: "2026-08-29".to_string(),
        plan,
    }
}

#[test]
fn test_response_to_pdf_pipeline() {
    let record = record_from_response();
    assert_eq!(record.plan.diet.len(), 2);
    assert_eq!(record.plan.macros.daily_calories, 1850);
    assert_eq!(record.plan.who_analysis.score, "8/10");

    let document = PlanDocument::from(&record);
    assert_eq!(document.generated_date, "2026-08-29");
    assert_eq!(document.overview.len(), 2);
    assert_eq!(document.diet_rows.len(), 2);
    assert_eq!(document.workout_rows.len(), 2);

    let bytes = report::render(&document).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn test_pdf_written_to_disk() {
    let record = record_from_response();
    let bytes = report::render(&PlanDocument::from(&record)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("health-plan-2026-08-29.pdf");
    std::fs::write(&path, &bytes).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, bytes);
}

#[test]
fn test_large_plan_paginates_and_renders() {
    let record = record_from_response();
    let mut document = PlanDocument::from(&record);

    let meal = "A generously described meal with several components that wraps \
                over multiple lines inside its table column";
    let base = document.diet_rows[0].clone();
    for i in 0..20 {
        let mut row = base.clone();
        row.day = format!("Day {}", i + 1);
        row.breakfast = meal.to_string();
        row.lunch = meal.to_string();
        document.diet_rows.push(row);
    }

    let layout = layout_document(&document);
    assert!(layout.pages.len() > 1);
    for page in &layout.pages {
        for item in &page.items {
            if let Item::Rect { y, h, .. } = item {
                assert!(y + h <= PAGE_BOTTOM_LIMIT + 0.001);
            }
        }
    }

    let bytes = report::render(&document).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_unparseable_response_is_rejected() {
    assert!(parse_plan("The model refused to answer in JSON.").is_err());
    assert!(parse_plan("{\"overview\": [").is_err());
}
