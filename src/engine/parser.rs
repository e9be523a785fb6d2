//! Model response cleanup and parsing
//!
//! Models wrap JSON in markdown fences or prose no matter how firmly the
//! prompt forbids it. Recovery is two steps: drop code fences, then take
//! the outermost brace-balanced object with a string-aware single pass.

use crate::errors::{PlanError, Result};
use crate::plan::HealthPlan;

/// Remove markdown code fence markers from a raw model response
pub fn strip_code_fences(raw: &str) -> String {
    raw.trim().replace("```json", "").replace("```", "")
}

/// Find the outermost complete JSON object in `text`.
///
/// Bracket matching ignores braces inside string literals and handles
/// escape sequences. Returns the matched slice, or an error when no
/// complete object exists.
pub fn extract_json_object(text: &str) -> Result<&str> {
    let bytes = text.as_bytes();
    let mut depth: i32 = 0;
    let mut start: Option<usize> = None;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, &byte) in bytes.iter().enumerate() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match byte {
            b'\\' if in_string => escape_next = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    if let Some(s) = start {
                        return Ok(&text[s..=i]);
                    }
                }
                if depth < 0 {
                    return Err(PlanError::ResponseParseError(
                        "mismatched braces: too many closing braces".to_string(),
                    ));
                }
            }
            _ => {}
        }
    }

    Err(PlanError::ResponseParseError(
        "no complete JSON object in model response".to_string(),
    ))
}

/// Parse a raw model response into a [`HealthPlan`]
pub fn parse_plan(raw: &str) -> Result<HealthPlan> {
    let cleaned = strip_code_fences(raw);
    let json = extract_json_object(&cleaned)?;
    serde_json::from_str(json)
        .map_err(|e| PlanError::ResponseParseError(format!("failed to parse plan: {}", e)))
}
