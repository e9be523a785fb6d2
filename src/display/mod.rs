//! Display manager for terminal output
//!
//! Formats the generated plan for the terminal: banner, macro summary,
//! WHO guideline verdict, diet and workout tables, and the journey bar.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::plan::{HealthPlan, Macros};
use crate::session::JOURNEY_WEEKS;

/// Terminal column widths for the diet table (Day, Breakfast, Lunch, Dinner)
const DIET_COLS: [usize; 4] = [10, 28, 28, 28];

/// Terminal column widths for the workout table (Day, Focus, Duration, Intensity)
const WORKOUT_COLS: [usize; 4] = [10, 40, 14, 14];

/// Display manager for terminal UI
pub struct DisplayManager {
    spinner: Option<ProgressBar>,
    update_interval: Duration,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager {
            spinner: None,
            update_interval: Duration::from_millis(100),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, model: &str) {
        let width = 64;
        println!("\n{}", "=".repeat(width).cyan());
        println!(
            "{}",
            format!("  AI Health Architect {} - Personalized Plan Generator", version)
                .bold()
                .cyan()
        );
        println!("{}", format!("  Model: {} | Engine: Ollama", model).dimmed());
        println!("{}\n", "=".repeat(width).cyan());
    }

    /// Start the generation spinner
    pub fn start_generation(&mut self, model: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message(format!("Crafting your personalized plan with {}...", model));
        pb.enable_steady_tick(self.update_interval);
        self.spinner = Some(pb);
    }

    /// Finish the spinner with a success line
    pub fn finish_with_success(&mut self, message: &str, duration_ms: u64) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        println!(
            "{} {} {}",
            "✓".green(),
            message,
            format!("({}ms)", duration_ms).dimmed()
        );
    }

    /// Finish the spinner with an error line
    pub fn finish_with_error(&mut self, message: &str) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        println!("{} {}", "✗".red(), message.red());
    }

    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Render the full plan: overview, macros, WHO verdict, tables
    pub fn show_plan(&self, plan: &HealthPlan) {
        if !plan.overview.is_empty() {
            self.show_section("Overview");
            for point in &plan.overview {
                println!("  {} {}", "•".cyan(), point);
            }
        }

        self.show_section("Daily Macros");
        self.show_macros(&plan.macros);

        self.show_section("WHO Guideline Check");
        let score = plan.who_analysis.score.as_str();
        let colored_score = if who_score_is_strong(score) {
            score.green().bold()
        } else {
            score.yellow().bold()
        };
        println!("  Score: {}", colored_score);
        println!("  {}", plan.who_analysis.feedback);

        if !plan.diet.is_empty() {
            self.show_section("Diet Schedule");
            self.table_row(&DIET_COLS, &["Day", "Breakfast", "Lunch", "Dinner"], true);
            for row in &plan.diet {
                self.table_row(
                    &DIET_COLS,
                    &[&row.day, &row.breakfast, &row.lunch, &row.dinner],
                    false,
                );
            }
        }

        if !plan.workout.is_empty() {
            self.show_section("Workout Schedule");
            self.table_row(
                &WORKOUT_COLS,
                &["Day", "Focus Area", "Duration", "Intensity"],
                true,
            );
            for row in &plan.workout {
                self.table_row(
                    &WORKOUT_COLS,
                    &[&row.day, &row.workout, &row.duration, &row.intensity],
                    false,
                );
            }
        }
        println!();
    }

    /// Macro summary cards
    fn show_macros(&self, macros: &Macros) {
        println!(
            "  {}  {}  {}  {}",
            format!("Protein: {}g", macros.protein_grams).green(),
            format!("Carbs: {}g", macros.carbs_grams).yellow(),
            format!("Fats: {}g", macros.fats_grams).magenta(),
            format!("Calories: {} kcal", macros.daily_calories).cyan(),
        );
    }

    /// Journey progress across the 12-week program
    pub fn show_journey(&self, weeks: u32) {
        let filled = weeks.min(JOURNEY_WEEKS) as usize;
        let empty = JOURNEY_WEEKS as usize - filled;
        let bar = format!(
            "[{}{}]",
            "#".repeat(filled).green(),
            "-".repeat(empty).dimmed()
        );
        println!(
            "\n{} {} {} of {} weeks",
            "Journey:".bold(),
            bar,
            weeks.min(JOURNEY_WEEKS),
            JOURNEY_WEEKS
        );
    }

    fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    fn table_row(&self, cols: &[usize], cells: &[&str], header: bool) {
        let mut line = String::new();
        for (width, cell) in cols.iter().zip(cells.iter()) {
            line.push_str(&format!("{:<w$}  ", truncate(cell, *width), w = width));
        }
        if header {
            println!("  {}", line.trim_end().bold());
        } else {
            println!("  {}", line.trim_end());
        }
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Strong means the score text mentions an 8 or a 9. A "10/10" stays
/// yellow, as does anything without a recognizable digit.
fn who_score_is_strong(score: &str) -> bool {
    score.contains('8') || score.contains('9')
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
