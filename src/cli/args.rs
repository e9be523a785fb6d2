//! Command-line argument parsing
//!
//! Provides the clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ApiConfig;
use crate::profile::{ActivityLevel, BudgetTier, DietType, Goal, UserProfile};

/// Cuisine used when neither the flag nor the config provides one
pub const DEFAULT_CUISINE: &str = "South Indian";

/// AI Health Architect - Personalized diet and workout plans from a local model
#[derive(Parser, Debug)]
#[command(name = "healtharchitect")]
#[command(version = "0.4.0")]
#[command(about = "Generate personalized health plans with a local Ollama model", long_about = None)]
pub struct Args {
    /// Ollama model to use (config default if omitted)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Ollama host (config value if omitted)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Ollama port (config value if omitted)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except the final result)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a personalized plan and export it as PDF
    Generate(GenerateArgs),

    /// Run environment diagnostics
    Doctor,

    /// List installed Ollama models
    Models,

    /// Display or update the configuration
    Config(ConfigArgs),
}

/// Configuration updates; with no flags the current values are printed
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Save a new default model
    #[arg(long, value_name = "MODEL")]
    pub set_model: Option<String>,

    /// Remove the saved default model
    #[arg(long, conflicts_with = "set_model")]
    pub clear_model: bool,

    /// Save a preferred cuisine for future generate runs
    #[arg(long, value_name = "CUISINE")]
    pub set_cuisine: Option<String>,
}

impl ConfigArgs {
    /// True when any flag asks for a config write
    pub fn has_updates(&self) -> bool {
        self.set_model.is_some() || self.clear_model || self.set_cuisine.is_some()
    }
}

/// Inputs of the generate subcommand
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Age in years (10-100)
    #[arg(long)]
    pub age: u32,

    /// Height in centimeters (120-220)
    #[arg(long)]
    pub height: u32,

    /// Weight in kilograms (30-200)
    #[arg(long)]
    pub weight: u32,

    /// Activity level
    #[arg(long, value_enum, default_value = "moderate")]
    pub activity: ActivityLevel,

    /// Diet type
    #[arg(long, value_enum, default_value = "vegetarian")]
    pub diet: DietType,

    /// Primary goal
    #[arg(long, value_enum, default_value = "maintenance")]
    pub goal: Goal,

    /// Budget tier
    #[arg(long, value_enum, default_value = "standard")]
    pub budget: BudgetTier,

    /// Preferred cuisine (config value if omitted)
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Weeks already completed of the 12-week journey
    #[arg(long, default_value_t = 0)]
    pub weeks: u32,

    /// Output PDF path (defaults to health-plan-<date>.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip writing the PDF
    #[arg(long)]
    pub no_pdf: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Ollama host: flag, then config, in that order
    pub fn resolve_host(&self, api: &ApiConfig) -> String {
        self.host.clone().unwrap_or_else(|| api.host.clone())
    }

    /// Ollama port: flag, then config, in that order
    pub fn resolve_port(&self, api: &ApiConfig) -> u16 {
        self.port.unwrap_or(api.port)
    }

    /// Get Ollama base URL
    pub fn ollama_url(&self, api: &ApiConfig) -> String {
        format!("http://{}:{}", self.resolve_host(api), self.resolve_port(api))
    }
}

impl GenerateArgs {
    /// Build the user profile from the flags.
    ///
    /// Cuisine precedence: flag, then the remembered config value, then
    /// [`DEFAULT_CUISINE`].
    pub fn profile(&self, remembered_cuisine: Option<&str>) -> UserProfile {
        let cuisine = self
            .cuisine
            .clone()
            .or_else(|| remembered_cuisine.map(String::from))
            .unwrap_or_else(|| DEFAULT_CUISINE.to_string());

        UserProfile {
            age: self.age,
            height_cm: self.height,
            weight_kg: self.weight,
            activity: self.activity,
            diet: self.diet,
            goal: self.goal,
            budget: self.budget,
            cuisine,
        }
    }
}

impl Verbosity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Check if progress output should be shown
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if detailed events should be shown
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}
