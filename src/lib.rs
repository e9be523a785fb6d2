//! AI Health Architect
//!
//! Generates personalized diet and workout plans with a local Ollama
//! model and exports them as a tabular PDF report.
//!
//! # Architecture
//!
//! - **profile**: validated biometric inputs
//! - **engine**: prompt construction, Ollama client, response parsing
//! - **plan**: the structured plan data model
//! - **report**: two-pass PDF renderer (layout dry run + draw pass)
//! - **session**: plan history and journey tracking
//! - **display**: terminal presentation

pub mod errors;
pub mod plan;
pub mod profile;
pub mod engine;
pub mod report;
pub mod session;
pub mod display;

pub mod bootstrap;
pub mod doctor;
pub mod cli;
pub mod config;

// Re-export commonly used types
pub use errors::{PlanError, Result};
