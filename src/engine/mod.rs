//! Plan generation engine
//!
//! Ties the prompt builder, the Ollama client and the response parser
//! together: one profile in, one dated [`PlanRecord`] out.

pub mod client;
pub mod parser;
pub mod prompt;

pub use client::{OllamaClient, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};

use crate::errors::Result;
use crate::plan::PlanRecord;
use crate::profile::UserProfile;
use chrono::Local;

/// Plan generation engine
pub struct PlanEngine {
    client: OllamaClient,
}

impl PlanEngine {
    /// Create an engine talking to the given endpoint and model
    pub fn new(base_url: &str, model: &str) -> Result<Self> {
        Ok(Self {
            client: OllamaClient::with_config(base_url, model)?,
        })
    }

    /// Generate a plan for a validated profile.
    ///
    /// One model round trip; any cleanup or parse failure surfaces as a
    /// typed error to the caller.
    pub async fn generate_plan(&self, profile: &UserProfile) -> Result<PlanRecord> {
        profile.validate()?;

        let prompt = prompt::build_prompt(profile);
        let raw = self.client.generate(&prompt).await?;
        let plan = parser::parse_plan(&raw)?;

        Ok(PlanRecord {
            generated: Local::now().format("%Y-%m-%d").to_string(),
            plan,
        })
    }

    /// Access the underlying client
    pub fn client(&self) -> &OllamaClient {
        &self.client
    }
}
