//! Environment bootstrap
//!
//! Detects a running Ollama server and the configured model before any
//! generation is attempted, so setup problems surface with instructions
//! instead of request errors.

use crate::errors::{PlanError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Process exit code when the environment needs setup
pub const EXIT_CODE_SETUP_NEEDED: i32 = 2;

/// Ollama detector and bootstrap manager
pub struct Bootstrap {
    client: Client,
    ollama_url: String,
    pub model_tag: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
}

/// Bootstrap check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapStatus {
    Ready,
    OllamaNotRunning,
    ModelNotAvailable(String),
}

impl Bootstrap {
    pub fn new(host: &str, port: u16, model_tag: String) -> Self {
        let ollama_url = format!("http://{}:{}", host, port);
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            ollama_url,
            model_tag,
        }
    }

    pub fn ollama_url(&self) -> &str {
        &self.ollama_url
    }

    /// Check whether the Ollama API answers at all
    pub async fn check_ollama_running(&self) -> bool {
        let url = format!("{}/api/tags", self.ollama_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Check whether the configured model is installed.
    ///
    /// A bare tag like `qwen2.5` matches any installed variant of it.
    pub async fn check_model_available(&self, model_tag: &str) -> Result<bool> {
        let installed = self.list_models().await?;
        Ok(installed.iter().any(|name| {
            name == model_tag || name.split(':').next() == Some(model_tag)
        }))
    }

    /// Names of all installed models
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.ollama_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PlanError::ApiError(format!("failed to query models: {}", e)))?;

        if !response.status().is_success() {
            return Err(PlanError::ApiError(format!(
                "model listing returned status {}",
                response.status()
            )));
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| PlanError::ApiError(format!("failed to parse model list: {}", e)))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Run the complete bootstrap check
    pub async fn check(&self) -> Result<BootstrapStatus> {
        if !self.check_ollama_running().await {
            return Ok(BootstrapStatus::OllamaNotRunning);
        }

        if !self.check_model_available(&self.model_tag).await? {
            return Ok(BootstrapStatus::ModelNotAvailable(self.model_tag.clone()));
        }

        Ok(BootstrapStatus::Ready)
    }

    /// Print installation instructions for Ollama
    pub fn show_ollama_install_instructions() {
        eprintln!("\nOllama not found or not running.");
        eprintln!("\nOllama is required to generate plans.");
        eprintln!("\nInstallation:");
        eprintln!("   Linux:   curl -fsSL https://ollama.com/install.sh | sh");
        eprintln!("   macOS:   brew install ollama");
        eprintln!("\nStart it with:");
        eprintln!("   ollama serve");
        eprintln!("\nMore info: https://ollama.com/download");
        eprintln!();
    }

    /// Print instructions for pulling a missing model
    pub fn show_model_pull_instructions(model_tag: &str) {
        eprintln!("\nModel '{}' is not installed.", model_tag);
        eprintln!("\nDownload it with:");
        eprintln!("   ollama pull {}", model_tag);
        eprintln!("\nOr pick an installed model:");
        eprintln!("   healtharchitect --model <model> generate ...");
        eprintln!("\nBrowse models at: https://ollama.com/library");
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_url() {
        let bootstrap = Bootstrap::new("localhost", 11434, "qwen2.5:7b-instruct".to_string());
        assert_eq!(bootstrap.ollama_url(), "http://localhost:11434");
        assert_eq!(bootstrap.model_tag, "qwen2.5:7b-instruct");
    }

    #[test]
    fn test_status_equality() {
        assert_eq!(BootstrapStatus::Ready, BootstrapStatus::Ready);
        assert_ne!(
            BootstrapStatus::Ready,
            BootstrapStatus::ModelNotAvailable("qwen2.5".to_string())
        );
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(EXIT_CODE_SETUP_NEEDED, 2);
    }

    #[test]
    fn test_unreachable_server_reports_not_running() {
        tokio_test::block_on(async {
            // nothing listens on this port
            let bootstrap = Bootstrap::new("127.0.0.1", 1, "qwen2.5".to_string());
            assert!(!bootstrap.check_ollama_running().await);
            assert_eq!(
                bootstrap.check().await.unwrap(),
                BootstrapStatus::OllamaNotRunning
            );
        });
    }
}
