//! Environment diagnostics
//!
//! The `doctor` subcommand: checks the Ollama server, the configured
//! model, the config file, and the output directory, then prints a
//! check-by-check report.

use colored::*;

use crate::bootstrap::Bootstrap;
use crate::config::Config;

/// Outcome of one diagnostic check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn pass(name: &str, detail: String) -> Self {
        CheckResult {
            name: name.to_string(),
            passed: true,
            detail,
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        CheckResult {
            name: name.to_string(),
            passed: false,
            detail,
        }
    }
}

/// Run every diagnostic check
pub async fn run_checks(bootstrap: &Bootstrap) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let server_up = bootstrap.check_ollama_running().await;
    results.push(if server_up {
        CheckResult::pass(
            "Ollama server",
            format!("reachable at {}", bootstrap.ollama_url()),
        )
    } else {
        CheckResult::fail(
            "Ollama server",
            format!("no response from {}", bootstrap.ollama_url()),
        )
    });

    if server_up {
        match bootstrap.check_model_available(&bootstrap.model_tag).await {
            Ok(true) => results.push(CheckResult::pass(
                "Model",
                format!("'{}' is installed", bootstrap.model_tag),
            )),
            Ok(false) => results.push(CheckResult::fail(
                "Model",
                format!(
                    "'{}' not installed, run: ollama pull {}",
                    bootstrap.model_tag, bootstrap.model_tag
                ),
            )),
            Err(e) => results.push(CheckResult::fail("Model", e.to_string())),
        }
    } else {
        results.push(CheckResult::fail(
            "Model",
            "skipped, server not reachable".to_string(),
        ));
    }

    results.push(match Config::load() {
        Ok(_) => {
            let path = Config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            CheckResult::pass("Config", format!("loaded from {}", path))
        }
        Err(e) => CheckResult::fail("Config", e.to_string()),
    });

    results.push(check_output_dir());

    results
}

/// The current directory must accept the exported PDF
fn check_output_dir() -> CheckResult {
    let probe = std::env::current_dir()
        .map(|dir| dir.join(".healtharchitect-doctor-probe"));
    match probe {
        Ok(path) => match std::fs::write(&path, b"probe") {
            Ok(()) => {
                let _ = std::fs::remove_file(&path);
                CheckResult::pass("Output directory", "current directory is writable".to_string())
            }
            Err(e) => CheckResult::fail("Output directory", format!("not writable: {}", e)),
        },
        Err(e) => CheckResult::fail("Output directory", format!("cannot resolve: {}", e)),
    }
}

/// Print the report; returns true when every check passed
pub fn print_report(results: &[CheckResult]) -> bool {
    println!("\n{}", "Diagnostics".bold().cyan());
    println!("{}", "-".repeat(60).cyan());

    let mut all_passed = true;
    for result in results {
        let mark = if result.passed {
            "✓".green()
        } else {
            all_passed = false;
            "✗".red()
        };
        println!("  {} {:<18} {}", mark, result.name, result.detail.as_str().dimmed());
    }

    println!();
    if all_passed {
        println!("{}", "All checks passed.".green());
    } else {
        println!("{}", "Some checks failed, see details above.".yellow());
    }
    all_passed
}
