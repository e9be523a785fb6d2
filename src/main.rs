//! AI Health Architect - CLI entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::time::Instant;

use healtharchitect::bootstrap::{Bootstrap, BootstrapStatus, EXIT_CODE_SETUP_NEEDED};
use healtharchitect::cli::{Args, Commands, ConfigArgs, GenerateArgs};
use healtharchitect::config::Config;
use healtharchitect::display::DisplayManager;
use healtharchitect::doctor;
use healtharchitect::engine::client::DEFAULT_MODEL;
use healtharchitect::engine::PlanEngine;
use healtharchitect::plan::PlanDocument;
use healtharchitect::report;
use healtharchitect::session::SessionManager;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load().unwrap_or_default();
    let model = resolve_model(&args, &config);

    match &args.command {
        Commands::Generate(gen_args) => run_generate(&args, gen_args, &config, &model).await,
        Commands::Doctor => run_doctor(&args, &config, &model).await,
        Commands::Models => run_models(&args, &config, &model).await,
        Commands::Config(cfg_args) => run_config(cfg_args, config),
    }
}

/// Model precedence: flag, then config default, then the built-in default
fn resolve_model(args: &Args, config: &Config) -> String {
    args.model
        .clone()
        .or_else(|| config.get_default_model().map(String::from))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Endpoint precedence mirrors the model: flag, then the config `[api]`
/// section (which itself defaults to 127.0.0.1:11434)
fn endpoint_bootstrap(args: &Args, config: &Config, model: &str) -> Bootstrap {
    Bootstrap::new(
        &args.resolve_host(&config.api),
        args.resolve_port(&config.api),
        model.to_string(),
    )
}

async fn run_generate(
    args: &Args,
    gen_args: &GenerateArgs,
    config: &Config,
    model: &str,
) -> Result<()> {
    let verbosity = args.verbosity();
    let mut display = DisplayManager::new();

    if verbosity.show_progress() {
        display.show_banner(env!("CARGO_PKG_VERSION"), model);
    }

    let profile = gen_args.profile(config.profile.cuisine.as_deref());
    if let Err(e) = profile.validate() {
        display.show_error(&e.to_string());
        std::process::exit(1);
    }
    if verbosity.show_events() {
        display.show_info(&format!("BMI: {}", profile.bmi()));
    }

    let bootstrap = endpoint_bootstrap(args, config, model);
    match bootstrap.check().await? {
        BootstrapStatus::Ready => {}
        BootstrapStatus::OllamaNotRunning => {
            Bootstrap::show_ollama_install_instructions();
            std::process::exit(EXIT_CODE_SETUP_NEEDED);
        }
        BootstrapStatus::ModelNotAvailable(tag) => {
            Bootstrap::show_model_pull_instructions(&tag);
            std::process::exit(EXIT_CODE_SETUP_NEEDED);
        }
    }

    let mut session = SessionManager::new();
    session.set_progress(gen_args.weeks);

    let engine = PlanEngine::new(&args.ollama_url(&config.api), model)?;
    if verbosity.show_progress() {
        display.start_generation(model);
    }

    let start = Instant::now();
    let record = match engine.generate_plan(&profile).await {
        Ok(record) => record,
        Err(e) => {
            display.finish_with_error("Plan generation failed");
            display.show_error(&e.to_string());
            std::process::exit(1);
        }
    };
    let duration_ms = start.elapsed().as_millis() as u64;

    if verbosity.show_progress() {
        display.finish_with_success("Plan generated", duration_ms);
    }

    session.record_plan(record);
    let record = match session.latest() {
        Some(record) => record,
        None => return Ok(()),
    };

    display.show_plan(&record.plan);
    if verbosity.show_progress() {
        display.show_journey(session.progress());
    }

    if !gen_args.no_pdf {
        let document = PlanDocument::from(record);
        let bytes = report::render(&document)?;

        let path = gen_args.output.clone().unwrap_or_else(|| {
            format!("health-plan-{}.pdf", record.generated).into()
        });
        std::fs::write(&path, bytes)?;
        println!("{} PDF saved to {}", "✓".green(), path.display());
    }

    Ok(())
}

async fn run_doctor(args: &Args, config: &Config, model: &str) -> Result<()> {
    let bootstrap = endpoint_bootstrap(args, config, model);
    let results = doctor::run_checks(&bootstrap).await;
    if !doctor::print_report(&results) {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_models(args: &Args, config: &Config, model: &str) -> Result<()> {
    let bootstrap = endpoint_bootstrap(args, config, model);
    if !bootstrap.check_ollama_running().await {
        Bootstrap::show_ollama_install_instructions();
        std::process::exit(EXIT_CODE_SETUP_NEEDED);
    }

    let models = bootstrap.list_models().await?;
    if models.is_empty() {
        println!("No models installed. Pull one with: ollama pull {}", DEFAULT_MODEL);
        return Ok(());
    }

    println!("\n{}", "Installed models".bold().cyan());
    for name in models {
        let marker = if name == model { "*".green() } else { " ".normal() };
        println!("  {} {}", marker, name);
    }
    println!();
    Ok(())
}

fn run_config(cfg_args: &ConfigArgs, mut config: Config) -> Result<()> {
    if cfg_args.has_updates() {
        if let Some(model) = &cfg_args.set_model {
            config.set_default_model(model.clone());
            println!("{} default model set to {}", "✓".green(), model);
        }
        if cfg_args.clear_model {
            config.clear_default_model();
            println!("{} default model cleared", "✓".green());
        }
        if let Some(cuisine) = &cfg_args.set_cuisine {
            config.profile.cuisine = Some(cuisine.clone());
            println!("{} cuisine set to {}", "✓".green(), cuisine);
        }
        config.save()?;
    }

    let path = Config::config_path()?;
    println!("\n{}", "Configuration".bold().cyan());
    println!("  Path:          {}", path.display());
    println!(
        "  Default model: {}",
        config.get_default_model().unwrap_or(DEFAULT_MODEL)
    );
    println!("  API host:      {}", config.api.host);
    println!("  API port:      {}", config.api.port);
    if let Some(cuisine) = &config.profile.cuisine {
        println!("  Cuisine:       {}", cuisine);
    }
    println!();
    Ok(())
}
