//! CLI entrypoint for Muse AI
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use muse_application::{
    ChatTutorUseCase, GenerateImageInput, GenerateImageUseCase, QueryTheoryInput,
    QueryTheoryUseCase,
};
use muse_domain::{ImageAsset, Prompt};
use muse_infrastructure::{ConfigLoader, GeminiGateway};
use muse_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, Spinner};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Muse AI");

    // Load configuration
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    // API key: environment wins over the config file
    let api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| file_config.api.key.clone())
        .unwrap_or_default();

    let mut models = file_config.models.to_model_config();
    if let Some(name) = &cli.model {
        // Model::from_str is infallible; unknown names become Custom(...)
        let model = name.parse().unwrap();
        models = if cli.chat {
            models.with_chat(model)
        } else if cli.image.is_some() {
            models.with_image(model)
        } else {
            models.with_theory(model)
        };
    }

    // === Dependency Injection ===
    // Create the Gemini gateway shared by every use case
    let gateway = Arc::new(GeminiGateway::with_settings(
        api_key,
        file_config.api.base_url.clone(),
        file_config.api.timeout_secs.map(Duration::from_secs),
    )?);

    // Chat mode
    if cli.chat {
        let mut repl =
            ChatRepl::new(ChatTutorUseCase::new(gateway, models)).with_progress(!cli.quiet);

        repl.run().await?;
        return Ok(());
    }

    // Image mode
    if let Some(prompt_text) = cli.image {
        let prompt = match Prompt::try_new(prompt_text) {
            Some(prompt) => prompt,
            None => bail!("Image prompt must not be blank."),
        };
        let resolution = cli
            .resolution
            .unwrap_or_else(|| file_config.image.to_resolution());

        if !cli.quiet {
            println!();
            println!("Prompt: {}", prompt);
            println!("Resolution: {}", resolution);
        }

        let use_case = GenerateImageUseCase::new(gateway);
        let input = GenerateImageInput::new(prompt, resolution, models);

        let spinner = (!cli.quiet).then(|| Spinner::start("Generating artwork..."));
        let result = use_case.execute(input).await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }
        let asset = result?;

        let path = match cli.save {
            Some(path) => path,
            None => {
                let name = default_artwork_path(&asset);
                match &file_config.image.directory {
                    Some(dir) => {
                        std::fs::create_dir_all(dir)?;
                        dir.join(name)
                    }
                    None => name,
                }
            }
        };
        std::fs::write(&path, asset.bytes())?;
        println!("{}", ConsoleFormatter::format_image_saved(&path, &asset));
        return Ok(());
    }

    // Theory mode - a request is required
    let request = match cli.request {
        Some(request) => request,
        None => bail!("A theory request is required. Use --chat for the tutor or --image for artwork."),
    };
    let prompt = match Prompt::try_new(request) {
        Some(prompt) => prompt,
        None => bail!("Theory request must not be blank."),
    };

    let use_case = QueryTheoryUseCase::new(gateway);
    let input = QueryTheoryInput::new(prompt, models);

    let spinner = (!cli.quiet).then(|| Spinner::start("Analyzing..."));
    let result = use_case.execute(input).await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }
    let visualization = result?;

    let output = match cli.output {
        OutputFormat::Text => ConsoleFormatter::format_visualization(&visualization),
        OutputFormat::Json => ConsoleFormatter::format_visualization_json(&visualization),
    };
    println!("{}", output);

    Ok(())
}

/// Timestamped default name so repeated runs never clobber each other.
fn default_artwork_path(asset: &ImageAsset) -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("muse-art-{}.{}", timestamp, asset.extension()))
}
