// Main entry point
use clap::Parser;
use colored::Colorize;
use my_translation_service::domain::error::error_chain;
use my_translation_service::domain::model::TranslationOutput;
use my_translation_service::infrastructure::config::{self, Config};
use my_translation_service::infrastructure::logging::init_logging;
use my_translation_service::infrastructure::network::http::create_client;
use my_translation_service::interfaces::cli::Cli;
use my_translation_service::{GoogleTranslator, TranslationService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.status {
        print_status(&config);
        return Ok(());
    }

    if cli.query.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    let query = cli.query.join(" ");
    let target = cli
        .target
        .clone()
        .unwrap_or_else(|| config.target_language.clone());

    let translator = GoogleTranslator::new(create_client()?, config.google.clone());
    let service = TranslationService::new(&translator);

    let option = cli.translate_option(&target);

    let translation = match service.translate_with_options(&query, option).await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", format!("✘ {}", error_chain(&e)).red());
            std::process::exit(1);
        }
    };

    if cli.json {
        let output = TranslationOutput {
            query,
            target,
            translation,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", translation);
    }

    Ok(())
}

fn print_status(config: &Config) {
    println!("{}", "mytr Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Target language: {}", config.target_language);
    println!("Endpoint: {}", config.google.endpoint);

    if config.google.api_key().is_some() {
        println!("Google API: Configured");
    } else {
        println!("Google API: Not configured");
    }
}
