use clap::Parser;
use soil_advisor::core::ConfigProvider;
use soil_advisor::utils::{logger, validation::Validate};
use soil_advisor::{
    read_samples_csv, AdvisoryEngine, CommonArgs, LocalStorage, OpenWeatherClient, TomlConfig,
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "batch-report")]
#[command(about = "Analyse every sample in a CSV soil report")]
struct Args {
    /// CSV with columns nitrogen, phosphorus, potassium, ph, organic_carbon, moisture
    /// and an optional sample_id
    #[arg(short, long)]
    input: String,

    /// Show what would be processed without writing reports
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match args.common.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_level(), args.common.verbose, config.log_json());
    tracing::info!("🚀 Starting batch soil report");
    tracing::info!("📁 Reading samples from: {}", args.input);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code().max(1));
    }

    let file = std::fs::File::open(&args.input)?;
    let samples = match read_samples_csv(file) {
        Ok(samples) => samples,
        Err(e) => {
            tracing::error!("❌ Soil report rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code().max(1));
        }
    };

    display_config_summary(&config, samples.len(), args.dry_run);
    if args.dry_run {
        for labeled in &samples {
            println!(
                "  {} -> N {} / P {} / K {} / pH {}",
                labeled.id,
                labeled.sample.nitrogen,
                labeled.sample.phosphorus,
                labeled.sample.potassium,
                labeled.sample.ph
            );
        }
        println!("✅ Dry run complete. No reports were written.");
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path());
    let weather = config
        .weather_client_config()
        .map(OpenWeatherClient::new)
        .transpose()?;

    let mut engine = AdvisoryEngine::new(storage, config);
    if let Some(client) = weather {
        engine = engine.with_weather(Arc::new(client));
    }

    match engine.run_batch(&samples).await {
        Ok(paths) => {
            tracing::info!("✅ Batch report completed for {} samples", samples.len());
            for path in &paths {
                println!("📁 Report saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code().max(1));
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, sample_count: usize, dry_run: bool) {
    println!("📋 Configuration Summary:");
    println!("  Samples: {}", sample_count);
    println!("  Output: {}", config.output_path());
    let formats: Vec<&str> = config.output_formats().iter().map(|f| f.extension()).collect();
    println!("  Formats: {}", formats.join(", "));
    println!("  Band matching: {:?}", config.band_matching());
    println!("  Top crops: {}", config.top_crops());
    match config.coordinates() {
        Some(at) => println!("  Weather: {}, {}", at.latitude, at.longitude),
        None => println!("  Weather: disabled"),
    }
    if dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
    println!();
}
