use clap::Parser;
use soil_advisor::core::ConfigProvider;
use soil_advisor::core::report::render_text;
use soil_advisor::utils::{error::AdvisorError, logger, validation::Validate};
use soil_advisor::{AdvisoryEngine, CliConfig, LocalStorage, OpenWeatherClient, SoilSample};
use std::sync::Arc;

fn fail(e: &AdvisorError) -> ! {
    tracing::error!(
        "❌ Soil analysis failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code().max(1));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.common.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_level(), cli.common.verbose, config.log_json());
    tracing::info!("Starting soil-advisor");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    // reject bad input before anything is classified
    let sample = match SoilSample::try_from(&cli.form()) {
        Ok(sample) => sample,
        Err(e) => fail(&e),
    };

    let storage = LocalStorage::new(config.output_path());
    let language = config.language();
    let weather = match config.weather_client_config().map(OpenWeatherClient::new) {
        Some(Ok(client)) => Some(client),
        Some(Err(e)) => fail(&e),
        None => None,
    };

    let mut engine = AdvisoryEngine::new(storage, config);
    if let Some(client) = weather {
        engine = engine.with_weather(Arc::new(client));
    }

    let analysis = engine.analyze_sample(&sample).await;
    if cli.print {
        println!("{}", render_text(&analysis, language));
        println!();
    }

    match engine.write_analysis(&analysis).await {
        Ok(paths) => {
            tracing::info!("✅ Soil analysis completed successfully!");
            for path in &paths {
                println!("📁 Report saved to: {}", path);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
