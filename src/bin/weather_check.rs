use anyhow::Context;
use clap::Parser;
use soil_advisor::core::ConfigProvider;
use soil_advisor::core::WeatherProvider;
use soil_advisor::utils::{logger, validation::Validate};
use soil_advisor::{CommonArgs, OpenWeatherClient};

#[derive(Parser)]
#[command(name = "weather-check")]
#[command(about = "Fetch current weather for the configured location")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.common.load_config().context("loading configuration")?;

    logger::init_logger(config.log_level(), args.common.verbose, config.log_json());

    config.validate().context("validating configuration")?;

    let client_config = config
        .weather_client_config()
        .context("weather lookup is disabled; pass --latitude and --longitude or set [weather] enabled = true")?;
    let at = config
        .coordinates()
        .context("weather latitude/longitude are not configured")?;

    let client = OpenWeatherClient::new(client_config)?;
    let report = client
        .current_weather(at)
        .await
        .with_context(|| format!("fetching weather for {}, {}", at.latitude, at.longitude))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
