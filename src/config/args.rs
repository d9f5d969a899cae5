use crate::config::toml_config::TomlConfig;
use crate::core::intake::SoilForm;
use crate::domain::model::BandMatching;
use crate::utils::error::Result;
use clap::{Args, Parser};

/// Flags shared by every binary; each one overrides the matching TOML value.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    /// Report formats: json, csv, text
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Report language: en or hi
    #[arg(long)]
    pub language: Option<String>,

    /// Resolve shared band boundaries to the upper tier
    #[arg(long)]
    pub half_open_bands: bool,

    #[arg(long)]
    pub top_crops: Option<usize>,

    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, help = "Skip the weather lookup")]
    pub no_weather: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CommonArgs {
    /// Loads the TOML file (if any) and layers the command-line flags on top.
    pub fn load_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(path) = &self.output_path {
            config.output.path = Some(path.clone());
        }
        if !self.format.is_empty() {
            config.output.formats = Some(self.format.clone());
        }
        if let Some(language) = &self.language {
            config.analysis.language = Some(language.clone());
        }
        if self.half_open_bands {
            config.analysis.band_matching = BandMatching::HalfOpen;
        }
        if let Some(top) = self.top_crops {
            config.analysis.top_crops = Some(top);
        }

        let weather = &mut config.weather;
        if let Some(latitude) = self.latitude {
            weather.latitude = Some(latitude);
        }
        if let Some(longitude) = self.longitude {
            weather.longitude = Some(longitude);
        }
        if let Some(key) = &self.api_key {
            weather.api_key = Some(key.clone());
        }
        // coordinates on the command line switch the lookup on
        if self.latitude.is_some() && self.longitude.is_some() {
            weather.enabled = Some(true);
        }
        if self.no_weather {
            weather.enabled = Some(false);
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "soil-advisor")]
#[command(about = "Classify a soil test and print soil-improvement advice")]
pub struct CliConfig {
    /// Nitrogen (N), kg/ha
    #[arg(long)]
    pub nitrogen: Option<String>,

    /// Phosphorus (P), kg/ha
    #[arg(long)]
    pub phosphorus: Option<String>,

    /// Potassium (K), kg/ha
    #[arg(long)]
    pub potassium: Option<String>,

    /// Soil pH, 0-14
    #[arg(long)]
    pub ph: Option<String>,

    /// Organic carbon, %
    #[arg(long)]
    pub organic_carbon: Option<String>,

    /// Moisture, %
    #[arg(long)]
    pub moisture: Option<String>,

    /// Print the text report to stdout as well
    #[arg(long)]
    pub print: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CliConfig {
    pub fn form(&self) -> SoilForm {
        SoilForm {
            nitrogen: self.nitrogen.clone(),
            phosphorus: self.phosphorus.clone(),
            potassium: self.potassium.clone(),
            ph: self.ph.clone(),
            organic_carbon: self.organic_carbon.clone(),
            moisture: self.moisture.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::domain::model::OutputFormat;
    use crate::utils::i18n::Language;

    #[test]
    fn test_parse_form_flags() {
        let cli = CliConfig::parse_from([
            "soil-advisor",
            "--nitrogen",
            "45.2",
            "--ph",
            "6.5",
            "--organic-carbon",
            "0.8",
        ]);
        let form = cli.form();
        assert_eq!(form.nitrogen.as_deref(), Some("45.2"));
        assert_eq!(form.organic_carbon.as_deref(), Some("0.8"));
        assert!(form.moisture.is_none());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = CliConfig::parse_from([
            "soil-advisor",
            "--format",
            "csv,text",
            "--language",
            "hi",
            "--half-open-bands",
            "--latitude",
            "-33.9",
            "--longitude",
            "18.4",
        ]);
        let mut config = TomlConfig::from_toml_str("[output]\nformats = [\"json\"]\n").unwrap();
        cli.common.apply_overrides(&mut config);

        assert_eq!(config.output_formats(), vec![OutputFormat::Csv, OutputFormat::Text]);
        assert_eq!(config.language(), Language::Hi);
        assert_eq!(config.band_matching(), BandMatching::HalfOpen);
        assert!(config.weather_enabled());
        assert_eq!(config.coordinates().map(|c| c.latitude), Some(-33.9));
    }

    #[test]
    fn test_no_weather_wins() {
        let cli = CliConfig::parse_from([
            "soil-advisor",
            "--latitude",
            "10",
            "--longitude",
            "10",
            "--no-weather",
        ]);
        let mut config = TomlConfig::default();
        cli.common.apply_overrides(&mut config);
        assert!(!config.weather_enabled());
        assert!(config.coordinates().is_none());
    }
}
