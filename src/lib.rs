pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig, CommonArgs};

pub use config::toml_config::TomlConfig;
pub use core::advisory::{advise, generate_soil_recommendations, BALANCED_MESSAGE};
pub use core::analysis::{analyze, AnalysisOptions, SoilAnalysis};
pub use core::classifier::{classify, get_soil_parameter_category};
pub use core::crops::match_crops;
pub use core::engine::AdvisoryEngine;
pub use core::intake::{read_samples_csv, SoilForm};
pub use core::weather::{OpenWeatherClient, WeatherClientConfig};
pub use domain::model::{Category, Parameter, SoilSample, Tier};
pub use utils::error::{AdvisorError, Result};
