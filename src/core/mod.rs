pub mod advisory;
pub mod analysis;
pub mod classifier;
pub mod crops;
pub mod engine;
pub mod intake;
pub mod report;
pub mod standards;
pub mod weather;

pub use crate::domain::model::{Category, Parameter, SoilSample, Tier};
pub use crate::domain::ports::{ConfigProvider, Storage, WeatherProvider};
pub use crate::utils::error::Result;
