use crate::domain::model::{BandMatching, Coordinates, OutputFormat, WeatherReport};
use crate::utils::error::Result;
use crate::utils::i18n::Language;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> Vec<OutputFormat>;
    fn band_matching(&self) -> BandMatching;
    fn top_crops(&self) -> usize;
    fn language(&self) -> Language;
    /// `None` disables the weather lookup.
    fn coordinates(&self) -> Option<Coordinates>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn current_weather(&self, at: Coordinates) -> Result<WeatherReport>;
}
