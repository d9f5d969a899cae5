use crate::core::analysis::{analyze, AnalysisOptions, SoilAnalysis};
use crate::core::intake::LabeledSample;
use crate::core::report::render;
use crate::domain::model::{SoilSample, WeatherReport};
use crate::domain::ports::{ConfigProvider, Storage, WeatherProvider};
use crate::utils::error::Result;
use std::sync::Arc;

pub const REPORT_STEM: &str = "soil_report";
pub const BATCH_REPORT_STEM: &str = "soil_batch_report";

pub struct AdvisoryEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    weather: Option<Arc<dyn WeatherProvider>>,
}

impl<S: Storage, C: ConfigProvider> AdvisoryEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            weather: None,
        }
    }

    pub fn with_weather(mut self, provider: Arc<dyn WeatherProvider>) -> Self {
        self.weather = Some(provider);
        self
    }

    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            band_matching: self.config.band_matching(),
            top_crops: self.config.top_crops(),
        }
    }

    /// Weather is optional: failures are logged and the report goes out without it.
    pub async fn fetch_weather(&self) -> Option<WeatherReport> {
        let provider = self.weather.as_ref()?;
        let at = self.config.coordinates()?;

        match provider.current_weather(at).await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!(
                    "⚠️ Weather from {} unavailable: {} ({})",
                    provider.name(),
                    e,
                    e.recovery_suggestion()
                );
                None
            }
        }
    }

    /// Analysis of one sample with the weather attached, ready to write.
    pub async fn analyze_sample(&self, sample: &SoilSample) -> SoilAnalysis {
        tracing::info!("Starting soil analysis...");
        let mut analysis = analyze(sample, &self.options());
        analysis.weather = self.fetch_weather().await;
        analysis
    }

    pub async fn write_analysis(&self, analysis: &SoilAnalysis) -> Result<Vec<String>> {
        self.write_reports(REPORT_STEM, std::slice::from_ref(analysis)).await
    }

    pub async fn run(&self, sample: &SoilSample) -> Result<Vec<String>> {
        let analysis = self.analyze_sample(sample).await;
        self.write_analysis(&analysis).await
    }

    pub async fn run_batch(&self, samples: &[LabeledSample]) -> Result<Vec<String>> {
        tracing::info!("Starting batch soil analysis of {} samples...", samples.len());
        let options = self.options();
        let weather = self.fetch_weather().await;

        let analyses: Vec<SoilAnalysis> = samples
            .iter()
            .map(|labeled| {
                let mut analysis = analyze(&labeled.sample, &options).with_id(labeled.id.clone());
                analysis.weather = weather.clone();
                analysis
            })
            .collect();

        self.write_reports(BATCH_REPORT_STEM, &analyses).await
    }

    async fn write_reports(&self, stem: &str, analyses: &[SoilAnalysis]) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for format in self.config.output_formats() {
            let file_name = format!("{}.{}", stem, format.extension());
            let content = render(analyses, format, self.config.language())?;

            tracing::debug!("Writing {} ({} bytes) to storage", file_name, content.len());
            self.storage.write_file(&file_name, content.as_bytes()).await?;
            written.push(format!("{}/{}", self.config.output_path(), file_name));
        }

        tracing::info!("Wrote {} report file(s)", written.len());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BandMatching, Coordinates, OutputFormat};
    use crate::utils::error::AdvisorError;
    use crate::utils::i18n::Language;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        formats: Vec<OutputFormat>,
        coordinates: Option<Coordinates>,
    }

    impl ConfigProvider for TestConfig {
        fn output_path(&self) -> &str {
            "./out"
        }
        fn output_formats(&self) -> Vec<OutputFormat> {
            self.formats.clone()
        }
        fn band_matching(&self) -> BandMatching {
            BandMatching::Inclusive
        }
        fn top_crops(&self) -> usize {
            3
        }
        fn language(&self) -> Language {
            Language::En
        }
        fn coordinates(&self) -> Option<Coordinates> {
            self.coordinates
        }
    }

    struct FailingWeather;

    #[async_trait::async_trait]
    impl WeatherProvider for FailingWeather {
        fn name(&self) -> &'static str {
            "failing"
        }
        async fn current_weather(&self, _at: Coordinates) -> Result<WeatherReport> {
            Err(AdvisorError::WeatherApiError {
                status: 503,
                body: String::new(),
            })
        }
    }

    struct FixedWeather;

    #[async_trait::async_trait]
    impl WeatherProvider for FixedWeather {
        fn name(&self) -> &'static str {
            "fixed"
        }
        async fn current_weather(&self, _at: Coordinates) -> Result<WeatherReport> {
            Ok(WeatherReport {
                location: "Pune".to_string(),
                country: "IN".to_string(),
                temperature: 29,
                feels_like: 31,
                humidity: 62,
                rainfall: 0.0,
                wind_speed: 11,
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
                pressure: 1009,
                visibility: 10,
                observed_at: None,
            })
        }
    }

    fn sample() -> SoilSample {
        SoilSample {
            nitrogen: 350.0,
            phosphorus: 30.0,
            potassium: 250.0,
            ph: 6.5,
            organic_carbon: 0.8,
            moisture: 30.0,
        }
    }

    #[tokio::test]
    async fn test_run_writes_each_format() {
        let storage = MockStorage::default();
        let config = TestConfig {
            formats: vec![OutputFormat::Json, OutputFormat::Text],
            coordinates: None,
        };
        let engine = AdvisoryEngine::new(storage.clone(), config);

        let written = engine.run(&sample()).await.unwrap();
        assert_eq!(
            written,
            vec!["./out/soil_report.json".to_string(), "./out/soil_report.txt".to_string()]
        );
        assert!(storage.get_file("soil_report.json").await.is_some());
        let text = storage.get_file("soil_report.txt").await.unwrap();
        assert!(String::from_utf8(text).unwrap().contains("well-balanced"));
    }

    #[tokio::test]
    async fn test_weather_failure_does_not_fail_run() {
        let storage = MockStorage::default();
        let config = TestConfig {
            formats: vec![OutputFormat::Json],
            coordinates: Some(Coordinates {
                latitude: 19.07,
                longitude: 72.87,
            }),
        };
        let engine = AdvisoryEngine::new(storage.clone(), config).with_weather(Arc::new(FailingWeather));

        assert!(engine.run(&sample()).await.is_ok());
        let json = storage.get_file("soil_report.json").await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert!(value.get("weather").is_none());
    }

    #[tokio::test]
    async fn test_written_report_matches_returned_analysis() {
        let storage = MockStorage::default();
        let config = TestConfig {
            formats: vec![OutputFormat::Json, OutputFormat::Text],
            coordinates: Some(Coordinates {
                latitude: 18.52,
                longitude: 73.86,
            }),
        };
        let engine = AdvisoryEngine::new(storage.clone(), config).with_weather(Arc::new(FixedWeather));

        let analysis = engine.analyze_sample(&sample()).await;
        assert_eq!(analysis.weather.as_ref().map(|w| w.location.as_str()), Some("Pune"));
        engine.write_analysis(&analysis).await.unwrap();

        let json = storage.get_file("soil_report.json").await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["generated_at"], serde_json::to_value(analysis.generated_at).unwrap());
        assert_eq!(value["weather"]["location"], "Pune");

        let text = storage.get_file("soil_report.txt").await.unwrap();
        assert_eq!(
            String::from_utf8(text).unwrap(),
            crate::core::report::render_text(&analysis, Language::En)
        );
    }
}
