use crate::core::advisory::advise_with;
use crate::core::classifier::classify_with;
use crate::core::crops::match_crops;
use crate::core::standards::standard_for;
use crate::domain::model::{
    BandMatching, CropMatch, Parameter, ParameterReading, SoilSample, WeatherReport,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const GENERAL_TIPS: [&str; 4] = [
    "Test soil every 6 months for optimal crop planning",
    "Maintain crop rotation to prevent nutrient depletion",
    "Use organic fertilizers to improve soil structure",
    "Practice conservation tillage to reduce soil erosion",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub band_matching: BandMatching,
    /// Number of crop matches kept in the report.
    pub top_crops: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            band_matching: BandMatching::Inclusive,
            top_crops: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilAnalysis {
    pub sample_id: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub sample: SoilSample,
    pub readings: Vec<ParameterReading>,
    pub recommendations: Vec<String>,
    pub crop_matches: Vec<CropMatch>,
    pub general_tips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReport>,
}

impl SoilAnalysis {
    pub fn reading(&self, parameter: Parameter) -> Option<&ParameterReading> {
        self.readings.iter().find(|r| r.parameter == parameter)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.sample_id = Some(id.into());
        self
    }
}

pub fn read_parameters(sample: &SoilSample, matching: BandMatching) -> Vec<ParameterReading> {
    Parameter::ALL
        .into_iter()
        .map(|parameter| {
            let standard = standard_for(parameter);
            let value = sample.value(parameter);
            let category = classify_with(parameter, value, matching);
            ParameterReading {
                parameter,
                label: standard.label,
                unit: standard.unit,
                value,
                category,
                status: category.status(),
            }
        })
        .collect()
}

pub fn analyze(sample: &SoilSample, options: &AnalysisOptions) -> SoilAnalysis {
    let readings = read_parameters(sample, options.band_matching);
    let recommendations = advise_with(sample, options.band_matching);
    let mut crop_matches = match_crops(sample);
    crop_matches.truncate(options.top_crops);

    tracing::debug!(
        "Analysed sample: {} recommendations, best crop {:?}",
        recommendations.len(),
        crop_matches.first().map(|m| m.crop.as_str())
    );

    SoilAnalysis {
        sample_id: None,
        generated_at: Utc::now(),
        sample: *sample,
        readings,
        recommendations,
        crop_matches,
        general_tips: GENERAL_TIPS.iter().map(|t| t.to_string()).collect(),
        weather: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::advisory::BALANCED_MESSAGE;
    use crate::domain::model::{Category, Status, Tier};

    fn sample() -> SoilSample {
        SoilSample {
            nitrogen: 150.0,
            phosphorus: 30.0,
            potassium: 250.0,
            ph: 6.5,
            organic_carbon: 0.8,
            moisture: 30.0,
        }
    }

    #[test]
    fn test_readings_cover_all_parameters() {
        let analysis = analyze(&sample(), &AnalysisOptions::default());
        assert_eq!(analysis.readings.len(), 6);
        let n = analysis.reading(Parameter::Nitrogen).unwrap();
        assert_eq!(n.category, Category::Tier(Tier::VeryLow));
        assert_eq!(n.status, Status::Deficient);
        assert_eq!(n.unit, "kg/ha");
    }

    #[test]
    fn test_top_crops_truncates() {
        let options = AnalysisOptions {
            top_crops: 2,
            ..AnalysisOptions::default()
        };
        let analysis = analyze(&sample(), &options);
        assert_eq!(analysis.crop_matches.len(), 2);
        assert_eq!(analysis.general_tips.len(), 4);
        assert!(analysis.weather.is_none());
    }

    #[test]
    fn test_band_matching_flows_into_advice() {
        let boundary = SoilSample {
            nitrogen: 300.0,
            ..sample()
        };
        let inclusive = analyze(&boundary, &AnalysisOptions::default());
        assert_eq!(inclusive.recommendations.len(), 1);

        let half_open = analyze(
            &boundary,
            &AnalysisOptions {
                band_matching: BandMatching::HalfOpen,
                ..AnalysisOptions::default()
            },
        );
        assert_eq!(half_open.recommendations, vec![BALANCED_MESSAGE.to_string()]);
    }
}
