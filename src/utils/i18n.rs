//! Report labels in the two languages offered by the language toggle.
//!
//! Advisory sentences and tips stay in English; only headings and
//! classification labels are translated.

use crate::domain::model::{Parameter, Status, Tier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Title,
    AnalysisSummary,
    Recommendations,
    RecommendedCrops,
    GeneralTips,
    Weather,
    Match,
}

pub fn label(language: Language, label: Label) -> &'static str {
    match (language, label) {
        (Language::En, Label::Title) => "Smart Crop Recommendation System",
        (Language::En, Label::AnalysisSummary) => "Soil Analysis Summary",
        (Language::En, Label::Recommendations) => "Expert Recommendations",
        (Language::En, Label::RecommendedCrops) => "Recommended Crops for Your Soil",
        (Language::En, Label::GeneralTips) => "General Soil Health Tips",
        (Language::En, Label::Weather) => "Weather Conditions",
        (Language::En, Label::Match) => "Match",
        (Language::Hi, Label::Title) => "स्मार्ट फसल सिफारिश प्रणाली",
        (Language::Hi, Label::AnalysisSummary) => "मिट्टी विश्लेषण सारांश",
        (Language::Hi, Label::Recommendations) => "विशेषज्ञ सिफारिशें",
        (Language::Hi, Label::RecommendedCrops) => "आपकी मिट्टी के लिए अनुशंसित फसलें",
        (Language::Hi, Label::GeneralTips) => "मिट्टी स्वास्थ्य के सामान्य सुझाव",
        (Language::Hi, Label::Weather) => "मौसम की स्थिति",
        (Language::Hi, Label::Match) => "मेल",
    }
}

pub fn parameter_label(language: Language, parameter: Parameter) -> &'static str {
    match (language, parameter) {
        (Language::En, Parameter::Nitrogen) => "Nitrogen",
        (Language::En, Parameter::Phosphorus) => "Phosphorus",
        (Language::En, Parameter::Potassium) => "Potassium",
        (Language::En, Parameter::Ph) => "pH Level",
        (Language::En, Parameter::OrganicCarbon) => "Organic Carbon",
        (Language::En, Parameter::Moisture) => "Moisture",
        (Language::Hi, Parameter::Nitrogen) => "नाइट्रोजन",
        (Language::Hi, Parameter::Phosphorus) => "फास्फोरस",
        (Language::Hi, Parameter::Potassium) => "पोटैशियम",
        (Language::Hi, Parameter::Ph) => "पीएच स्तर",
        (Language::Hi, Parameter::OrganicCarbon) => "जैविक कार्बन",
        (Language::Hi, Parameter::Moisture) => "नमी",
    }
}

pub fn tier_label(language: Language, tier: Option<Tier>) -> &'static str {
    match (language, tier) {
        (Language::En, Some(Tier::VeryLow)) => "very low",
        (Language::En, Some(Tier::Low)) => "low",
        (Language::En, Some(Tier::Optimal)) => "optimal",
        (Language::En, Some(Tier::High)) => "high",
        (Language::En, Some(Tier::VeryHigh)) => "very high",
        (Language::En, None) => "unknown",
        (Language::Hi, Some(Tier::VeryLow)) => "बहुत कम",
        (Language::Hi, Some(Tier::Low)) => "कम",
        (Language::Hi, Some(Tier::Optimal)) => "उत्तम",
        (Language::Hi, Some(Tier::High)) => "अधिक",
        (Language::Hi, Some(Tier::VeryHigh)) => "बहुत अधिक",
        (Language::Hi, None) => "अज्ञात",
    }
}

/// Single-character marker shown before each summary line.
pub fn status_marker(status: Status) -> &'static str {
    match status {
        Status::Optimal => "✓",
        Status::Deficient => "↑",
        Status::Excess => "!",
        Status::Unknown => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code(" HI "), Some(Language::Hi));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_labels_differ_by_language() {
        assert_ne!(
            label(Language::En, Label::Recommendations),
            label(Language::Hi, Label::Recommendations)
        );
        assert_eq!(tier_label(Language::En, None), "unknown");
    }
}
