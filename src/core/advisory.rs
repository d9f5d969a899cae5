use crate::core::classifier::classify_with;
use crate::domain::model::{BandMatching, Category, Parameter, SoilSample, Tier};

pub const BALANCED_MESSAGE: &str =
    "Your soil parameters are well-balanced. Maintain current practices and monitor regularly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryRule {
    pub parameter: Parameter,
    /// Used for very low and low.
    pub when_low: Option<&'static str>,
    /// Used for high and very high.
    pub when_high: Option<&'static str>,
}

impl AdvisoryRule {
    pub fn sentence(&self, category: Category) -> Option<&'static str> {
        match category {
            Category::Tier(Tier::VeryLow | Tier::Low) => self.when_low,
            Category::Tier(Tier::High | Tier::VeryHigh) => self.when_high,
            Category::Tier(Tier::Optimal) | Category::Unknown => None,
        }
    }
}

pub static ADVISORY_RULES: [AdvisoryRule; 6] = [
    AdvisoryRule {
        parameter: Parameter::Nitrogen,
        when_low: Some("Apply nitrogen-rich fertilizers like urea or DAP. Consider growing leguminous crops to fix nitrogen naturally."),
        when_high: Some("Reduce nitrogen fertilizer application. Excess nitrogen can cause lodging and delay maturity."),
    },
    AdvisoryRule {
        parameter: Parameter::Phosphorus,
        when_low: Some("Apply phosphorus fertilizers like SSP or DAP. Add rock phosphate for long-term phosphorus availability."),
        when_high: Some("Reduce phosphorus fertilizer. High phosphorus can interfere with zinc and iron uptake."),
    },
    AdvisoryRule {
        parameter: Parameter::Potassium,
        when_low: Some("Apply potassium fertilizers like MOP or SOP. Use organic sources like farmyard manure and compost."),
        when_high: Some("Reduce potassium fertilizer application to prevent nutrient imbalance."),
    },
    AdvisoryRule {
        parameter: Parameter::Ph,
        when_low: Some("Apply lime or dolomite to increase soil pH. Consider growing acid-tolerant crops."),
        when_high: Some("Apply organic matter like compost or gypsum to reduce soil pH. Avoid lime application."),
    },
    AdvisoryRule {
        parameter: Parameter::OrganicCarbon,
        when_low: Some("Increase organic matter by adding farmyard manure, compost, or green manure. Practice crop rotation with legumes."),
        when_high: None,
    },
    AdvisoryRule {
        parameter: Parameter::Moisture,
        when_low: Some("Improve irrigation system. Apply mulch to retain soil moisture. Consider drip irrigation for water efficiency."),
        when_high: Some("Improve drainage system. Avoid over-irrigation to prevent waterlogging and root diseases."),
    },
];

pub fn rule_for(parameter: Parameter) -> &'static AdvisoryRule {
    match parameter {
        Parameter::Nitrogen => &ADVISORY_RULES[0],
        Parameter::Phosphorus => &ADVISORY_RULES[1],
        Parameter::Potassium => &ADVISORY_RULES[2],
        Parameter::Ph => &ADVISORY_RULES[3],
        Parameter::OrganicCarbon => &ADVISORY_RULES[4],
        Parameter::Moisture => &ADVISORY_RULES[5],
    }
}

pub fn advise_with(sample: &SoilSample, matching: BandMatching) -> Vec<String> {
    let mut recommendations: Vec<String> = Parameter::ALL
        .into_iter()
        .filter_map(|parameter| {
            let category = classify_with(parameter, sample.value(parameter), matching);
            rule_for(parameter).sentence(category)
        })
        .map(str::to_string)
        .collect();

    if recommendations.is_empty() {
        recommendations.push(BALANCED_MESSAGE.to_string());
    }

    recommendations
}

pub fn advise(sample: &SoilSample) -> Vec<String> {
    advise_with(sample, BandMatching::Inclusive)
}

pub fn generate_soil_recommendations(sample: &SoilSample) -> Vec<String> {
    advise(sample)
}
