use crate::core::standards::{standard_by_name, standard_for};
use crate::domain::model::{BandMatching, Category, Parameter, ParameterBand, ParameterStandard};

fn band_contains(band: &ParameterBand, value: f64, matching: BandMatching, last: bool) -> bool {
    match matching {
        BandMatching::Inclusive => value >= band.min && value <= band.max,
        BandMatching::HalfOpen if last => value >= band.min && value <= band.max,
        BandMatching::HalfOpen => value >= band.min && value < band.max,
    }
}

/// Scans bands from very low to very high and returns the first that holds `value`.
pub fn classify_against(
    standard: &ParameterStandard,
    value: f64,
    matching: BandMatching,
) -> Category {
    let last = standard.bands.len() - 1;
    standard
        .bands
        .iter()
        .enumerate()
        .find(|(i, band)| band_contains(band, value, matching, *i == last))
        .map(|(_, band)| Category::Tier(band.tier))
        .unwrap_or(Category::Unknown)
}

pub fn classify_with(parameter: Parameter, value: f64, matching: BandMatching) -> Category {
    classify_against(standard_for(parameter), value, matching)
}

pub fn classify(parameter: Parameter, value: f64) -> Category {
    classify_with(parameter, value, BandMatching::Inclusive)
}

/// Name-based lookup; unrecognised names classify as `Unknown`.
pub fn get_soil_parameter_category(parameter: &str, value: f64) -> Category {
    match standard_by_name(parameter) {
        Some(standard) => classify_against(standard, value, BandMatching::Inclusive),
        None => {
            tracing::debug!("Unrecognised soil parameter: {}", parameter);
            Category::Unknown
        }
    }
}
