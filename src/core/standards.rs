//! Soil parameter bands based on Indian Council of Agricultural Research (ICAR)
//! standards.

use crate::domain::model::{Parameter, ParameterBand, ParameterStandard, Tier};

const fn bands(edges: [f64; 6]) -> [ParameterBand; 5] {
    [
        ParameterBand { tier: Tier::VeryLow, min: edges[0], max: edges[1] },
        ParameterBand { tier: Tier::Low, min: edges[1], max: edges[2] },
        ParameterBand { tier: Tier::Optimal, min: edges[2], max: edges[3] },
        ParameterBand { tier: Tier::High, min: edges[3], max: edges[4] },
        ParameterBand { tier: Tier::VeryHigh, min: edges[4], max: edges[5] },
    ]
}

/// Indexed in `Parameter::ALL` order.
pub static SOIL_STANDARDS: [ParameterStandard; 6] = [
    ParameterStandard {
        parameter: Parameter::Nitrogen,
        label: "Nitrogen (N)",
        unit: "kg/ha",
        bands: bands([0.0, 200.0, 300.0, 400.0, 500.0, 1000.0]),
    },
    ParameterStandard {
        parameter: Parameter::Phosphorus,
        label: "Phosphorus (P)",
        unit: "kg/ha",
        bands: bands([0.0, 10.0, 20.0, 40.0, 60.0, 100.0]),
    },
    ParameterStandard {
        parameter: Parameter::Potassium,
        label: "Potassium (K)",
        unit: "kg/ha",
        bands: bands([0.0, 100.0, 200.0, 300.0, 400.0, 600.0]),
    },
    ParameterStandard {
        parameter: Parameter::Ph,
        label: "pH Level",
        unit: "",
        bands: bands([0.0, 5.5, 6.0, 7.5, 8.5, 14.0]),
    },
    ParameterStandard {
        parameter: Parameter::OrganicCarbon,
        label: "Organic Carbon",
        unit: "%",
        bands: bands([0.0, 0.25, 0.5, 1.0, 1.5, 5.0]),
    },
    ParameterStandard {
        parameter: Parameter::Moisture,
        label: "Moisture Content",
        unit: "%",
        bands: bands([0.0, 10.0, 20.0, 40.0, 60.0, 100.0]),
    },
];

pub fn soil_standards() -> &'static [ParameterStandard] {
    &SOIL_STANDARDS
}

pub fn standard_for(parameter: Parameter) -> &'static ParameterStandard {
    match parameter {
        Parameter::Nitrogen => &SOIL_STANDARDS[0],
        Parameter::Phosphorus => &SOIL_STANDARDS[1],
        Parameter::Potassium => &SOIL_STANDARDS[2],
        Parameter::Ph => &SOIL_STANDARDS[3],
        Parameter::OrganicCarbon => &SOIL_STANDARDS[4],
        Parameter::Moisture => &SOIL_STANDARDS[5],
    }
}

pub fn standard_by_name(name: &str) -> Option<&'static ParameterStandard> {
    Parameter::from_name(name).map(standard_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standards_follow_parameter_order() {
        for (standard, parameter) in SOIL_STANDARDS.iter().zip(Parameter::ALL) {
            assert_eq!(standard.parameter, parameter);
            assert_eq!(standard_for(parameter).parameter, parameter);
        }
    }

    #[test]
    fn test_bands_are_contiguous_and_ordered() {
        for standard in soil_standards() {
            for (band, tier) in standard.bands.iter().zip(Tier::ALL) {
                assert_eq!(band.tier, tier);
                assert!(band.min < band.max, "{} {:?}", standard.parameter, tier);
            }
            for pair in standard.bands.windows(2) {
                assert_eq!(pair[0].max, pair[1].min, "gap in {}", standard.parameter);
            }
        }
    }

    #[test]
    fn test_standard_by_name() {
        assert_eq!(standard_by_name("organicCarbon").unwrap().unit, "%");
        assert_eq!(standard_by_name("ph").unwrap().unit, "");
        assert!(standard_by_name("sulphur").is_none());
    }
}
