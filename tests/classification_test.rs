use soil_advisor::core::classifier::classify_with;
use soil_advisor::core::standards::{soil_standards, standard_for};
use soil_advisor::domain::model::BandMatching;
use soil_advisor::{classify, get_soil_parameter_category, Category, Parameter, Tier};

#[test]
fn test_documented_examples() {
    assert_eq!(get_soil_parameter_category("nitrogen", 350.0).as_str(), "optimal");
    assert_eq!(get_soil_parameter_category("ph", 5.0).as_str(), "veryLow");
    assert_eq!(get_soil_parameter_category("unknownParam", 5.0).as_str(), "unknown");
}

#[test]
fn test_every_value_in_domain_gets_exactly_one_tier() {
    for standard in soil_standards() {
        let min = standard.bands[0].min;
        let max = standard.bands[4].max;
        let steps = 500;
        for i in 0..=steps {
            let value = min + (max - min) * i as f64 / steps as f64;
            let category = classify(standard.parameter, value);
            assert!(
                matches!(category, Category::Tier(_)),
                "{} = {} was {}",
                standard.parameter,
                value,
                category
            );

            let holders = standard
                .bands
                .iter()
                .filter(|b| value > b.min && value < b.max)
                .count();
            // interior points sit in exactly one band
            if standard.bands.iter().all(|b| value != b.min && value != b.max) {
                assert_eq!(holders, 1);
            }
        }
    }
}

#[test]
fn test_shared_boundaries_resolve_to_lower_tier() {
    for parameter in Parameter::ALL {
        let standard = standard_for(parameter);
        for pair in standard.bands.windows(2) {
            let boundary = pair[0].max;
            assert_eq!(
                classify(parameter, boundary),
                Category::Tier(pair[0].tier),
                "{} at {}",
                parameter,
                boundary
            );
            assert_eq!(
                classify_with(parameter, boundary, BandMatching::HalfOpen),
                Category::Tier(pair[1].tier),
                "{} at {} (half-open)",
                parameter,
                boundary
            );
        }
    }
}

#[test]
fn test_nitrogen_200_is_very_low() {
    assert_eq!(classify(Parameter::Nitrogen, 200.0), Category::Tier(Tier::VeryLow));
}

#[test]
fn test_values_outside_tables_are_unknown_not_errors() {
    assert_eq!(classify(Parameter::Nitrogen, 1000.01), Category::Unknown);
    assert_eq!(classify(Parameter::Moisture, -0.5), Category::Unknown);
    assert_eq!(classify(Parameter::OrganicCarbon, 7.0), Category::Unknown);
}

#[test]
fn test_table_extremes_are_classified() {
    assert_eq!(classify(Parameter::Ph, 0.0), Category::Tier(Tier::VeryLow));
    assert_eq!(classify(Parameter::Ph, 14.0), Category::Tier(Tier::VeryHigh));
    assert_eq!(
        classify_with(Parameter::Ph, 14.0, BandMatching::HalfOpen),
        Category::Tier(Tier::VeryHigh)
    );
}
