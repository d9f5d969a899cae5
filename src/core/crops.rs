//! Crop-specific soil requirements and suitability scoring.

use crate::domain::model::{CropMatch, CropSoilRequirement, Parameter, ScoreLabel, SoilSample, ValueRange};

const fn r(min: f64, max: f64) -> ValueRange {
    ValueRange::new(min, max)
}

pub static CROP_SOIL_REQUIREMENTS: [CropSoilRequirement; 5] = [
    CropSoilRequirement {
        crop: "Rice",
        nitrogen: r(300.0, 400.0),
        phosphorus: r(20.0, 30.0),
        potassium: r(200.0, 300.0),
        ph: r(6.0, 7.0),
        organic_carbon: r(0.5, 1.0),
        moisture: r(30.0, 50.0),
    },
    CropSoilRequirement {
        crop: "Wheat",
        nitrogen: r(250.0, 350.0),
        phosphorus: r(15.0, 25.0),
        potassium: r(150.0, 250.0),
        ph: r(6.5, 7.5),
        organic_carbon: r(0.4, 0.8),
        moisture: r(20.0, 35.0),
    },
    CropSoilRequirement {
        crop: "Maize",
        nitrogen: r(300.0, 450.0),
        phosphorus: r(25.0, 40.0),
        potassium: r(200.0, 350.0),
        ph: r(6.0, 7.5),
        organic_carbon: r(0.6, 1.2),
        moisture: r(25.0, 40.0),
    },
    CropSoilRequirement {
        crop: "Cotton",
        nitrogen: r(350.0, 500.0),
        phosphorus: r(30.0, 50.0),
        potassium: r(250.0, 400.0),
        ph: r(6.5, 8.0),
        organic_carbon: r(0.5, 1.0),
        moisture: r(20.0, 35.0),
    },
    CropSoilRequirement {
        crop: "Sugarcane",
        nitrogen: r(400.0, 600.0),
        phosphorus: r(35.0, 55.0),
        potassium: r(300.0, 500.0),
        ph: r(6.0, 7.5),
        organic_carbon: r(0.8, 1.5),
        moisture: r(30.0, 50.0),
    },
];

pub fn crop_soil_requirements() -> &'static [CropSoilRequirement] {
    &CROP_SOIL_REQUIREMENTS
}

pub fn score_crop(requirement: &CropSoilRequirement, sample: &SoilSample) -> CropMatch {
    let outside: Vec<Parameter> = Parameter::ALL
        .into_iter()
        .filter(|p| !requirement.range(*p).contains(sample.value(*p)))
        .collect();
    let matched = Parameter::ALL.len() - outside.len();
    let score = (100.0 * matched as f64 / Parameter::ALL.len() as f64).round() as u8;

    CropMatch {
        crop: requirement.crop.to_string(),
        matched_parameters: matched,
        suitability_score: score,
        label: ScoreLabel::from_score(score),
        outside,
    }
}

/// Scores every crop; best first, ties keep table order.
pub fn match_crops(sample: &SoilSample) -> Vec<CropMatch> {
    let mut matches: Vec<CropMatch> = crop_soil_requirements()
        .iter()
        .map(|req| score_crop(req, sample))
        .collect();
    // stable sort keeps table order for equal scores
    matches.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
    matches
}
