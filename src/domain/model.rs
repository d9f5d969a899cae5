use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Soil parameters in the order advisories are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
    OrganicCarbon,
    Moisture,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::Nitrogen,
        Parameter::Phosphorus,
        Parameter::Potassium,
        Parameter::Ph,
        Parameter::OrganicCarbon,
        Parameter::Moisture,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Nitrogen => "nitrogen",
            Parameter::Phosphorus => "phosphorus",
            Parameter::Potassium => "potassium",
            Parameter::Ph => "ph",
            Parameter::OrganicCarbon => "organicCarbon",
            Parameter::Moisture => "moisture",
        }
    }

    /// Column name used in CSV soil reports.
    pub fn column(&self) -> &'static str {
        match self {
            Parameter::OrganicCarbon => "organic_carbon",
            other => other.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Parameter> {
        Parameter::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification buckets, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    VeryLow,
    Low,
    Optimal,
    High,
    VeryHigh,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::VeryLow, Tier::Low, Tier::Optimal, Tier::High, Tier::VeryHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::VeryLow => "veryLow",
            Tier::Low => "low",
            Tier::Optimal => "optimal",
            Tier::High => "high",
            Tier::VeryHigh => "veryHigh",
        }
    }
}

/// Result of classifying one value: a tier, or `Unknown` when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tier(Tier),
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tier(tier) => tier.as_str(),
            Category::Unknown => "unknown",
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Category::Tier(Tier::Optimal) => Status::Optimal,
            Category::Tier(Tier::VeryLow | Tier::Low) => Status::Deficient,
            Category::Tier(Tier::High | Tier::VeryHigh) => Status::Excess,
            Category::Unknown => Status::Unknown,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Coarse grouping of a category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Optimal,
    Deficient,
    Excess,
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Optimal => "optimal",
            Status::Deficient => "deficient",
            Status::Excess => "excess",
            Status::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterBand {
    pub tier: Tier,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterStandard {
    pub parameter: Parameter,
    pub label: &'static str,
    pub unit: &'static str,
    /// Always five bands, in `Tier::ALL` order.
    pub bands: [ParameterBand; 5],
}

/// One submitted set of soil measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub organic_carbon: f64,
    pub moisture: f64,
}

impl SoilSample {
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Nitrogen => self.nitrogen,
            Parameter::Phosphorus => self.phosphorus,
            Parameter::Potassium => self.potassium,
            Parameter::Ph => self.ph,
            Parameter::OrganicCarbon => self.organic_carbon,
            Parameter::Moisture => self.moisture,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropSoilRequirement {
    pub crop: &'static str,
    pub nitrogen: ValueRange,
    pub phosphorus: ValueRange,
    pub potassium: ValueRange,
    pub ph: ValueRange,
    pub organic_carbon: ValueRange,
    pub moisture: ValueRange,
}

impl CropSoilRequirement {
    pub fn range(&self, parameter: Parameter) -> ValueRange {
        match parameter {
            Parameter::Nitrogen => self.nitrogen,
            Parameter::Phosphorus => self.phosphorus,
            Parameter::Potassium => self.potassium,
            Parameter::Ph => self.ph,
            Parameter::OrganicCarbon => self.organic_carbon,
            Parameter::Moisture => self.moisture,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreLabel::Excellent,
            80..=89 => ScoreLabel::Good,
            70..=79 => ScoreLabel::Fair,
            _ => ScoreLabel::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Excellent => "excellent",
            ScoreLabel::Good => "good",
            ScoreLabel::Fair => "fair",
            ScoreLabel::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropMatch {
    pub crop: String,
    pub matched_parameters: usize,
    pub suitability_score: u8,
    pub label: ScoreLabel,
    /// Parameters whose value falls outside the crop's range.
    pub outside: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterReading {
    pub parameter: Parameter,
    pub label: &'static str,
    pub unit: &'static str,
    pub value: f64,
    pub category: Category,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub humidity: u8,
    pub rainfall: f64,
    pub wind_speed: i64,
    pub description: String,
    pub icon: String,
    pub pressure: u32,
    pub visibility: i64,
    pub observed_at: Option<DateTime<Utc>>,
}

/// How values that sit exactly on a shared band boundary are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandMatching {
    /// `[min, max]` for every band; the first (lower) tier wins on a shared boundary.
    #[default]
    Inclusive,
    /// `[min, max)` for every band but the last, which stays closed.
    HalfOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Text,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["json", "csv", "text"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            "text" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}
