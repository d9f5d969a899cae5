//! Turns raw form fields and CSV soil reports into validated samples.
//!
//! The classifier assumes finite numbers; everything that reaches it goes
//! through `parse_soil_value` first.

use crate::domain::model::{Parameter, SoilSample};
use crate::utils::error::{AdvisorError, Result};
use serde::Deserialize;
use std::io::Read;

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoilForm {
    pub nitrogen: Option<String>,
    pub phosphorus: Option<String>,
    pub potassium: Option<String>,
    pub ph: Option<String>,
    pub organic_carbon: Option<String>,
    pub moisture: Option<String>,
}

impl SoilForm {
    pub fn field(&self, parameter: Parameter) -> Option<&str> {
        match parameter {
            Parameter::Nitrogen => self.nitrogen.as_deref(),
            Parameter::Phosphorus => self.phosphorus.as_deref(),
            Parameter::Potassium => self.potassium.as_deref(),
            Parameter::Ph => self.ph.as_deref(),
            Parameter::OrganicCarbon => self.organic_carbon.as_deref(),
            Parameter::Moisture => self.moisture.as_deref(),
        }
    }
}

fn domain_limits(parameter: Parameter) -> (f64, f64) {
    match parameter {
        Parameter::Ph => (0.0, 14.0),
        Parameter::Moisture => (0.0, 100.0),
        _ => (0.0, f64::MAX),
    }
}

pub fn parse_soil_value(parameter: Parameter, raw: Option<&str>) -> Result<f64> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(AdvisorError::MissingField {
            field: parameter.name().to_string(),
        });
    }

    let invalid = |reason: String| AdvisorError::InvalidSoilValue {
        field: parameter.name().to_string(),
        value: raw.to_string(),
        reason,
    };

    let value: f64 = raw
        .parse()
        .map_err(|_| invalid("not a number".to_string()))?;
    if !value.is_finite() {
        return Err(invalid("must be a finite number".to_string()));
    }

    let (min, max) = domain_limits(parameter);
    if value < min || value > max {
        let reason = if max == f64::MAX {
            format!("must be at least {}", min)
        } else {
            format!("must be between {} and {}", min, max)
        };
        return Err(invalid(reason));
    }

    Ok(value)
}

impl TryFrom<&SoilForm> for SoilSample {
    type Error = AdvisorError;

    fn try_from(form: &SoilForm) -> Result<Self> {
        let value = |p: Parameter| parse_soil_value(p, form.field(p));
        Ok(SoilSample {
            nitrogen: value(Parameter::Nitrogen)?,
            phosphorus: value(Parameter::Phosphorus)?,
            potassium: value(Parameter::Potassium)?,
            ph: value(Parameter::Ph)?,
            organic_carbon: value(Parameter::OrganicCarbon)?,
            moisture: value(Parameter::Moisture)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SoilReportRow {
    sample_id: Option<String>,
    nitrogen: Option<String>,
    phosphorus: Option<String>,
    potassium: Option<String>,
    ph: Option<String>,
    #[serde(alias = "organicCarbon")]
    organic_carbon: Option<String>,
    moisture: Option<String>,
}

impl SoilReportRow {
    fn into_parts(self) -> (Option<String>, SoilForm) {
        let form = SoilForm {
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            ph: self.ph,
            organic_carbon: self.organic_carbon,
            moisture: self.moisture,
        };
        (self.sample_id, form)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample {
    pub id: String,
    pub sample: SoilSample,
}

/// Reads a CSV soil report. Rows are numbered from 1 after the header; the
/// first invalid row fails the whole batch.
pub fn read_samples_csv<R: Read>(reader: R) -> Result<Vec<LabeledSample>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (index, row) in csv_reader.deserialize::<SoilReportRow>().enumerate() {
        let row_number = index + 1;
        let wrap = |source: AdvisorError| AdvisorError::CsvRowError {
            row: row_number,
            source: Box::new(source),
        };

        let (sample_id, form) = row.map_err(|e| wrap(e.into()))?.into_parts();
        let sample = SoilSample::try_from(&form).map_err(wrap)?;
        let id = sample_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("sample-{}", row_number));
        samples.push(LabeledSample { id, sample });
    }

    tracing::debug!("Read {} samples from soil report", samples.len());
    Ok(samples)
}
