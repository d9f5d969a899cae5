use crate::core::analysis::SoilAnalysis;
use crate::domain::model::{Category, OutputFormat, Parameter, Tier};
use crate::utils::error::{AdvisorError, Result};
use crate::utils::i18n::{label, parameter_label, status_marker, tier_label, Label, Language};

pub fn to_json(analyses: &[SoilAnalysis]) -> Result<String> {
    let json = match analyses {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}

fn csv_header() -> Vec<String> {
    let mut header = vec!["sample_id".to_string()];
    for parameter in Parameter::ALL {
        header.push(parameter.column().to_string());
        header.push(format!("{}_category", parameter.column()));
    }
    header.push("top_crop".to_string());
    header.push("top_crop_score".to_string());
    header.push("recommendations".to_string());
    header
}

/// One row per analysis; recommendations are joined with " | ".
pub fn to_csv(analyses: &[SoilAnalysis]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(csv_header())?;

    for (index, analysis) in analyses.iter().enumerate() {
        let mut record = vec![analysis
            .sample_id
            .clone()
            .unwrap_or_else(|| format!("sample-{}", index + 1))];
        for reading in &analysis.readings {
            record.push(reading.value.to_string());
            record.push(reading.category.as_str().to_string());
        }
        let top = analysis.crop_matches.first();
        record.push(top.map(|m| m.crop.clone()).unwrap_or_default());
        record.push(
            top.map(|m| m.suitability_score.to_string())
                .unwrap_or_default(),
        );
        record.push(analysis.recommendations.join(" | "));
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AdvisorError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn tier_of(category: Category) -> Option<Tier> {
    match category {
        Category::Tier(tier) => Some(tier),
        Category::Unknown => None,
    }
}

pub fn render_text(analysis: &SoilAnalysis, language: Language) -> String {
    let mut lines = Vec::new();

    match &analysis.sample_id {
        Some(id) => lines.push(format!("{} ({})", label(language, Label::Title), id)),
        None => lines.push(label(language, Label::Title).to_string()),
    }
    lines.push(String::new());

    if let Some(weather) = &analysis.weather {
        lines.push(format!("## {}", label(language, Label::Weather)));
        let place = if weather.country.is_empty() {
            weather.location.clone()
        } else {
            format!("{}, {}", weather.location, weather.country)
        };
        lines.push(format!("{} - {}", place, weather.description));
        lines.push(format!(
            "{}°C (feels like {}°C), humidity {}%, rain {} mm, wind {} km/h",
            weather.temperature,
            weather.feels_like,
            weather.humidity,
            weather.rainfall,
            weather.wind_speed
        ));
        lines.push(String::new());
    }

    lines.push(format!("## {}", label(language, Label::AnalysisSummary)));
    for reading in &analysis.readings {
        let unit = if reading.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", reading.unit)
        };
        lines.push(format!(
            "{} {}: {}{} [{}]",
            status_marker(reading.status),
            parameter_label(language, reading.parameter),
            reading.value,
            unit,
            tier_label(language, tier_of(reading.category))
        ));
    }
    lines.push(String::new());

    lines.push(format!("## {}", label(language, Label::Recommendations)));
    for recommendation in &analysis.recommendations {
        lines.push(format!("- {}", recommendation));
    }
    lines.push(String::new());

    if !analysis.crop_matches.is_empty() {
        lines.push(format!("## {}", label(language, Label::RecommendedCrops)));
        for crop in &analysis.crop_matches {
            lines.push(format!(
                "- {}: {}% {} ({})",
                crop.crop,
                crop.suitability_score,
                label(language, Label::Match),
                crop.label.as_str()
            ));
        }
        lines.push(String::new());
    }

    lines.push(format!("## {}", label(language, Label::GeneralTips)));
    for tip in &analysis.general_tips {
        lines.push(format!("- {}", tip));
    }

    lines.join("\n")
}

pub fn render(analyses: &[SoilAnalysis], format: OutputFormat, language: Language) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(analyses),
        OutputFormat::Csv => to_csv(analyses),
        OutputFormat::Text => Ok(analyses
            .iter()
            .map(|a| render_text(a, language))
            .collect::<Vec<_>>()
            .join("\n\n---\n\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::{analyze, AnalysisOptions};
    use crate::domain::model::SoilSample;

    fn analysis() -> SoilAnalysis {
        let sample = SoilSample {
            nitrogen: 50.0,
            phosphorus: 30.0,
            potassium: 250.0,
            ph: 6.5,
            organic_carbon: 0.8,
            moisture: 30.0,
        };
        analyze(&sample, &AnalysisOptions::default()).with_id("plot-7")
    }

    #[test]
    fn test_json_single_is_object() {
        let json = to_json(&[analysis()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sample_id"], "plot-7");
        assert_eq!(value["readings"][0]["category"], "veryLow");
        assert_eq!(value["readings"][0]["status"], "deficient");
        assert!(value.get("weather").is_none());
    }

    #[test]
    fn test_json_many_is_array() {
        let json = to_json(&[analysis(), analysis()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_csv_has_header_and_row() {
        let csv = to_csv(&[analysis()]).unwrap();
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("sample_id,nitrogen,nitrogen_category"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("plot-7,50,veryLow"));
        assert!(row.contains("Apply nitrogen-rich fertilizers"));
    }

    #[test]
    fn test_text_is_localized() {
        let en = render_text(&analysis(), Language::En);
        assert!(en.contains("## Expert Recommendations"));
        assert!(en.contains("Nitrogen: 50 kg/ha [very low]"));

        let hi = render_text(&analysis(), Language::Hi);
        assert!(hi.contains("विशेषज्ञ सिफारिशें"));
        // advisory text is not translated
        assert!(hi.contains("Apply nitrogen-rich fertilizers"));
    }
}
