use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::services::estimate_sheet::EstimateSheet;

#[derive(Error, Debug)]
pub enum SheetYamlError {
    #[error("failed to write sheet yaml: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize sheet yaml: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

#[derive(Serialize)]
struct SheetRecord {
    lines: Vec<LineRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SummaryRecord>,
}

#[derive(Serialize)]
struct LineRecord {
    task_name: String,
    optimistic: f64,
    nominal: f64,
    pessimistic: f64,
    valid: bool,
    mu: Option<f64>,
    sigma: Option<f64>,
}

#[derive(Serialize)]
struct SummaryRecord {
    all_valid: bool,
    valid_line_count: usize,
    mu: Option<f64>,
    sigma: Option<f64>,
}

pub fn serialize_sheet_to_yaml_string(sheet: &EstimateSheet) -> Result<String, SheetYamlError> {
    let record = SheetRecord {
        lines: sheet
            .lines()
            .iter()
            .map(|line| LineRecord {
                task_name: line.task_name.clone(),
                optimistic: line.optimistic,
                nominal: line.nominal,
                pessimistic: line.pessimistic,
                valid: line.is_valid(),
                mu: line.mu(),
                sigma: line.sigma(),
            })
            .collect(),
        summary: sheet.summary().map(|summary| SummaryRecord {
            all_valid: summary.all_valid,
            valid_line_count: sheet.valid_lines().len(),
            mu: summary.mu,
            sigma: summary.sigma,
        }),
    };
    Ok(serde_yaml::to_string(&record)?)
}

pub fn serialize_sheet_to_yaml<W: Write>(writer: &mut W, sheet: &EstimateSheet) -> Result<(), SheetYamlError> {
    let yaml = serialize_sheet_to_yaml_string(sheet)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}
