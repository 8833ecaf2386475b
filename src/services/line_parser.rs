use thiserror::Error;

use crate::domain::estimate_line::{DEFAULT_TASK_NAME, EstimateLine};

#[derive(Error, Debug, PartialEq)]
pub enum LineParseError {
    #[error("expected three comma-separated estimates in '{0}'")]
    FieldCount(String),
    #[error("invalid number '{value}' in '{input}'")]
    InvalidNumber { input: String, value: String },
}

/// Parses `[NAME=]OPTIMISTIC,NOMINAL,PESSIMISTIC`.
///
/// Only the syntax is checked. Estimates out of order are returned as-is and
/// show up as an invalid line.
pub fn parse_line_spec(input: &str) -> Result<EstimateLine, LineParseError> {
    let (name, numbers) = match input.split_once('=') {
        Some((name, numbers)) => (name.trim(), numbers),
        None => (DEFAULT_TASK_NAME, input),
    };

    let fields: Vec<&str> = numbers.split(',').map(str::trim).collect();
    let [optimistic, nominal, pessimistic] = fields.as_slice() else {
        return Err(LineParseError::FieldCount(input.to_string()));
    };

    Ok(EstimateLine::new(
        name,
        parse_number(input, optimistic)?,
        parse_number(input, nominal)?,
        parse_number(input, pessimistic)?,
    ))
}

fn parse_number(input: &str, value: &str) -> Result<f64, LineParseError> {
    value.parse::<f64>().map_err(|_| LineParseError::InvalidNumber {
        input: input.to_string(),
        value: value.to_string(),
    })
}
