use crate::services::estimate_sheet::EstimateSheet;

pub const PLACEHOLDER: &str = "-";
pub const SUMMARY_LABEL: &str = "Total";

/// One decimal place, or a dash when there is no value.
///
/// Exact halves such as `0.25` round away from zero; `format!` alone would
/// round them to even.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.1}", round_tenths(value)),
        None => PLACEHOLDER.to_string(),
    }
}

fn round_tenths(value: f64) -> f64 {
    let scaled = value * 10.0;
    // fma residual is zero only when `value * 10` is exact
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        scaled.round() / 10.0
    } else {
        value
    }
}

pub fn format_sheet_report(sheet: &EstimateSheet) -> String {
    let mut lines = Vec::new();
    lines.push("# | Task | O | N | P | mu | sigma".to_string());
    lines.push("--|------|---|---|---|----|------".to_string());
    for (i, line) in sheet.lines().iter().enumerate() {
        lines.push(format!(
            "{number} | {name} | {o} | {n} | {p} | {mu} | {sigma}",
            number = i + 1,
            name = line.task_name,
            o = line.optimistic,
            n = line.nominal,
            p = line.pessimistic,
            mu = format_value(line.mu()),
            sigma = format_value(line.sigma()),
        ));
    }

    if let Some(summary) = sheet.summary() {
        lines.push(format!(
            "  | {SUMMARY_LABEL} |   |   |   | {mu} | {sigma}",
            mu = format_value(summary.mu),
            sigma = format_value(summary.sigma),
        ));
    }

    lines.join("\n")
}
