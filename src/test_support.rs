use crate::domain::estimate_line::EstimateLine;
use crate::services::estimate_sheet::EstimateSheet;

pub fn line(name: &str, optimistic: f64, nominal: f64, pessimistic: f64) -> EstimateLine {
    EstimateLine::new(name, optimistic, nominal, pessimistic)
}

pub fn sheet_of(lines: &[(&str, f64, f64, f64)]) -> EstimateSheet {
    EstimateSheet::from_lines(
        lines
            .iter()
            .map(|(name, o, n, p)| line(name, *o, *n, *p))
            .collect(),
    )
}
