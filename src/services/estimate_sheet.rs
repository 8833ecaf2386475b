//! Editable sheet of estimate lines for front ends that add, remove and
//! edit rows by index. The `calculate` command only builds and summarizes it.

use thiserror::Error;

use crate::domain::estimate_line::EstimateLine;
use crate::services::aggregation::{all_valid, summary_mu, summary_sigma, valid_lines};

#[derive(Error, Debug, PartialEq)]
pub enum SheetError {
    #[error("line index {index} out of range for sheet with {len} lines")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Totals row shown beneath the lines of a non-empty sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub all_valid: bool,
    pub mu: Option<f64>,
    pub sigma: Option<f64>,
}

/// Ordered list of estimate lines, edited by index.
///
/// Lines are never modified in place: every edit builds a new line with one
/// of the `with_*` updaters and swaps it into its slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EstimateSheet {
    lines: Vec<EstimateLine>,
}

impl EstimateSheet {
    /// A sheet seeded with a single default line.
    pub fn new() -> Self {
        Self::from_lines(vec![EstimateLine::create_default()])
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<EstimateLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[EstimateLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Appends a copy of the last line, or a default line if there is none.
    pub fn add_line(&mut self) {
        let next = self
            .lines
            .last()
            .cloned()
            .unwrap_or_else(EstimateLine::create_default);
        self.lines.push(next);
    }

    pub fn remove_line_at(&mut self, index: usize) -> Result<EstimateLine, SheetError> {
        self.check_index(index)?;
        Ok(self.lines.remove(index))
    }

    pub fn replace_line_at(&mut self, index: usize, line: EstimateLine) -> Result<(), SheetError> {
        self.check_index(index)?;
        self.lines[index] = line;
        Ok(())
    }

    pub fn set_task_name(&mut self, index: usize, task_name: &str) -> Result<(), SheetError> {
        let line = self.line_at(index)?.with_task_name(task_name);
        self.replace_line_at(index, line)
    }

    pub fn set_optimistic(&mut self, index: usize, optimistic: f64) -> Result<(), SheetError> {
        let line = self.line_at(index)?.with_optimistic(optimistic);
        self.replace_line_at(index, line)
    }

    pub fn set_nominal(&mut self, index: usize, nominal: f64) -> Result<(), SheetError> {
        let line = self.line_at(index)?.with_nominal(nominal);
        self.replace_line_at(index, line)
    }

    pub fn set_pessimistic(&mut self, index: usize, pessimistic: f64) -> Result<(), SheetError> {
        let line = self.line_at(index)?.with_pessimistic(pessimistic);
        self.replace_line_at(index, line)
    }

    pub fn valid_lines(&self) -> Vec<EstimateLine> {
        valid_lines(&self.lines)
    }

    /// `None` for an empty sheet; the totals row is not shown at all then.
    pub fn summary(&self) -> Option<Summary> {
        if self.lines.is_empty() {
            return None;
        }
        Some(Summary {
            all_valid: all_valid(&self.lines),
            mu: summary_mu(&self.lines),
            sigma: summary_sigma(&self.lines),
        })
    }

    fn line_at(&self, index: usize) -> Result<&EstimateLine, SheetError> {
        self.lines.get(index).ok_or(SheetError::IndexOutOfRange {
            index,
            len: self.lines.len(),
        })
    }

    fn check_index(&self, index: usize) -> Result<(), SheetError> {
        self.line_at(index).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{line, sheet_of};

    #[test]
    fn new_sheet_holds_one_default_line() {
        let sheet = EstimateSheet::new();
        assert_eq!(sheet.lines(), &[EstimateLine::create_default()]);
        let summary = sheet.summary().unwrap();
        assert!(summary.all_valid);
        assert_eq!(summary.mu, Some(1.0));
        assert_eq!(summary.sigma, Some(0.0));
    }

    #[test]
    fn add_line_copies_the_last_line() {
        let mut sheet = sheet_of(&[("a", 1.0, 1.0, 1.0), ("b", 2.0, 4.0, 6.0)]);
        sheet.add_line();
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.lines()[2], line("b", 2.0, 4.0, 6.0));
    }

    #[test]
    fn add_line_to_empty_sheet_uses_default() {
        let mut sheet = EstimateSheet::empty();
        sheet.add_line();
        assert_eq!(sheet.lines(), &[EstimateLine::create_default()]);
    }

    #[test]
    fn removing_the_only_line_suppresses_the_summary() {
        let mut sheet = EstimateSheet::new();
        let removed = sheet.remove_line_at(0).unwrap();
        assert_eq!(removed, EstimateLine::create_default());
        assert!(sheet.is_empty());
        assert_eq!(sheet.summary(), None);
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let mut sheet = EstimateSheet::new();
        assert_eq!(
            sheet.remove_line_at(1),
            Err(SheetError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn replace_line_at_swaps_only_that_slot() {
        let mut sheet = sheet_of(&[("a", 1.0, 1.0, 1.0), ("b", 1.0, 1.0, 1.0)]);
        sheet.replace_line_at(1, line("c", 2.0, 4.0, 6.0)).unwrap();
        assert_eq!(sheet.lines()[0], line("a", 1.0, 1.0, 1.0));
        assert_eq!(sheet.lines()[1], line("c", 2.0, 4.0, 6.0));

        assert!(sheet.replace_line_at(2, line("d", 1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn field_edits_go_through_updaters() {
        let mut sheet = EstimateSheet::new();
        sheet.set_task_name(0, "design").unwrap();
        sheet.set_pessimistic(0, 6.0).unwrap();
        sheet.set_nominal(0, 4.0).unwrap();
        sheet.set_optimistic(0, 2.0).unwrap();
        assert_eq!(sheet.lines()[0], line("design", 2.0, 4.0, 6.0));
        assert_eq!(
            sheet.set_nominal(3, 1.0),
            Err(SheetError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn mid_edit_ordering_violation_blanks_summary_until_fixed() {
        let mut sheet = sheet_of(&[("a", 1.0, 1.0, 1.0), ("b", 2.0, 4.0, 6.0)]);
        sheet.set_optimistic(1, 5.0).unwrap();
        let summary = sheet.summary().unwrap();
        assert!(!summary.all_valid);
        assert_eq!(summary.mu, None);
        assert_eq!(summary.sigma, None);
        assert_eq!(sheet.valid_lines(), vec![line("a", 1.0, 1.0, 1.0)]);

        sheet.set_optimistic(1, 2.0).unwrap();
        let summary = sheet.summary().unwrap();
        assert!(summary.all_valid);
        assert!((summary.mu.unwrap() - 5.0).abs() < 1e-9);
    }
}
