pub mod aggregation;
pub mod estimate_sheet;
pub mod line_parser;
pub mod sheet_yaml;
