pub mod estimate_line;
