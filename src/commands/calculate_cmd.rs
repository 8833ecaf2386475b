use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_sheet_report;
use crate::services::estimate_sheet::EstimateSheet;
use crate::services::line_parser::{LineParseError, parse_line_spec};
use crate::services::sheet_yaml::serialize_sheet_to_yaml_string;

pub fn calculate_command(cmd: Commands) {
    if let Commands::Calculate { lines, output } = cmd {
        let sheet = match build_sheet(&lines) {
            Ok(sheet) => sheet,
            Err(e) => {
                eprintln!("Failed to parse estimate line: {e:?}");
                return;
            }
        };

        println!("{}", format_sheet_report(&sheet));

        let Some(output) = output else {
            return;
        };

        let yaml = match serialize_sheet_to_yaml_string(&sheet) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize estimate report: {e:?}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write estimate report: {e:?}");
        } else {
            println!("Report written to {output}");
        }
    }
}

/// Without any specs the sheet starts with one default line.
fn build_sheet(specs: &[String]) -> Result<EstimateSheet, LineParseError> {
    if specs.is_empty() {
        return Ok(EstimateSheet::new());
    }
    let lines = specs
        .iter()
        .map(|spec| parse_line_spec(spec))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EstimateSheet::from_lines(lines))
}
