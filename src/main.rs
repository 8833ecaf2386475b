use clap::Parser;
use estimates::commands::base_commands::{CliArgs, Commands};
use estimates::commands::calculate_cmd::calculate_command;
use estimates::commands::completions_cmd::completions_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(cmd),
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
}
