use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute PERT expected values and standard deviations for a set of tasks
    Calculate {
        /// Task estimate as [NAME=]OPTIMISTIC,NOMINAL,PESSIMISTIC (repeatable)
        #[arg(short, long = "line", value_name = "SPEC", allow_hyphen_values = true)]
        lines: Vec<String>,
        /// Optional YAML report file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
