use clap::CommandFactory;

use crate::commands::base_commands::{CliArgs, Commands};

pub fn completions_command(cmd: Commands) {
    if let Commands::Completions { shell } = cmd {
        let mut command = CliArgs::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    }
}
