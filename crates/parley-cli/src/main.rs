//! Parley CLI - ask typed, validated questions on the terminal
//!
//! This is the command-line interface for Parley. It exposes the prompt
//! engine as a one-shot `ask` command for shell scripts that need a
//! validated answer from the user.

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use parley_core::console::StdConsole;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask(args) => {
            let answer = commands::ask(StdConsole::new(), &args)?;
            println!("{}", answer);
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
