use clap::Parser;
use colored::Colorize;
use digraph_core::cli::{self, Cli};
use digraph_core::exit::DigraphExit;

fn main() -> DigraphExit {
    let cli = Cli::parse();
    let globals = cli.globals();

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, globals)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(DigraphExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            DigraphExit::Error
        }
    }
}
