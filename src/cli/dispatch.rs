//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Commands, GlobalArgs};
use super::handlers::{handle_components, handle_edges, handle_stats, Session};
use crate::exit::DigraphExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if configuration is invalid or the command handler fails.
pub fn execute(command: Commands, globals: GlobalArgs) -> Result<DigraphExit> {
    let session = Session::open(globals)?;
    match command {
        Commands::Edges { file, inverted } => handle_edges(&session, &file, inverted),
        Commands::Stats { file, json } => handle_stats(&session, &file, json),
        Commands::Components { file, json } => handle_components(&session, &file, json),
    }
}
