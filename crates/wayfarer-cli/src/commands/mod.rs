// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs stays focused on parsing and
// dispatch.

pub mod cities;
pub mod route;
