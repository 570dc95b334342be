//! Cities command handler listing the registered network.

use std::path::Path;

use anyhow::{Context, Result};

use wayfarer_lib::load_network;

/// Handle the cities subcommand.
pub fn handle_cities(network_path: &Path) -> Result<()> {
    let network = load_network(network_path).with_context(|| {
        format!("failed to load network from {}", network_path.display())
    })?;

    let mut names: Vec<&str> = network.all_cities().collect();
    names.sort_unstable();

    println!("{} cities", names.len());
    for name in names {
        println!("- {name}");
    }
    Ok(())
}
