//! Route command handler for computing paths between cities.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use wayfarer_lib::{
    find_alternative_paths, find_path, find_path_with_stops, load_network, PathResult,
    WeightDimension,
};

/// Arguments for the route command.
#[derive(Debug, Args)]
pub struct RouteCommandArgs {
    /// Starting city name.
    #[arg(long = "from")]
    pub from: String,

    /// Destination city name.
    #[arg(long = "to")]
    pub to: String,

    /// Weight dimension to optimise.
    #[arg(long, value_enum, default_value = "distance")]
    pub optimize: OptimizeDimension,

    /// Mandatory intermediate stop, repeatable and in order; legs are always
    /// distance-optimised.
    #[arg(long = "via")]
    pub via: Vec<String>,

    /// Return up to this many routes, the primary path included.
    #[arg(long)]
    pub alternatives: Option<usize>,

    /// Emit the result as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Weight dimension selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptimizeDimension {
    Distance,
    Cost,
    Time,
}

impl From<OptimizeDimension> for WeightDimension {
    fn from(value: OptimizeDimension) -> Self {
        match value {
            OptimizeDimension::Distance => WeightDimension::Distance,
            OptimizeDimension::Cost => WeightDimension::Cost,
            OptimizeDimension::Time => WeightDimension::Time,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route(network_path: &Path, args: &RouteCommandArgs) -> Result<()> {
    if !args.via.is_empty() && args.optimize != OptimizeDimension::Distance {
        bail!("--via itineraries are always distance-optimised; drop --optimize");
    }
    if args.alternatives.is_some() && !args.via.is_empty() {
        bail!("--alternatives cannot be combined with --via");
    }

    let mut network = load_network(network_path).with_context(|| {
        format!("failed to load network from {}", network_path.display())
    })?;

    if let Some(k) = args.alternatives {
        let results = find_alternative_paths(&mut network, &args.from, &args.to, k)
            .context("failed to compute alternative routes")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }
        if results.is_empty() {
            println!("no routes requested (k = 0)");
            return Ok(());
        }
        for (index, result) in results.iter().enumerate() {
            let label = if index == 0 { "primary" } else { "alternative" };
            print_result(label, result);
        }
        return Ok(());
    }

    let result = if args.via.is_empty() {
        find_path(&network, &args.from, &args.to, args.optimize.into())
    } else {
        find_path_with_stops(&network, &args.from, &args.to, &args.via)
    }
    .context("failed to compute route")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result("route", &result);
    }
    Ok(())
}

fn print_result(label: &str, result: &PathResult) {
    if result.is_unreachable() {
        println!("{label} ({}): no route found", result.dimension);
        return;
    }
    println!("{label} ({}): {}", result.dimension, result.path.join(" -> "));
    println!("total {}: {}", result.dimension, result.total_weight);
}
