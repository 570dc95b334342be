//! JSON network file loading.
//!
//! A network file is a plain JSON document with a `cities` array and a
//! `routes` array; see `docs/fixtures/minimal_network.json` for the shape.
//! Nothing is persisted back: the network exists only for the lifetime of the
//! process.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::network::TravelNetwork;

/// On-disk shape of a network file.
#[derive(Debug, Deserialize)]
pub struct NetworkFile {
    #[serde(default)]
    pub cities: Vec<CityRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CityRecord {
    pub name: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub cost: f64,
    pub time: f64,
}

/// Load a travel network from a JSON file.
///
/// Duplicate city entries keep the first registration and log a warning;
/// routes referencing unknown cities or carrying negative weights abort the
/// load with an error.
pub fn load_network(path: &Path) -> Result<TravelNetwork> {
    let raw = fs::read_to_string(path)?;
    let file: NetworkFile = serde_json::from_str(&raw)?;

    let mut network = TravelNetwork::new();
    for record in file.cities {
        let name = record.name.clone();
        if !network.add_city(record.name, record.metadata) {
            warn!(city = %name, "duplicate city in network file; keeping the first entry");
        }
    }

    let route_count = file.routes.len();
    for record in &file.routes {
        network.add_route(
            &record.from,
            &record.to,
            record.distance,
            record.cost,
            record.time,
        )?;
    }

    debug!(
        cities = network.city_count(),
        routes = route_count,
        path = %path.display(),
        "loaded travel network"
    );
    Ok(network)
}
