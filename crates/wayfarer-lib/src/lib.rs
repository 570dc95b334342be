//! Wayfarer library entry points.
//!
//! This crate models a transportation network as a weighted undirected graph
//! and answers routing queries: cheapest/fastest/shortest point-to-point
//! travel, multi-waypoint itineraries, and diverse alternative routes. The
//! companion planners (day itineraries, activity catalog, music helpers) are
//! plain containers layered beside the engine. Higher-level consumers (CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod activities;
pub mod alternatives;
pub mod composer;
pub mod dataset;
pub mod error;
pub mod itinerary;
pub mod music;
pub mod network;
pub mod search;

pub use alternatives::find_alternative_paths;
pub use composer::find_path_with_stops;
pub use dataset::load_network;
pub use error::{Error, Result};
pub use network::{City, CityName, RouteEdge, TravelNetwork};
pub use search::{
    find_cheapest_path, find_fastest_path, find_path, find_shortest_path, PathResult,
    WeightDimension,
};
