use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::network::{CityName, RouteEdge, TravelNetwork};

/// Edge attribute selectable as the optimisation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightDimension {
    #[default]
    Distance,
    Cost,
    Time,
}

impl fmt::Display for WeightDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            WeightDimension::Distance => "distance",
            WeightDimension::Cost => "cost",
            WeightDimension::Time => "time",
        };
        f.write_str(value)
    }
}

/// Outcome of a point-to-point search.
///
/// An unreachable destination is a normal result, not an error: the path is
/// empty and the total weight is positive infinity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<CityName>,
    pub total_weight: f64,
    pub dimension: WeightDimension,
}

impl PathResult {
    pub fn is_unreachable(&self) -> bool {
        self.total_weight.is_infinite()
    }

    /// Number of hops in the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub(crate) fn unreachable(dimension: WeightDimension) -> Self {
        Self {
            path: Vec::new(),
            total_weight: f64::INFINITY,
            dimension,
        }
    }
}

/// Run Dijkstra's algorithm between two registered cities, minimising the
/// chosen weight dimension.
///
/// Equal-weight frontier entries are popped in lexicographic city-name order,
/// so results are deterministic and exact-match testable.
pub fn find_path(
    network: &TravelNetwork,
    source: &str,
    destination: &str,
    dimension: WeightDimension,
) -> Result<PathResult> {
    network.require_city(source)?;
    network.require_city(destination)?;

    if source == destination {
        return Ok(PathResult {
            path: vec![source.to_string()],
            total_weight: 0.0,
            dimension,
        });
    }

    let mut best: HashMap<CityName, f64> = HashMap::new();
    let mut parents: HashMap<CityName, CityName> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    best.insert(source.to_string(), 0.0);
    frontier.push(FrontierEntry::new(source.to_string(), 0.0));

    while let Some(entry) = frontier.pop() {
        let current = entry.weight.0;
        // Skip entries made stale by a later relaxation.
        if current > *best.get(&entry.city).unwrap_or(&f64::INFINITY) {
            continue;
        }

        if entry.city == destination {
            return Ok(PathResult {
                path: reconstruct_path(&parents, source, destination),
                total_weight: current,
                dimension,
            });
        }

        for edge in network.neighbours(&entry.city) {
            let candidate = current + edge_weight(edge, dimension);
            if candidate < *best.get(&edge.target).unwrap_or(&f64::INFINITY) {
                best.insert(edge.target.clone(), candidate);
                parents.insert(edge.target.clone(), entry.city.clone());
                frontier.push(FrontierEntry::new(edge.target.clone(), candidate));
            }
        }
    }

    Ok(PathResult::unreachable(dimension))
}

/// Distance-optimal path between two cities.
pub fn find_shortest_path(
    network: &TravelNetwork,
    source: &str,
    destination: &str,
) -> Result<PathResult> {
    find_path(network, source, destination, WeightDimension::Distance)
}

/// Cost-optimal path between two cities.
pub fn find_cheapest_path(
    network: &TravelNetwork,
    source: &str,
    destination: &str,
) -> Result<PathResult> {
    find_path(network, source, destination, WeightDimension::Cost)
}

/// Time-optimal path between two cities.
pub fn find_fastest_path(
    network: &TravelNetwork,
    source: &str,
    destination: &str,
) -> Result<PathResult> {
    find_path(network, source, destination, WeightDimension::Time)
}

fn edge_weight(edge: &RouteEdge, dimension: WeightDimension) -> f64 {
    match dimension {
        WeightDimension::Distance => edge.distance,
        WeightDimension::Cost => edge.cost,
        WeightDimension::Time => edge.time,
    }
}

fn reconstruct_path(
    parents: &HashMap<CityName, CityName>,
    source: &str,
    destination: &str,
) -> Vec<CityName> {
    let mut path = vec![destination.to_string()];
    let mut current = destination.to_string();
    while current != source {
        match parents.get(&current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous.clone();
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    city: CityName,
    weight: FloatOrd,
}

impl FrontierEntry {
    fn new(city: CityName, weight: f64) -> Self {
        Self {
            city,
            weight: FloatOrd(weight),
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by weight; equal
        // weights pop the lexicographically smaller city first.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
