use crate::error::Result;
use crate::network::TravelNetwork;
use crate::search::{find_path, PathResult, WeightDimension};

/// Compose a distance-optimal itinerary visiting `stops` in order between
/// `source` and `destination`.
///
/// Each consecutive pair becomes one leg; the duplicate junction city shared
/// with the previous leg is dropped while concatenating. When a leg is
/// unreachable, composition stops at that leg: the result carries the path
/// accumulated so far and an infinite total, and later legs are not computed.
pub fn find_path_with_stops(
    network: &TravelNetwork,
    source: &str,
    destination: &str,
    stops: &[String],
) -> Result<PathResult> {
    network.require_city(source)?;
    for stop in stops {
        network.require_city(stop)?;
    }
    network.require_city(destination)?;

    let mut waypoints: Vec<&str> = Vec::with_capacity(stops.len() + 2);
    waypoints.push(source);
    waypoints.extend(stops.iter().map(String::as_str));
    waypoints.push(destination);

    let mut path = Vec::new();
    let mut total_weight = 0.0;

    for pair in waypoints.windows(2) {
        let leg = find_path(network, pair[0], pair[1], WeightDimension::Distance)?;
        if leg.is_unreachable() {
            return Ok(PathResult {
                path,
                total_weight: f64::INFINITY,
                dimension: WeightDimension::Distance,
            });
        }

        let skip = if path.is_empty() { 0 } else { 1 };
        path.extend(leg.path.into_iter().skip(skip));
        total_weight += leg.total_weight;
    }

    Ok(PathResult {
        path,
        total_weight,
        dimension: WeightDimension::Distance,
    })
}
