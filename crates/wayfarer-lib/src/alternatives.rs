use tracing::debug;

use crate::error::Result;
use crate::network::TravelNetwork;
use crate::search::{find_path, PathResult, WeightDimension};

/// Produce up to `k` distance-optimal routes between `source` and
/// `destination`, the primary path first.
///
/// Each interior city of the primary path is excluded in turn: all edges
/// touching it are detached, the route recomputed, and the edges restored
/// before the outcome is examined, so the network's edge multiset is
/// identical to its pre-call state on every execution path. An exclusion
/// whose recomputation is unreachable is skipped, not an error.
///
/// Known limitation: excluding a single node does not guarantee edge-disjoint
/// or materially different routes; some exclusions reconverge to the same or
/// a near-identical path.
pub fn find_alternative_paths(
    network: &mut TravelNetwork,
    source: &str,
    destination: &str,
    k: usize,
) -> Result<Vec<PathResult>> {
    network.require_city(source)?;
    network.require_city(destination)?;

    if k == 0 {
        return Ok(Vec::new());
    }

    let primary = find_path(network, source, destination, WeightDimension::Distance)?;
    if primary.is_unreachable() {
        return Ok(vec![primary]);
    }

    let interior: Vec<String> = if primary.path.len() > 2 {
        primary.path[1..primary.path.len() - 1].to_vec()
    } else {
        Vec::new()
    };
    let mut results = vec![primary];

    for city in interior {
        if results.len() >= k {
            break;
        }

        debug!(city = %city, "excluding city to search for an alternative route");
        let detached = network.detach_city_edges(&city);
        let attempt = find_path(network, source, destination, WeightDimension::Distance);
        network.restore_city_edges(detached);

        let candidate = attempt?;
        if !candidate.is_unreachable() {
            results.push(candidate);
        }
    }

    Ok(results)
}
