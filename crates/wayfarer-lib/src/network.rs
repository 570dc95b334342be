use std::collections::HashMap;

use crate::error::{Error, Result};

/// Minimum Jaro-Winkler similarity before a city name is offered as a
/// suggestion for a misspelled input.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Case-sensitive identifier for a city.
pub type CityName = String;

/// Registered city with open key/value metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct City {
    pub name: CityName,
    pub metadata: HashMap<String, String>,
}

/// Directed edge within the travel network.
///
/// Edges carry three independent weights; the search layer picks which one to
/// optimise. `add_route` always inserts edges in symmetric pairs, so the table
/// as a whole stays undirected.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEdge {
    pub target: CityName,
    pub distance: f64,
    pub cost: f64,
    pub time: f64,
}

/// In-memory travel network: the set of known cities plus an adjacency table.
///
/// Parallel edges between the same pair of cities are kept as a multiset and
/// all of them participate in routing. Every registered city owns an
/// adjacency row, even when it has no routes yet.
#[derive(Debug, Clone, Default)]
pub struct TravelNetwork {
    cities: HashMap<CityName, City>,
    routes: HashMap<CityName, Vec<RouteEdge>>,
}

/// Edges temporarily removed around one city, held for exact restoration.
#[derive(Debug)]
pub(crate) struct DetachedEdges {
    city: CityName,
    outgoing: Vec<RouteEdge>,
    inbound: Vec<(CityName, RouteEdge)>,
}

impl TravelNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city. Returns `false` without mutating anything when the
    /// name is already taken; duplicate probing is an expected calling
    /// pattern, not an error.
    pub fn add_city(&mut self, name: impl Into<CityName>, metadata: HashMap<String, String>) -> bool {
        let name = name.into();
        if self.cities.contains_key(&name) {
            return false;
        }
        self.routes.entry(name.clone()).or_default();
        self.cities.insert(name.clone(), City { name, metadata });
        true
    }

    /// Insert an undirected route between two registered cities.
    ///
    /// Existing edges between the pair are never deduplicated; repeated calls
    /// create parallel edges that all stay visible to the search layer.
    pub fn add_route(&mut self, a: &str, b: &str, distance: f64, cost: f64, time: f64) -> Result<()> {
        self.require_city(a)?;
        self.require_city(b)?;
        validate_weight(a, b, "distance", distance)?;
        validate_weight(a, b, "cost", cost)?;
        validate_weight(a, b, "time", time)?;

        self.routes.entry(a.to_string()).or_default().push(RouteEdge {
            target: b.to_string(),
            distance,
            cost,
            time,
        });
        self.routes.entry(b.to_string()).or_default().push(RouteEdge {
            target: a.to_string(),
            distance,
            cost,
            time,
        });
        Ok(())
    }

    /// Remove every edge between `a` and `b` in both directions. A no-op when
    /// no such edges exist.
    pub fn remove_route(&mut self, a: &str, b: &str) {
        if let Some(edges) = self.routes.get_mut(a) {
            edges.retain(|edge| edge.target != b);
        }
        if let Some(edges) = self.routes.get_mut(b) {
            edges.retain(|edge| edge.target != a);
        }
    }

    /// Registered city identifiers, in no meaningful order.
    pub fn all_cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn contains_city(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Outgoing edges for a city, empty when the city is unknown.
    pub fn neighbours(&self, city: &str) -> &[RouteEdge] {
        self.routes.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// City names similar to `name`, best match first, for error suggestions.
    pub fn fuzzy_city_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .cities
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    pub(crate) fn require_city(&self, name: &str) -> Result<()> {
        if self.cities.contains_key(name) {
            Ok(())
        } else {
            Err(self.unknown_city(name))
        }
    }

    pub(crate) fn unknown_city(&self, name: &str) -> Error {
        Error::UnknownCity {
            name: name.to_string(),
            suggestions: self.fuzzy_city_matches(name, 3),
        }
    }

    /// Remove every edge touching `city`, in both directions, returning the
    /// removed edges so [`restore_city_edges`](Self::restore_city_edges) can
    /// put the table back to its exact pre-call multiset.
    pub(crate) fn detach_city_edges(&mut self, city: &str) -> DetachedEdges {
        let outgoing = self
            .routes
            .get_mut(city)
            .map(std::mem::take)
            .unwrap_or_default();

        let mut inbound = Vec::new();
        for (name, edges) in self.routes.iter_mut() {
            if name == city {
                continue;
            }
            let mut kept = Vec::with_capacity(edges.len());
            for edge in edges.drain(..) {
                if edge.target == city {
                    inbound.push((name.clone(), edge));
                } else {
                    kept.push(edge);
                }
            }
            *edges = kept;
        }

        DetachedEdges {
            city: city.to_string(),
            outgoing,
            inbound,
        }
    }

    /// Reattach edges removed by [`detach_city_edges`](Self::detach_city_edges).
    pub(crate) fn restore_city_edges(&mut self, detached: DetachedEdges) {
        self.routes
            .entry(detached.city)
            .or_default()
            .extend(detached.outgoing);
        for (name, edge) in detached.inbound {
            self.routes.entry(name).or_default().push(edge);
        }
    }
}

fn validate_weight(from: &str, to: &str, field: &'static str, value: f64) -> Result<()> {
    // `>=` also rejects NaN, which would otherwise poison the search.
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            field,
            value,
        })
    }
}

#[cfg(test)]
impl TravelNetwork {
    /// Sorted, ordering-insensitive snapshot of every directed edge, used by
    /// tests asserting the edge multiset is preserved.
    pub(crate) fn edge_multiset(&self) -> Vec<(String, String, u64, u64, u64)> {
        let mut edges: Vec<_> = self
            .routes
            .iter()
            .flat_map(|(from, list)| {
                list.iter().map(move |edge| {
                    (
                        from.clone(),
                        edge.target.clone(),
                        edge.distance.to_bits(),
                        edge.cost.to_bits(),
                        edge.time.to_bits(),
                    )
                })
            })
            .collect();
        edges.sort();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_with(names: &[&str]) -> TravelNetwork {
        let mut network = TravelNetwork::new();
        for name in names {
            assert!(network.add_city(*name, HashMap::new()));
        }
        network
    }

    #[test]
    fn add_city_rejects_duplicates_without_overwriting() {
        let mut network = TravelNetwork::new();
        let mut metadata = HashMap::new();
        metadata.insert("country".to_string(), "UK".to_string());
        assert!(network.add_city("Aberdeen", metadata));

        assert!(!network.add_city("Aberdeen", HashMap::new()));
        let city = network.city("Aberdeen").expect("city registered");
        assert_eq!(city.metadata.get("country").map(String::as_str), Some("UK"));
    }

    #[test]
    fn add_route_inserts_symmetric_pair() {
        let mut network = network_with(&["A", "B"]);
        network.add_route("A", "B", 10.0, 5.0, 2.0).unwrap();

        assert_eq!(network.neighbours("A").len(), 1);
        assert_eq!(network.neighbours("B").len(), 1);
        assert_eq!(network.neighbours("A")[0].target, "B");
        assert_eq!(network.neighbours("B")[0].target, "A");
        assert_eq!(network.neighbours("B")[0].distance, 10.0);
    }

    #[test]
    fn parallel_edges_are_kept_as_a_multiset() {
        let mut network = network_with(&["A", "B"]);
        network.add_route("A", "B", 10.0, 5.0, 2.0).unwrap();
        network.add_route("A", "B", 12.0, 3.0, 1.0).unwrap();

        assert_eq!(network.neighbours("A").len(), 2);
        assert_eq!(network.neighbours("B").len(), 2);
    }

    #[test]
    fn add_route_rejects_negative_weights() {
        let mut network = network_with(&["A", "B"]);
        let error = network.add_route("A", "B", 10.0, -1.0, 2.0).unwrap_err();
        assert!(matches!(error, Error::InvalidWeight { field: "cost", .. }));
        assert!(network.neighbours("A").is_empty());
    }

    #[test]
    fn add_route_rejects_nan_weights() {
        let mut network = network_with(&["A", "B"]);
        let error = network.add_route("A", "B", f64::NAN, 1.0, 2.0).unwrap_err();
        assert!(matches!(error, Error::InvalidWeight { field: "distance", .. }));
    }

    #[test]
    fn add_route_requires_registered_cities() {
        let mut network = network_with(&["A"]);
        let error = network.add_route("A", "Nowhere", 1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(error, Error::UnknownCity { .. }));
    }

    #[test]
    fn remove_route_drops_all_parallel_edges_in_both_directions() {
        let mut network = network_with(&["A", "B", "C"]);
        network.add_route("A", "B", 10.0, 5.0, 2.0).unwrap();
        network.add_route("A", "B", 12.0, 3.0, 1.0).unwrap();
        network.add_route("A", "C", 7.0, 7.0, 7.0).unwrap();

        network.remove_route("A", "B");

        assert_eq!(network.neighbours("A").len(), 1);
        assert_eq!(network.neighbours("A")[0].target, "C");
        assert!(network.neighbours("B").is_empty());
    }

    #[test]
    fn remove_route_is_a_noop_when_no_edges_exist() {
        let mut network = network_with(&["A", "B"]);
        network.remove_route("A", "B");
        network.remove_route("A", "Nowhere");
        assert!(network.neighbours("A").is_empty());
    }

    #[test]
    fn add_then_remove_restores_the_pre_call_multiset() {
        let mut network = network_with(&["A", "B", "C"]);
        network.add_route("A", "C", 7.0, 7.0, 7.0).unwrap();
        let before = network.edge_multiset();

        network.add_route("A", "B", 10.0, 5.0, 2.0).unwrap();
        network.remove_route("A", "B");

        assert_eq!(network.edge_multiset(), before);
    }

    #[test]
    fn detach_and_restore_preserve_the_edge_multiset() {
        let mut network = network_with(&["A", "B", "C"]);
        network.add_route("A", "B", 10.0, 5.0, 2.0).unwrap();
        network.add_route("B", "C", 10.0, 5.0, 2.0).unwrap();
        network.add_route("B", "C", 4.0, 1.0, 1.0).unwrap();
        let before = network.edge_multiset();

        let detached = network.detach_city_edges("B");
        assert!(network.neighbours("B").is_empty());
        assert!(network.neighbours("A").is_empty());
        assert!(network.neighbours("C").is_empty());

        network.restore_city_edges(detached);
        assert_eq!(network.edge_multiset(), before);
    }

    #[test]
    fn fuzzy_city_matches_suggest_close_names() {
        let network = network_with(&["Aberdeen", "Birmingham", "Cardiff"]);
        let suggestions = network.fuzzy_city_matches("Aberden", 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("Aberdeen"));
    }

    #[test]
    fn all_cities_lists_every_registration() {
        let network = network_with(&["A", "B", "C"]);
        let mut names: Vec<&str> = network.all_cities().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(network.city_count(), 3);
    }
}
