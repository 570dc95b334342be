//! Activity catalog with sorting, filtering, and search helpers.
//!
//! Independent of the routing engine; activities reference cities only by
//! location name.

use std::collections::HashMap;

/// A bookable activity at some location.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub location: String,
    pub category: String,
    pub cost: f64,
    pub rating: f64,
    pub duration_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Cost,
    Rating,
    Duration,
}

impl SortKey {
    fn value(self, activity: &Activity) -> f64 {
        match self {
            SortKey::Cost => activity.cost,
            SortKey::Rating => activity.rating,
            SortKey::Duration => activity.duration_hours,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Optional criteria for [`filter_activities`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityFilter {
    pub max_cost: Option<f64>,
    pub min_rating: Option<f64>,
    pub max_duration_hours: Option<f64>,
}

/// Activities grouped by location, with `location_N` identifiers assigned on
/// insertion.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    by_location: HashMap<String, Vec<Activity>>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an activity and return the stored record, id included.
    pub fn add(
        &mut self,
        name: &str,
        location: &str,
        category: &str,
        cost: f64,
        rating: f64,
        duration_hours: f64,
    ) -> Activity {
        let entries = self.by_location.entry(location.to_string()).or_default();
        let activity = Activity {
            id: format!("{}_{}", location, entries.len()),
            name: name.to_string(),
            location: location.to_string(),
            category: category.to_string(),
            cost,
            rating,
            duration_hours,
        };
        entries.push(activity.clone());
        activity
    }

    /// Activities registered for one location, in insertion order.
    pub fn all_for(&self, location: &str) -> &[Activity] {
        self.by_location
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Activities of one category across every location, ordered by id.
    pub fn by_category(&self, category: &str) -> Vec<&Activity> {
        let mut matches: Vec<&Activity> = self
            .by_location
            .values()
            .flatten()
            .filter(|activity| activity.category == category)
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }

    /// First activity with an exactly matching name, scanning ids in order.
    pub fn find_by_name(&self, name: &str) -> Option<&Activity> {
        let mut matches: Vec<&Activity> = self
            .by_location
            .values()
            .flatten()
            .filter(|activity| activity.name == name)
            .collect();
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches.into_iter().next()
    }
}

/// Sort activities by one numeric key.
pub fn sorted_by(mut activities: Vec<Activity>, key: SortKey, order: SortOrder) -> Vec<Activity> {
    activities.sort_by(|a, b| {
        let ordering = key.value(a).total_cmp(&key.value(b));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    activities
}

/// Activities costing at most `max_price`, cheapest first.
pub fn under_price(activities: Vec<Activity>, max_price: f64) -> Vec<Activity> {
    let mut sorted = sorted_by(activities, SortKey::Cost, SortOrder::Ascending);
    sorted.retain(|activity| activity.cost <= max_price);
    sorted
}

/// Keep only activities satisfying every supplied criterion.
pub fn filter_activities(mut activities: Vec<Activity>, filter: &ActivityFilter) -> Vec<Activity> {
    if let Some(max_cost) = filter.max_cost {
        activities.retain(|activity| activity.cost <= max_cost);
    }
    if let Some(min_rating) = filter.min_rating {
        activities.retain(|activity| activity.rating >= min_rating);
    }
    if let Some(max_duration) = filter.max_duration_hours {
        activities.retain(|activity| activity.duration_hours <= max_duration);
    }
    activities
}
