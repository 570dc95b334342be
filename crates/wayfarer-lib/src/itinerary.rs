//! Day-by-day trip planner.
//!
//! A plain container independent of the routing engine: the itinerary holds
//! days, each day holds activities, and nothing here touches the travel
//! network.

use std::fmt;

/// One scheduled activity on a day plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedActivity {
    pub id: String,
    pub name: String,
    pub duration_hours: f64,
    pub cost: f64,
}

/// One day of a trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayPlan {
    pub number: u32,
    pub date: String,
    pub entries: Vec<PlannedActivity>,
}

/// A named trip spanning a date range, broken into day plans.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    days: Vec<DayPlan>,
}

impl Itinerary {
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            days: Vec::new(),
        }
    }

    /// Append a day. Returns `false` when the day number is already used.
    pub fn add_day(&mut self, number: u32, date: impl Into<String>) -> bool {
        if self.days.iter().any(|day| day.number == number) {
            return false;
        }
        self.days.push(DayPlan {
            number,
            date: date.into(),
            entries: Vec::new(),
        });
        true
    }

    /// Schedule an activity on an existing day. Returns `false` when the day
    /// does not exist.
    pub fn add_activity(&mut self, day: u32, activity: PlannedActivity) -> bool {
        match self.days.iter_mut().find(|plan| plan.number == day) {
            Some(plan) => {
                plan.entries.push(activity);
                true
            }
            None => false,
        }
    }

    /// Drop an activity by id. Returns `false` when the day or activity is
    /// missing.
    pub fn remove_activity(&mut self, day: u32, id: &str) -> bool {
        let Some(plan) = self.days.iter_mut().find(|plan| plan.number == day) else {
            return false;
        };
        let before = plan.entries.len();
        plan.entries.retain(|entry| entry.id != id);
        plan.entries.len() != before
    }

    /// Move an activity between days, keeping it when either day is missing.
    pub fn move_activity(&mut self, from_day: u32, to_day: u32, id: &str) -> bool {
        if !self.days.iter().any(|plan| plan.number == to_day) {
            return false;
        }
        let Some(source) = self.days.iter_mut().find(|plan| plan.number == from_day) else {
            return false;
        };
        let Some(position) = source.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };
        let entry = source.entries.remove(position);

        match self.days.iter_mut().find(|plan| plan.number == to_day) {
            Some(target) => {
                target.entries.push(entry);
                true
            }
            None => false,
        }
    }

    /// Activities scheduled on one day, in insertion order.
    pub fn day_schedule(&self, day: u32) -> Option<&[PlannedActivity]> {
        self.days
            .iter()
            .find(|plan| plan.number == day)
            .map(|plan| plan.entries.as_slice())
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn total_cost(&self) -> f64 {
        self.days
            .iter()
            .flat_map(|plan| plan.entries.iter())
            .map(|entry| entry.cost)
            .sum()
    }

    pub fn total_duration_hours(&self) -> f64 {
        self.days
            .iter()
            .flat_map(|plan| plan.entries.iter())
            .map(|entry| entry.duration_hours)
            .sum()
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Trip: {}", self.name)?;
        writeln!(f, "Duration: {} to {}", self.start_date, self.end_date)?;
        writeln!(f, "{}", "=".repeat(60))?;

        for plan in &self.days {
            writeln!(f)?;
            writeln!(f, "Day {} - {}", plan.number, plan.date)?;
            writeln!(f, "{}", "-".repeat(40))?;
            if plan.entries.is_empty() {
                writeln!(f, "  No activities planned")?;
            } else {
                for (index, entry) in plan.entries.iter().enumerate() {
                    writeln!(f, "  {}. {}", index + 1, entry.name)?;
                    writeln!(
                        f,
                        "     Duration: {}h | Cost: ${}",
                        entry.duration_hours, entry.cost
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: &str, name: &str, duration_hours: f64, cost: f64) -> PlannedActivity {
        PlannedActivity {
            id: id.to_string(),
            name: name.to_string(),
            duration_hours,
            cost,
        }
    }

    fn sample_itinerary() -> Itinerary {
        let mut trip = Itinerary::new("Highlands", "2026-06-01", "2026-06-03");
        assert!(trip.add_day(1, "2026-06-01"));
        assert!(trip.add_day(2, "2026-06-02"));
        assert!(trip.add_activity(1, activity("a1", "Castle tour", 2.0, 15.0)));
        assert!(trip.add_activity(1, activity("a2", "Distillery visit", 1.5, 25.0)));
        assert!(trip.add_activity(2, activity("a3", "Loch cruise", 3.0, 40.0)));
        trip
    }

    #[test]
    fn duplicate_day_numbers_are_rejected() {
        let mut trip = sample_itinerary();
        assert!(!trip.add_day(1, "2026-06-09"));
        assert_eq!(trip.days().len(), 2);
    }

    #[test]
    fn add_activity_requires_an_existing_day() {
        let mut trip = sample_itinerary();
        assert!(!trip.add_activity(9, activity("a9", "Ghost walk", 1.0, 5.0)));
    }

    #[test]
    fn remove_activity_by_id() {
        let mut trip = sample_itinerary();
        assert!(trip.remove_activity(1, "a1"));
        assert!(!trip.remove_activity(1, "a1"));
        assert_eq!(trip.day_schedule(1).unwrap().len(), 1);
    }

    #[test]
    fn move_activity_between_days() {
        let mut trip = sample_itinerary();
        assert!(trip.move_activity(1, 2, "a2"));
        assert_eq!(trip.day_schedule(1).unwrap().len(), 1);
        let day_two = trip.day_schedule(2).unwrap();
        assert_eq!(day_two.len(), 2);
        assert_eq!(day_two[1].id, "a2");
    }

    #[test]
    fn move_to_missing_day_keeps_the_activity_in_place() {
        let mut trip = sample_itinerary();
        assert!(!trip.move_activity(1, 9, "a2"));
        assert_eq!(trip.day_schedule(1).unwrap().len(), 2);
    }

    #[test]
    fn totals_sum_across_all_days() {
        let trip = sample_itinerary();
        assert_eq!(trip.total_cost(), 80.0);
        assert_eq!(trip.total_duration_hours(), 6.5);
    }

    #[test]
    fn display_renders_days_and_empty_days() {
        let mut trip = sample_itinerary();
        trip.add_day(3, "2026-06-03");
        let rendered = trip.to_string();
        assert!(rendered.contains("Trip: Highlands"));
        assert!(rendered.contains("Day 1 - 2026-06-01"));
        assert!(rendered.contains("1. Castle tour"));
        assert!(rendered.contains("No activities planned"));
    }
}
