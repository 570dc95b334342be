use std::collections::HashMap;

/// Play-count tracker keyed by song identifier.
#[derive(Debug, Clone, Default)]
pub struct PlayCounts {
    counts: HashMap<String, u64>,
}

impl PlayCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: &str) {
        *self.counts.entry(id.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, id: &str) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// The `k` most-played identifiers, highest count first; equal counts
    /// order by identifier so output is deterministic.
    pub fn most_played(&self, k: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(id, count)| (id.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_and_count_reads_back() {
        let mut plays = PlayCounts::new();
        plays.record("a");
        plays.record("a");
        plays.record("b");
        assert_eq!(plays.count("a"), 2);
        assert_eq!(plays.count("b"), 1);
        assert_eq!(plays.count("never-played"), 0);
    }

    #[test]
    fn most_played_orders_by_count_then_id() {
        let mut plays = PlayCounts::new();
        for _ in 0..3 {
            plays.record("c");
        }
        for _ in 0..3 {
            plays.record("a");
        }
        plays.record("b");

        assert_eq!(
            plays.most_played(3),
            vec![
                ("a".to_string(), 3),
                ("c".to_string(), 3),
                ("b".to_string(), 1)
            ]
        );
        assert_eq!(plays.most_played(1), vec![("a".to_string(), 3)]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut plays = PlayCounts::new();
        plays.record("a");
        plays.reset();
        assert_eq!(plays.count("a"), 0);
        assert!(plays.most_played(5).is_empty());
    }
}
