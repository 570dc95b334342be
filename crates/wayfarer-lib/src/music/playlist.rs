use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::index::Song;
use super::plays::PlayCounts;

/// Default priority for songs without a usable ranking attribute.
const FALLBACK_PRIORITY: f64 = 1.0;

#[derive(Debug, Clone)]
struct RankedSong {
    song: Song,
    priority: f64,
}

impl PartialEq for RankedSong {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.song.title == other.song.title
    }
}

impl Eq for RankedSong {}

impl Ord for RankedSong {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap by priority; equal priorities pop the lexicographically
        // smaller title first.
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.song.title.cmp(&self.song.title))
    }
}

impl PartialOrd for RankedSong {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-queue playlist builder.
///
/// Songs are ranked either by their `rating` metadata or by play counts; the
/// heap is rebuilt whenever a ranking method is applied.
#[derive(Debug, Default)]
pub struct PlaylistBuilder {
    heap: BinaryHeap<RankedSong>,
}

impl PlaylistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the heap ranking songs by their `rating` metadata value;
    /// songs without a parseable rating rank at the fallback priority.
    pub fn rank_by_rating(&mut self, songs: &[Song]) {
        self.heap.clear();
        for song in songs {
            let priority = song
                .metadata
                .get("rating")
                .and_then(|raw| raw.parse::<f64>().ok())
                .unwrap_or(FALLBACK_PRIORITY);
            self.heap.push(RankedSong {
                song: song.clone(),
                priority,
            });
        }
    }

    /// Rebuild the heap ranking songs by how often they have been played.
    pub fn rank_by_play_counts(&mut self, songs: &[Song], plays: &PlayCounts) {
        self.heap.clear();
        for song in songs {
            self.heap.push(RankedSong {
                song: song.clone(),
                priority: plays.count(&song.title) as f64,
            });
        }
    }

    /// Add one song at an explicit priority.
    pub fn push(&mut self, song: Song, priority: f64) {
        self.heap.push(RankedSong { song, priority });
    }

    /// The `k` highest-priority songs, best first, without consuming the heap.
    pub fn top(&self, k: usize) -> Vec<Song> {
        let mut heap = self.heap.clone();
        let mut songs = Vec::with_capacity(k.min(heap.len()));
        for _ in 0..k {
            match heap.pop() {
                Some(entry) => songs.push(entry.song),
                None => break,
            }
        }
        songs
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Concatenate two playlists, first one leading.
pub fn merge_playlists(mut first: Vec<Song>, second: Vec<Song>) -> Vec<Song> {
    first.extend(second);
    first
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn song(title: &str, rating: Option<&str>) -> Song {
        let mut metadata = HashMap::new();
        if let Some(rating) = rating {
            metadata.insert("rating".to_string(), rating.to_string());
        }
        Song {
            title: title.to_string(),
            artist: "Various".to_string(),
            metadata,
        }
    }

    #[test]
    fn rank_by_rating_pops_highest_rated_first() {
        let songs = vec![
            song("Mid", Some("3.0")),
            song("Top", Some("4.9")),
            song("Low", Some("1.2")),
            song("Unrated", None),
        ];
        let mut builder = PlaylistBuilder::new();
        builder.rank_by_rating(&songs);

        let top = builder.top(2);
        let titles: Vec<&str> = top.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Top", "Mid"]);
        // top() does not consume the heap.
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn equal_priorities_break_ties_by_title() {
        let songs = vec![song("Bravo", Some("2.0")), song("Alpha", Some("2.0"))];
        let mut builder = PlaylistBuilder::new();
        builder.rank_by_rating(&songs);
        let top = builder.top(2);
        let titles: Vec<&str> = top.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Bravo"]);
    }

    #[test]
    fn rank_by_play_counts_uses_the_tracker() {
        let songs = vec![song("Fresh", None), song("Favourite", None)];
        let mut plays = PlayCounts::new();
        for _ in 0..5 {
            plays.record("Favourite");
        }

        let mut builder = PlaylistBuilder::new();
        builder.rank_by_play_counts(&songs, &plays);
        let top = builder.top(1);
        assert_eq!(top[0].title, "Favourite");
    }

    #[test]
    fn top_beyond_len_returns_everything() {
        let mut builder = PlaylistBuilder::new();
        builder.push(song("Only", None), 1.0);
        assert_eq!(builder.top(10).len(), 1);
        assert!(!builder.is_empty());
    }

    #[test]
    fn ranking_again_replaces_the_previous_heap() {
        let mut builder = PlaylistBuilder::new();
        builder.rank_by_rating(&[song("First", Some("5.0"))]);
        builder.rank_by_rating(&[song("Second", Some("1.0"))]);
        assert_eq!(builder.len(), 1);
        assert_eq!(builder.top(1)[0].title, "Second");
    }

    #[test]
    fn merge_keeps_relative_order() {
        let merged = merge_playlists(
            vec![song("One", None), song("Two", None)],
            vec![song("Three", None)],
        );
        let titles: Vec<&str> = merged.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }
}
