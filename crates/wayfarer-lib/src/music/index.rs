use std::collections::HashMap;

/// A song with open key/value metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    song: Option<Song>,
}

/// Prefix-searchable song index keyed on lowercased titles.
///
/// Lookups are case-insensitive; re-inserting a title replaces the stored
/// song. Query results are ordered by title so callers see deterministic
/// output.
#[derive(Debug, Default)]
pub struct SongIndex {
    root: TrieNode,
}

impl SongIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, song: Song) {
        let mut node = &mut self.root;
        for ch in song.title.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }
        node.song = Some(song);
    }

    /// Every song whose title starts with `prefix`, ordered by title.
    pub fn search_prefix(&self, prefix: &str) -> Vec<&Song> {
        let mut node = &self.root;
        for ch in prefix.to_lowercase().chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        let mut songs = Vec::new();
        collect_songs(node, &mut songs);
        songs.sort_by(|a, b| a.title.cmp(&b.title));
        songs
    }

    /// The first `limit` prefix matches, ordered by title.
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Vec<&Song> {
        let mut songs = self.search_prefix(prefix);
        songs.truncate(limit);
        songs
    }

    /// Remove a song by title, pruning trie branches left empty. Returns
    /// `false` when the title is not indexed.
    pub fn remove(&mut self, title: &str) -> bool {
        let key: Vec<char> = title.to_lowercase().chars().collect();
        remove_at(&mut self.root, &key, 0)
    }

    pub fn all_songs(&self) -> Vec<&Song> {
        self.search_prefix("")
    }

    pub fn by_artist(&self, artist: &str) -> Vec<&Song> {
        self.all_songs()
            .into_iter()
            .filter(|song| song.artist == artist)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.root.song.is_none() && self.root.children.is_empty()
    }
}

fn collect_songs<'a>(node: &'a TrieNode, songs: &mut Vec<&'a Song>) {
    if let Some(song) = &node.song {
        songs.push(song);
    }
    for child in node.children.values() {
        collect_songs(child, songs);
    }
}

fn remove_at(node: &mut TrieNode, key: &[char], depth: usize) -> bool {
    if depth == key.len() {
        return node.song.take().is_some();
    }
    let ch = key[depth];
    let Some(child) = node.children.get_mut(&ch) else {
        return false;
    };
    let removed = remove_at(child, key, depth + 1);
    if removed && child.song.is_none() && child.children.is_empty() {
        node.children.remove(&ch);
    }
    removed
}
