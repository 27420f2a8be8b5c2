//! Genre accumulators.
//!
//! The mapper reports genre and folksonomy tag names with a weight to a
//! [`GenreSink`]. [`GenreTally`] is the standard sink: it merges repeated
//! names by summing their weights while remembering first-seen order.
//! [`CreditedEntity`] stands for a track or an album, which carries its own
//! tally plus one tally per credited artist.

use serde::Serialize;

/// Receives weighted genre names.
pub trait GenreSink {
    fn add_genre(&mut self, name: &str, count: u32);
}

/// Ordered genre name to accumulated weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenreTally {
    counts: Vec<(String, u32)>,
}

impl GenreTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated weight of a genre, `0` if never added.
    pub fn count(&self, name: &str) -> u32 {
        self.counts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Genres sorted by descending weight, ties kept in first-seen order.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl GenreSink for GenreTally {
    fn add_genre(&mut self, name: &str, count: u32) {
        match self.counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, total)) => *total = total.saturating_add(count),
            None => self.counts.push((name.to_string(), count)),
        }
    }
}

/// A track or album: its own genres plus the genres of each credited artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreditedEntity {
    pub genres: GenreTally,
    pub artists: Vec<(String, GenreTally)>,
}

impl CreditedEntity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the tally for an artist, appending a new one on first use.
    pub fn append_artist(&mut self, artist_id: &str) -> &mut GenreTally {
        let idx = match self.artists.iter().position(|(id, _)| id == artist_id) {
            Some(idx) => idx,
            None => {
                self.artists.push((artist_id.to_string(), GenreTally::new()));
                self.artists.len() - 1
            }
        };
        &mut self.artists[idx].1
    }

    /// Tally for an artist previously appended.
    pub fn artist(&self, artist_id: &str) -> Option<&GenreTally> {
        self.artists
            .iter()
            .find(|(id, _)| id == artist_id)
            .map(|(_, tally)| tally)
    }
}

impl GenreSink for CreditedEntity {
    fn add_genre(&mut self, name: &str, count: u32) {
        self.genres.add_genre(name, count);
    }
}
