//! In-memory store of tracked directories.

use crate::score::{PRUNE_THRESHOLD, score};
use serde::{Deserialize, Serialize};

/// One tracked directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Absolute filesystem path; unique key within the store.
    pub path: String,

    /// Visit counter; 1 on first visit, incremented on each revisit.
    pub frequency: u64,

    /// Seconds since epoch of the most recent visit.
    pub last_visited: i64,
}

impl Entry {
    /// Score this entry at time `now`.
    pub fn score(&self, now: i64) -> f64 {
        score(self.frequency, self.last_visited, now)
    }
}

/// Ordered collection of tracked directories.
///
/// Insertion order carries no meaning; the score-descending order is a
/// derived view recomputed by [`Store::sort_by_score`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    entries: Vec<Entry>,
}

impl Store {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a visit to `path` at time `now`.
    ///
    /// Revisits update the existing entry in place; a path never gets a
    /// second entry. Never fails and never removes entries.
    pub fn record_visit(&mut self, path: &str, now: i64) {
        match self.entries.iter_mut().find(|e| e.path == path) {
            Some(entry) => {
                entry.frequency += 1;
                entry.last_visited = now;
            }
            None => self.entries.push(Entry {
                path: path.to_string(),
                frequency: 1,
                last_visited: now,
            }),
        }
    }

    /// Delete the first entry whose path equals `path` exactly.
    /// No-op if no entry matches.
    pub fn remove(&mut self, path: &str) {
        if let Some(i) = self.entries.iter().position(|e| e.path == path) {
            self.entries.remove(i);
        }
    }

    /// Sort entries by descending score at time `now`.
    pub fn sort_by_score(&mut self, now: i64) {
        self.entries
            .sort_by(|a, b| b.score(now).total_cmp(&a.score(now)));
    }

    /// Sort by descending score, then drop entries that have decayed to
    /// the prune threshold or whose path no longer exists.
    ///
    /// `exists` is the path-existence predicate, injected so pruning can
    /// be exercised without a filesystem. This is the only
    /// garbage-collection mechanism; it runs once per invocation.
    pub fn normalize(&mut self, now: i64, exists: impl Fn(&str) -> bool) {
        self.sort_by_score(now);
        self.entries
            .retain(|e| e.score(now) > PRUNE_THRESHOLD && exists(&e.path));
    }

    /// Current entries annotated with their score at time `now`, in
    /// store order.
    pub fn list(&self, now: i64) -> Vec<(f64, &str)> {
        self.entries
            .iter()
            .map(|e| (e.score(now), e.path.as_str()))
            .collect()
    }
}

/// Current time in seconds since the Unix epoch.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
