//! Deduplication of schedule rows into one entry per vendor and location.

use std::collections::HashMap;

use soda_api::types::FoodTruck;

/// Widest name and location currently held, in characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: usize,
    pub location: usize,
}

/// Insertion-ordered map from `(applicant, location)` to the first
/// [`FoodTruck`] seen with that key.
///
/// A vendor with several time windows at one address shows up as several
/// rows upstream; only the first survives here, in its original position.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    entries: Vec<FoodTruck>,
    index: HashMap<(String, String), usize>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds records in order, skipping any whose key is already held.
    /// Returns how many new entries were added.
    pub fn ingest<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = FoodTruck>,
    {
        let before = self.entries.len();
        for truck in records {
            let key = (truck.applicant().to_string(), truck.location().to_string());
            if self.index.contains_key(&key) {
                tracing::trace!(applicant = %key.0, location = %key.1, "dropping duplicate row");
                continue;
            }
            self.index.insert(key, self.entries.len());
            self.entries.push(truck);
        }
        self.entries.len() - before
    }

    /// Number of unique keys held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the stored record for a vendor at a location.
    pub fn get(&self, applicant: &str, location: &str) -> Option<&FoodTruck> {
        self.index
            .get(&(applicant.to_string(), location.to_string()))
            .map(|&i| &self.entries[i])
    }

    /// `(name, location)` pairs for up to `count` entries starting at `start`.
    /// Out-of-range bounds are clipped, so this never panics.
    pub fn page(&self, start: usize, count: usize) -> Vec<(&str, &str)> {
        let start = start.min(self.entries.len());
        let end = start.saturating_add(count).min(self.entries.len());
        self.entries[start..end]
            .iter()
            .map(|t| (t.applicant(), t.location()))
            .collect()
    }

    /// Column widths over everything held right now.
    pub fn column_widths(&self) -> ColumnWidths {
        self.entries
            .iter()
            .fold(ColumnWidths::default(), |acc, t| ColumnWidths {
                name: acc.name.max(t.applicant().chars().count()),
                location: acc.location.max(t.location().chars().count()),
            })
    }
}
